use std::collections::HashMap;
use std::sync::mpsc;

use heritage_core::viewer::ImageRef;

use crate::messages::WorkerCommand;

pub enum TextureSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed(String),
}

/// Decoded images keyed by reference. Each image is requested from the worker once.
#[derive(Default)]
pub struct TextureCache {
    slots: HashMap<ImageRef, TextureSlot>,
}

impl TextureCache {
    /// Texture for `image`, asking the worker to load it on first use.
    pub fn request(
        &mut self,
        image: &ImageRef,
        cmd_tx: &mpsc::Sender<WorkerCommand>,
    ) -> &TextureSlot {
        self.slots.entry(image.clone()).or_insert_with(|| {
            let _ = cmd_tx.send(WorkerCommand::LoadImage {
                image: image.clone(),
            });
            TextureSlot::Loading
        })
    }

    pub fn insert(&mut self, ctx: &egui::Context, image: ImageRef, color: egui::ColorImage) {
        let texture = ctx.load_texture(image.as_str(), color, egui::TextureOptions::LINEAR);
        self.slots.insert(image, TextureSlot::Ready(texture));
    }

    pub fn fail(&mut self, image: ImageRef, message: String) {
        self.slots.insert(image, TextureSlot::Failed(message));
    }

    pub fn loading_count(&self) -> usize {
        self.slots
            .values()
            .filter(|s| matches!(s, TextureSlot::Loading))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_sends_once() {
        let (tx, rx) = mpsc::channel();
        let mut cache = TextureCache::default();
        let image = ImageRef::from("https://example.org/a.jpg");

        assert!(matches!(cache.request(&image, &tx), TextureSlot::Loading));
        assert!(matches!(cache.request(&image, &tx), TextureSlot::Loading));
        assert_eq!(rx.try_iter().count(), 1);
        assert_eq!(cache.loading_count(), 1);

        cache.fail(image.clone(), "404".into());
        assert!(matches!(cache.request(&image, &tx), TextureSlot::Failed(m) if m == "404"));
        assert_eq!(cache.loading_count(), 0);
        assert_eq!(rx.try_iter().count(), 0);
    }
}
