use std::sync::mpsc;

use heritage_core::geometry::{Rect, Vec2};
use heritage_core::viewer::{default_hotspots, layout_hotspots, ImageRef};

use crate::messages::WorkerCommand;
use crate::states::{TextureCache, TextureSlot};

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

/// ComboBox over `options` with an "All" entry for `None`. Returns `true` if the value changed.
pub(crate) fn option_combo(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    current: &mut Option<String>,
    options: &[&str],
) -> bool {
    let selected = current.as_deref().unwrap_or(all_label).to_string();
    let resp = egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            let mut changed = ui.selectable_value(current, None, all_label).changed();
            for &choice in options {
                if ui
                    .selectable_value(current, Some(choice.to_string()), choice)
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str) {
    egui::Frame::NONE.inner_margin(4.0).show(ui, |ui| {
        ui.strong(egui::RichText::new(label).color(ACCENT));
    });
}

/// Largest size with the aspect of `image` that fits inside `available`.
pub(crate) fn fit_size(image: egui::Vec2, available: egui::Vec2) -> egui::Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return available;
    }
    let scale = (available.x / image.x).min(available.y / image.y);
    image * scale
}

/// Paint `image` fitted into `rect`, or a loading/failed placeholder.
///
/// Returns the rect the image actually occupies.
pub(crate) fn paint_image(
    ui: &mut egui::Ui,
    textures: &mut TextureCache,
    cmd_tx: &mpsc::Sender<WorkerCommand>,
    image: &ImageRef,
    rect: egui::Rect,
) -> egui::Rect {
    match textures.request(image, cmd_tx) {
        TextureSlot::Ready(texture) => {
            let size = fit_size(texture.size_vec2(), rect.size());
            let img_rect = egui::Rect::from_center_size(rect.center(), size);
            egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), size))
                .paint_at(ui, img_rect);
            img_rect
        }
        TextureSlot::Loading => {
            paint_placeholder(ui, rect, Placeholder::Loading);
            rect
        }
        TextureSlot::Failed(_) => {
            paint_placeholder(ui, rect, Placeholder::Failed);
            rect
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placeholder {
    Loading,
    Failed,
}

/// What to draw instead of `slot`, or `None` once its texture is ready.
pub(crate) fn placeholder_for(slot: &TextureSlot) -> Option<Placeholder> {
    match slot {
        TextureSlot::Ready(_) => None,
        TextureSlot::Loading => Some(Placeholder::Loading),
        TextureSlot::Failed(_) => Some(Placeholder::Failed),
    }
}

pub(crate) fn paint_placeholder(ui: &mut egui::Ui, rect: egui::Rect, placeholder: Placeholder) {
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(40));
    match placeholder {
        Placeholder::Loading => {
            ui.put(
                egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0)),
                egui::Spinner::new(),
            );
        }
        Placeholder::Failed => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Image unavailable",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(140),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fit_size, placeholder_for, to_core_rect, Placeholder};
    use crate::states::TextureSlot;

    #[test]
    fn test_failed_image_gets_failed_placeholder() {
        assert_eq!(
            placeholder_for(&TextureSlot::Failed("404".into())),
            Some(Placeholder::Failed)
        );
        assert_eq!(placeholder_for(&TextureSlot::Loading), Some(Placeholder::Loading));
    }

    #[test]
    fn test_core_rect_matches_viewport() {
        let rect = to_core_rect(egui::Rect::from_min_size(
            egui::pos2(10.0, 20.0),
            egui::vec2(300.0, 200.0),
        ));
        assert_eq!(rect.min.x, 10.0);
        assert_eq!(rect.min.y, 20.0);
        assert_eq!(rect.width(), 300.0);
        assert_eq!(rect.height(), 200.0);
    }

    #[test]
    fn test_fit_size_keeps_aspect() {
        let fitted = fit_size(egui::vec2(200.0, 100.0), egui::vec2(100.0, 100.0));
        assert_eq!(fitted, egui::vec2(100.0, 50.0));

        let fitted = fit_size(egui::vec2(100.0, 400.0), egui::vec2(300.0, 200.0));
        assert_eq!(fitted, egui::vec2(50.0, 200.0));
    }

    #[test]
    fn test_fit_size_degenerate_image() {
        let fitted = fit_size(egui::vec2(0.0, 10.0), egui::vec2(30.0, 20.0));
        assert_eq!(fitted, egui::vec2(30.0, 20.0));
    }
}
