use heritage_core::geometry::Vec2;
use heritage_core::viewer::{TourEvent, ViewerKey};

use crate::app::HeritageApp;
use crate::panels::helpers::{fit_size, paint_hotspots, paint_placeholder, placeholder_for};
use crate::panels::tour::apply_events;
use crate::states::TextureSlot;

/// Wheel delta per point of scroll. One 50-point notch is a `0.2` step.
const SCROLL_TO_ZOOM_DELTA: f32 = 0.004;

pub fn show(ctx: &egui::Context, app: &mut HeritageApp) {
    let Some(controller) = app.tour.as_ref().and_then(|t| t.immersive()) else {
        return;
    };
    let mut events = Vec::new();

    egui::TopBottomPanel::top("immersive_toolbar").show(ctx, |ui| {
        let state = controller.state();
        let count = controller.image_count();
        ui.horizontal(|ui| {
            if ui.button("Exit 360\u{b0} View").clicked() {
                events.push(TourEvent::ExitImmersive);
            }
            ui.separator();
            if ui
                .add_enabled(state.active_image_index > 0, egui::Button::new("\u{25C0}"))
                .clicked()
            {
                events.push(TourEvent::PreviousImage);
            }
            ui.label(format!("{} / {count}", state.active_image_index + 1));
            if ui
                .add_enabled(state.active_image_index + 1 < count, egui::Button::new("\u{25B6}"))
                .clicked()
            {
                events.push(TourEvent::NextImage);
            }
            ui.separator();
            ui.label(format!("Rotation: {:.0}\u{b0}", controller.rotation_display_degrees()));
            ui.label(format!("Zoom: {:.0}%", state.zoom_factor * 100.0));
            if ui.button("Reset").clicked() {
                events.push(TourEvent::Reset);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close Tour").clicked() {
                    events.push(TourEvent::Close);
                }
            });
        });
        ui.small("Drag to rotate and pan \u{b7} scroll to zoom \u{b7} \u{2190}/\u{2192} switch images \u{b7} R resets \u{b7} Esc exits");
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            pointer_events(ui, &response, &mut events);
            if app.keyboard.is_attached() && controller.has_keyboard() {
                key_events(ui, &mut events);
            }

            let state = controller.state();
            let slot = app.textures.request(controller.current_image(), &app.cmd_tx);
            match placeholder_for(slot) {
                None => {
                    if let TextureSlot::Ready(texture) = slot {
                        let size = fit_size(texture.size_vec2(), rect.size()) * state.zoom_factor;
                        let center = rect.center() + egui::vec2(state.offset.x, state.offset.y);
                        egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), size))
                            .rotate(state.rotation_degrees.to_radians(), egui::Vec2::splat(0.5))
                            .paint_at(ui, egui::Rect::from_center_size(center, size));
                    }
                }
                Some(placeholder) => paint_placeholder(ui, rect, placeholder),
            }

            if app.config.viewer.show_hotspots {
                paint_hotspots(ui, rect);
            }
        });

    apply_events(app, &events);
}

fn to_core(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

fn pointer_events(ui: &egui::Ui, response: &egui::Response, events: &mut Vec<TourEvent>) {
    let primary = egui::PointerButton::Primary;
    if let Some(pointer) = response.interact_pointer_pos() {
        if response.drag_started_by(primary) {
            events.push(TourEvent::DragStart(to_core(pointer)));
        }
        if response.dragged_by(primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(TourEvent::Drag {
                    pointer: to_core(pointer),
                    delta: Vec2::new(delta.x, delta.y),
                });
            }
        }
    }
    if response.drag_stopped_by(primary) {
        events.push(TourEvent::DragEnd);
    }
    if response.double_clicked() {
        events.push(TourEvent::Reset);
    }

    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll != 0.0 && response.hovered() {
        events.push(TourEvent::Zoom(scroll * SCROLL_TO_ZOOM_DELTA));
    }
}

fn key_events(ui: &egui::Ui, events: &mut Vec<TourEvent>) {
    ui.input(|i| {
        for event in &i.events {
            if let egui::Event::Key {
                key, pressed: true, ..
            } = event
            {
                if let Some(key) = viewer_key(*key) {
                    events.push(TourEvent::Key(key));
                }
            }
        }
    });
}

fn viewer_key(key: egui::Key) -> Option<ViewerKey> {
    match key {
        egui::Key::Escape => Some(ViewerKey::Escape),
        egui::Key::ArrowLeft => Some(ViewerKey::ArrowLeft),
        egui::Key::ArrowRight => Some(ViewerKey::ArrowRight),
        egui::Key::R => Some(ViewerKey::Char('r')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::viewer_key;
    use heritage_core::viewer::ViewerKey;

    #[test]
    fn test_viewer_key_mapping() {
        assert_eq!(viewer_key(egui::Key::Escape), Some(ViewerKey::Escape));
        assert_eq!(viewer_key(egui::Key::ArrowLeft), Some(ViewerKey::ArrowLeft));
        assert_eq!(viewer_key(egui::Key::ArrowRight), Some(ViewerKey::ArrowRight));
        assert_eq!(viewer_key(egui::Key::R), Some(ViewerKey::Char('r')));
        assert_eq!(viewer_key(egui::Key::Space), None);
    }
}
