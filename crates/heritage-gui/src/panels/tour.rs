use heritage_core::viewer::{Flow, TourEvent};

use crate::app::HeritageApp;
use crate::panels::helpers::{paint_hotspots, paint_image, ACCENT};
use crate::states::Screen;

pub fn show(ctx: &egui::Context, app: &mut HeritageApp) {
    let Some(ref nav) = app.tour else {
        app.ui_state.screen = Screen::Catalog;
        return;
    };
    let mut events = Vec::new();

    egui::TopBottomPanel::top("tour_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let title = app
                .catalog
                .as_ref()
                .ok()
                .and_then(|c| c.get(nav.site_id()).ok())
                .map_or(nav.site_id(), |site| site.name.as_str());
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close Tour").clicked() {
                    events.push(TourEvent::Close);
                }
                if ui.button("Enter 360\u{b0} View").clicked() {
                    events.push(TourEvent::EnterImmersive);
                }
            });
        });
    });

    egui::TopBottomPanel::bottom("tour_points").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.strong("Virtual Tour Points");
        ui.horizontal_wrapped(|ui| {
            let active = &nav.active_tour_point().id;
            for point in nav.tour_points() {
                let text = egui::RichText::new(format!("\u{1F4F7} {}", point.label));
                let text = if &point.id == active {
                    text.color(ACCENT).strong()
                } else {
                    text
                };
                if ui.button(text).clicked() {
                    events.push(TourEvent::SelectTourPoint(point.id.clone()));
                }
            }
        });
        ui.add_space(4.0);
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            ui.allocate_rect(rect, egui::Sense::hover());
            paint_image(ui, &mut app.textures, &app.cmd_tx, nav.current_image(), rect);
            if app.config.viewer.show_hotspots {
                paint_hotspots(ui, rect);
            }

            let state = nav.state();
            let count = nav.active_tour_point().images.len();
            let bar = egui::Rect::from_center_size(
                egui::pos2(rect.center().x, rect.bottom() - 24.0),
                egui::vec2(200.0, 32.0),
            );
            ui.scope_builder(egui::UiBuilder::new().max_rect(bar), |ui| {
                ui.horizontal_centered(|ui| {
                    if ui
                        .add_enabled(state.active_image_index > 0, egui::Button::new("\u{25C0}"))
                        .clicked()
                    {
                        events.push(TourEvent::PreviousImage);
                    }
                    ui.label(
                        egui::RichText::new(format!("{} / {count}", state.active_image_index + 1))
                            .color(egui::Color32::WHITE),
                    );
                    if ui
                        .add_enabled(
                            state.active_image_index + 1 < count,
                            egui::Button::new("\u{25B6}"),
                        )
                        .clicked()
                    {
                        events.push(TourEvent::NextImage);
                    }
                });
            });
        });

    apply_events(app, &events);
}

/// Feed UI events through the navigator; a close event ends the tour.
pub(crate) fn apply_events(app: &mut HeritageApp, events: &[TourEvent]) {
    let Some(ref mut nav) = app.tour else {
        return;
    };
    for event in events {
        if nav.apply(event) == Flow::Close {
            app.end_tour();
            return;
        }
    }
}
