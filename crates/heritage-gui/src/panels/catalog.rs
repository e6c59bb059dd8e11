use crate::app::HeritageApp;
use crate::panels::helpers::{option_combo, paint_image, ACCENT};

const CARD_WIDTH: f32 = 240.0;
const THUMB_HEIGHT: f32 = 150.0;

enum CardAction {
    Details(String),
    Tour(String),
}

pub fn show(ctx: &egui::Context, app: &mut HeritageApp) {
    egui::TopBottomPanel::top("catalog_filters").show(ctx, |ui| {
        ui.add_space(4.0);
        filter_bar(ui, app);
        ui.add_space(4.0);
    });

    let mut action = None;
    egui::CentralPanel::default().show(ctx, |ui| {
        let catalog = match app.catalog {
            Ok(ref catalog) => catalog,
            Err(ref message) => {
                show_placeholder(ui, message);
                return;
            }
        };

        let sites = catalog.filter(&app.ui_state.site_filter());
        if sites.is_empty() {
            show_placeholder(ui, "No sites found matching your criteria.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for site in sites {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.vertical(|ui| {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(CARD_WIDTH, THUMB_HEIGHT),
                                egui::Sense::hover(),
                            );
                            paint_image(ui, &mut app.textures, &app.cmd_tx, &site.main_image, rect);

                            ui.add_space(4.0);
                            ui.strong(&site.name);
                            ui.small(&site.location);
                            ui.label(egui::RichText::new(&site.tradition).color(ACCENT));
                            ui.horizontal(|ui| {
                                if ui.button("Details").clicked() {
                                    action = Some(CardAction::Details(site.id.clone()));
                                }
                                if ui.button("Virtual Tour").clicked() {
                                    action = Some(CardAction::Tour(site.id.clone()));
                                }
                            });
                        });
                    });
                }
            });
        });
    });

    match action {
        Some(CardAction::Details(id)) => app.open_detail(&id),
        Some(CardAction::Tour(id)) => app.start_tour(&id),
        None => {}
    }
}

fn filter_bar(ui: &mut egui::Ui, app: &mut HeritageApp) {
    ui.horizontal(|ui| {
        ui.heading("Heritage Sites");
        ui.separator();

        ui.add(
            egui::TextEdit::singleline(&mut app.ui_state.search)
                .hint_text("Search sites...")
                .desired_width(220.0),
        );

        let Ok(ref catalog) = app.catalog else {
            return;
        };
        let districts = catalog.districts();
        let traditions = catalog.traditions();
        option_combo(ui, "district", "All districts", &mut app.ui_state.district, &districts);
        option_combo(
            ui,
            "tradition",
            "All traditions",
            &mut app.ui_state.tradition,
            &traditions,
        );

        if ui.button("Clear").clicked() {
            app.ui_state.clear_filters();
        }
    });
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
