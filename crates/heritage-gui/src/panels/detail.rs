use heritage_core::catalog::SiteRecord;
use heritage_core::chat::ChatRole;

use crate::app::HeritageApp;
use crate::panels::helpers::{paint_image, section_header, ACCENT};
use crate::states::{DetailTab, Screen};

const HERO_HEIGHT: f32 = 260.0;

enum DetailAction {
    Back,
    StartTour,
    SendChat,
}

pub fn show(ctx: &egui::Context, app: &mut HeritageApp, site_id: &str) {
    let site = match app.catalog.as_ref().map(|c| c.get(site_id)) {
        Ok(Ok(site)) => site.clone(),
        _ => {
            app.ui_state.add_log(format!("ERROR: unknown site {site_id}"));
            app.ui_state.screen = Screen::Catalog;
            return;
        }
    };

    let mut action = None;
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            hero(ui, app, &site);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for tab in DetailTab::ALL {
                    ui.selectable_value(&mut app.ui_state.detail_tab, tab, tab.to_string());
                }
            });
            ui.separator();

            match app.ui_state.detail_tab {
                DetailTab::Overview => overview(ui, &site),
                DetailTab::Architecture => {
                    section_header(ui, "Architectural Details");
                    ui.label(&site.architecture);
                }
                DetailTab::Spiritual => {
                    section_header(ui, "Spiritual Significance");
                    ui.label(&site.spiritual_significance);
                    if !site.cultural_importance.is_empty() {
                        ui.add_space(6.0);
                        ui.label(&site.cultural_importance);
                    }
                }
                DetailTab::VisitInfo => {
                    visit_info(ui, &site);
                    ui.add_space(8.0);
                    if guide_chat(ui, app, &site) {
                        action = Some(DetailAction::SendChat);
                    }
                }
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Start Virtual Tour").clicked() {
                    action = Some(DetailAction::StartTour);
                }
                if ui.button("Back to Gallery").clicked() {
                    action = Some(DetailAction::Back);
                }
            });
        });
    });

    match action {
        Some(DetailAction::Back) => {
            app.ui_state.chat = None;
            app.ui_state.screen = Screen::Catalog;
        }
        Some(DetailAction::StartTour) => app.start_tour(&site.id),
        Some(DetailAction::SendChat) => app.send_chat(),
        None => {}
    }
}

fn hero(ui: &mut egui::Ui, app: &mut HeritageApp, site: &SiteRecord) {
    let gallery = site.gallery();
    let index = app.ui_state.gallery_index.min(gallery.len() - 1);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), HERO_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, 8.0, egui::Color32::from_gray(25));
    paint_image(ui, &mut app.textures, &app.cmd_tx, &gallery[index], rect);

    ui.horizontal(|ui| {
        if ui.add_enabled(index > 0, egui::Button::new("\u{25C0}")).clicked() {
            app.ui_state.gallery_index = index - 1;
        }
        ui.label(format!("{} / {}", index + 1, gallery.len()));
        if ui
            .add_enabled(index + 1 < gallery.len(), egui::Button::new("\u{25B6}"))
            .clicked()
        {
            app.ui_state.gallery_index = index + 1;
        }
    });

    ui.heading(&site.name);
    ui.label(egui::RichText::new(format!("\u{1F4CD} {}", site.location)).color(ACCENT));
}

fn overview(ui: &mut egui::Ui, site: &SiteRecord) {
    section_header(ui, &format!("About {}", site.name));
    ui.label(&site.description);
    ui.add_space(6.0);

    egui::Grid::new("overview_facts")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Tradition");
            ui.label(&site.tradition);
            ui.end_row();
            ui.strong("Founded");
            ui.label(site.founded_or_default());
            ui.end_row();
            if !site.altitude.is_empty() {
                ui.strong("Altitude");
                ui.label(&site.altitude);
                ui.end_row();
            }
            if !site.district.is_empty() {
                ui.strong("District");
                ui.label(&site.district);
                ui.end_row();
            }
        });

    if !site.highlights.is_empty() {
        ui.add_space(6.0);
        section_header(ui, "Highlights");
        for highlight in &site.highlights {
            ui.label(format!("\u{2B50} {highlight}"));
        }
    }

    if !site.festivals.is_empty() {
        ui.add_space(6.0);
        section_header(ui, "Festivals");
        for festival in &site.festivals {
            ui.horizontal(|ui| {
                ui.strong(&festival.name);
                ui.small(&festival.date);
            });
            ui.label(&festival.description);
        }
    }
}

fn visit_info(ui: &mut egui::Ui, site: &SiteRecord) {
    section_header(ui, "Visiting Information");
    let travel = &site.travel_info;
    let rows = [
        ("Opening Hours", site.visiting_hours.clone()),
        ("Entrance Fee", site.entrance_fee.clone()),
        ("Accessibility", site.accessibility.clone()),
        ("Best Time", travel.best_time_to_visit.clone()),
        ("Nearest Airport", travel.nearest_airport.clone()),
        ("Local Transport", travel.local_transport.clone()),
        ("Permits", travel.permits_required.clone()),
        ("Weather", travel.weather_info.clone()),
        ("Accommodation", travel.accommodation.join(", ")),
    ];
    egui::Grid::new("visit_info")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in rows.iter().filter(|(_, v)| !v.is_empty()) {
                ui.strong(*label);
                ui.label(value);
                ui.end_row();
            }
        });
}

/// Returns `true` when the user asked to send the typed message.
fn guide_chat(ui: &mut egui::Ui, app: &mut HeritageApp, site: &SiteRecord) -> bool {
    section_header(ui, "Ask Our Guide");
    let Some(ref chat) = app.ui_state.chat else {
        return false;
    };
    let pending = chat.is_pending();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("chat_log")
            .max_height(240.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if chat.entries().is_empty() {
                    ui.weak(format!("Ask me anything about {}!", site.name));
                }
                for entry in chat.entries() {
                    match entry.role {
                        ChatRole::User => {
                            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                                ui.label(egui::RichText::new(&entry.text).color(ACCENT));
                            });
                        }
                        ChatRole::Guide => {
                            ui.label(&entry.text);
                        }
                    }
                }
                if pending {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("Guide is typing...");
                    });
                }
            });
    });

    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut app.ui_state.chat_input)
                .hint_text("Ask about history, architecture, visiting tips...")
                .desired_width(ui.available_width() - 70.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
        let can_send = !pending && !app.ui_state.chat_input.trim().is_empty();
        if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
            send = true;
        }
    });
    send
}
