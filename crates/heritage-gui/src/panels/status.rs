use crate::app::HeritageApp;

pub fn show(ctx: &egui::Context, app: &mut HeritageApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed at 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            match app.catalog {
                Ok(ref catalog) => ui.label(format!("{} sites", catalog.sites().len())),
                Err(_) => ui.label("No catalog"),
            };
            ui.separator();

            let loading = app.textures.loading_count();
            if loading > 0 {
                ui.spinner();
                ui.label(format!("Loading {loading} image(s)"));
                ui.separator();
            }

            if let Some(ref nav) = app.tour {
                ui.label(format!("Touring {}", nav.site_id()));
                ui.separator();
            }
            ui.label(format!("Keyboard listeners: {}", app.keyboard.listener_count()));
        });

        ui.add_space(2.0);
    });
}
