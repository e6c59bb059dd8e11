mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use heritage_core::catalog::Catalog;
use heritage_core::config::AppConfig;
use tracing::{error, info};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional first argument: config file.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match AppConfig::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load config, using defaults");
            AppConfig::default()
        }
    };

    let catalog = Catalog::load(&config.catalog).map_err(|e| {
        error!(path = %config.catalog.display(), error = %e, "failed to load catalog");
        format!("Failed to load {}: {e}", config.catalog.display())
    });
    if let Ok(ref catalog) = catalog {
        info!(sites = catalog.sites().len(), "catalog ready");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Heritage Tour"),
        ..Default::default()
    };

    eframe::run_native(
        "HeritageTour",
        options,
        Box::new(|cc| Ok(Box::new(app::HeritageApp::new(&cc.egui_ctx, config, catalog)))),
    )
}
