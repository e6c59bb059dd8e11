pub mod chat;
pub mod config;
pub mod info;
pub mod list;
pub mod tour;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use heritage_core::catalog::Catalog;
use heritage_core::config::AppConfig;

/// Global options shared by every subcommand.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub catalog_override: Option<PathBuf>,
}

impl Context {
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::resolve(self.config_path.as_deref()).with_context(|| {
            match &self.config_path {
                Some(path) => format!("Failed to load config {}", path.display()),
                None => "Failed to resolve default config".to_string(),
            }
        })?;
        if let Some(ref catalog) = self.catalog_override {
            config.catalog = catalog.clone();
        }
        Ok(config)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        let config = self.config()?;
        Catalog::load(&config.catalog)
            .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))
    }
}
