use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use heritage_core::viewer::ImageRef;
use tracing::debug;

use crate::convert::dynamic_to_color_image;
use crate::messages::WorkerResult;

use super::send;

pub(super) fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("heritage-gui/", env!("CARGO_PKG_VERSION")))
        .build()
}

pub(super) fn handle_load_image(
    image: &ImageRef,
    http: Option<&reqwest::blocking::Client>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_image(image, http) {
        Ok(color) => {
            debug!(%image, elapsed_ms = start.elapsed().as_millis(), "image decoded");
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    image: image.clone(),
                    color,
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::ImageFailed {
                image: image.clone(),
                message: format!("{e:#}"),
            },
        ),
    }
}

fn load_image(
    image: &ImageRef,
    http: Option<&reqwest::blocking::Client>,
) -> Result<egui::ColorImage> {
    let bytes = if image.is_remote() {
        let client = http.context("no HTTP client")?;
        client
            .get(image.as_str())
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .with_context(|| format!("Failed to fetch {image}"))?
            .to_vec()
    } else {
        std::fs::read(image.as_str()).with_context(|| format!("Failed to read {image}"))?
    };
    let decoded =
        image::load_from_memory(&bytes).with_context(|| format!("Failed to decode {image}"))?;
    Ok(dynamic_to_color_image(&decoded))
}
