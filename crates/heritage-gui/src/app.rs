use std::sync::mpsc;

use heritage_core::catalog::Catalog;
use heritage_core::chat::{ChatSession, SessionId};
use heritage_core::config::AppConfig;
use heritage_core::viewer::{KeyboardHub, TourNavigator};
use tracing::{info, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{DetailTab, Screen, TextureCache, UIState};
use crate::workers;

pub struct HeritageApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: AppConfig,
    pub catalog: Result<Catalog, String>,
    pub ui_state: UIState,
    pub textures: TextureCache,
    /// Shared by every immersive session; counts live keyboard listeners.
    pub keyboard: KeyboardHub,
    pub tour: Option<TourNavigator>,
}

impl HeritageApp {
    pub fn new(ctx: &egui::Context, config: AppConfig, catalog: Result<Catalog, String>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx, ctx.clone(), config.chat.clone());

        let mut ui_state = UIState::default();
        if let Err(ref message) = catalog {
            ui_state.add_log(format!("ERROR: {message}"));
        }

        Self {
            cmd_tx,
            result_rx,
            config,
            catalog,
            ui_state,
            textures: TextureCache::default(),
            keyboard: KeyboardHub::new(),
            tour: None,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { image, color } => {
                    self.textures.insert(ctx, image, color);
                }
                WorkerResult::ImageFailed { image, message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.textures.fail(image, message);
                }
                WorkerResult::ChatReply { session_id, reply } => {
                    match self.ui_state.chat {
                        Some(ref mut chat) if *chat.session_id() == session_id => {
                            chat.complete(reply);
                        }
                        // The detail page was left while the request was in flight.
                        _ => warn!(session = %session_id, "dropping reply for closed chat"),
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Open the detail page of `site_id` with a fresh guide conversation.
    pub fn open_detail(&mut self, site_id: &str) {
        self.ui_state.screen = Screen::Detail {
            site_id: site_id.to_string(),
        };
        self.ui_state.detail_tab = DetailTab::Overview;
        self.ui_state.gallery_index = 0;
        self.ui_state.chat_input.clear();
        self.ui_state.chat = Some(ChatSession::new(
            SessionId::generate(),
            Some(site_id.to_string()),
        ));
    }

    /// Start a virtual tour of `site_id` in gallery mode.
    pub fn start_tour(&mut self, site_id: &str) {
        let Ok(ref catalog) = self.catalog else {
            return;
        };
        let started = catalog.get(site_id).and_then(|site| {
            TourNavigator::new(&site.id, site.tour_points(), site.panorama(), &self.keyboard)
        });
        match started {
            Ok(nav) => {
                self.tour = Some(nav);
                self.ui_state.screen = Screen::Tour;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: cannot start tour: {e}")),
        }
    }

    /// Close the running tour and return to the catalog.
    pub fn end_tour(&mut self) {
        if let Some(nav) = self.tour.take() {
            let ended = nav.close();
            info!(site = %ended.site_id, "tour ended");
            self.ui_state.add_log(format!("Tour of {} ended", ended.site_id));
        }
        self.ui_state.screen = Screen::Catalog;
    }

    pub fn send_chat(&mut self) {
        let Some(ref mut chat) = self.ui_state.chat else {
            return;
        };
        if let Some(request) = chat.begin_send(&self.ui_state.chat_input) {
            self.ui_state.chat_input.clear();
            let _ = self.cmd_tx.send(WorkerCommand::SendChat { request });
        }
    }
}

impl eframe::App for HeritageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::status::show(ctx, self);
        match self.ui_state.screen.clone() {
            Screen::Catalog => panels::catalog::show(ctx, self),
            Screen::Detail { site_id } => panels::detail::show(ctx, self, &site_id),
            Screen::Tour => {
                let immersive = self.tour.as_ref().is_some_and(|t| t.immersive().is_some());
                if immersive {
                    panels::immersive::show(ctx, self);
                } else {
                    panels::tour::show(ctx, self);
                }
            }
        }
    }
}
