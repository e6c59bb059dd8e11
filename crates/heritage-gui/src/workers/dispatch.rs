use std::sync::mpsc;

use heritage_core::chat::HttpGuideChat;
use heritage_core::config::ChatConfig;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{chat, images};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    chat_config: ChatConfig,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("heritage-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, chat_config);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    chat_config: ChatConfig,
) {
    let http = match images::http_client() {
        Ok(client) => Some(client),
        Err(e) => {
            send_error(&tx, &ctx, format!("Remote images unavailable: {e}"));
            None
        }
    };
    let guide = match HttpGuideChat::new(&chat_config.endpoint, chat_config.timeout()) {
        Ok(guide) => Some(guide),
        Err(e) => {
            send_error(&tx, &ctx, format!("Guide chat unavailable: {e}"));
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { image } => {
                images::handle_load_image(&image, http.as_ref(), &tx, &ctx);
            }
            WorkerCommand::SendChat { request } => {
                chat::handle_send_chat(&request, guide.as_ref(), &tx, &ctx);
            }
        }
    }
}
