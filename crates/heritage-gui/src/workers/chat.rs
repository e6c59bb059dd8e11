use std::sync::mpsc;

use heritage_core::chat::{ChatRequest, GuideChat, HttpGuideChat};
use heritage_core::error::HeritageError;

use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_send_chat(
    request: &ChatRequest,
    guide: Option<&HttpGuideChat>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(guide) = guide else {
        send(
            tx,
            ctx,
            WorkerResult::ChatReply {
                session_id: request.session_id.clone(),
                reply: Err(HeritageError::ChatUnavailable(
                    "no HTTP client".into(),
                )),
            },
        );
        return;
    };

    let reply = guide.send_request(request);
    if let Err(ref e) = reply {
        send_log(tx, ctx, format!("Guide chat failed: {e}"));
    }
    send(
        tx,
        ctx,
        WorkerResult::ChatReply {
            session_id: request.session_id.clone(),
            reply,
        },
    );
}
