use heritage_core::chat::{ChatRequest, SessionId};
use heritage_core::viewer::ImageRef;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch (remote) or read (local) an image and decode it for display.
    LoadImage { image: ImageRef },

    /// Forward one question to the guide.
    SendChat { request: ChatRequest },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        image: ImageRef,
        color: egui::ColorImage,
    },
    ImageFailed {
        image: ImageRef,
        message: String,
    },
    ChatReply {
        session_id: SessionId,
        reply: heritage_core::error::Result<String>,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
