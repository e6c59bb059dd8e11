mod chat;
mod dispatch;
mod images;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_log};
