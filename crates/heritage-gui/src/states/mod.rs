mod textures;
mod ui;

pub use textures::{TextureCache, TextureSlot};
pub use ui::{DetailTab, Screen, UIState};
