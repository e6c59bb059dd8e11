use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeritageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization failed: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog contains no sites")]
    EmptyCatalog,

    #[error("Duplicate site id: {0}")]
    DuplicateSite(String),

    #[error("Unknown site: {0}")]
    UnknownSite(String),

    #[error("Tour requires at least one tour point")]
    NoTourPoints,

    #[error("Tour point '{0}' has no images")]
    EmptyTourPoint(String),

    #[error("Duplicate tour point id: {0}")]
    DuplicateTourPoint(String),

    #[error("Panoramic sequence is empty")]
    EmptyPanorama,

    #[error("Hotspot position ({x}, {y}) outside the unit square")]
    HotspotOutOfRange { x: f32, y: f32 },

    #[error("Invalid tour event: {0}")]
    InvalidEvent(String),

    #[error("Guide chat transport error: {0}")]
    Chat(#[from] reqwest::Error),

    #[error("Guide chat returned status {status}: {body}")]
    ChatStatus { status: u16, body: String },

    #[error("Guide chat unavailable: {0}")]
    ChatUnavailable(String),
}

pub type Result<T> = std::result::Result<T, HeritageError>;
