/// Lower bound of the immersive zoom factor.
pub const MIN_ZOOM: f32 = 0.5;

/// Upper bound of the immersive zoom factor.
pub const MAX_ZOOM: f32 = 3.0;

/// Degrees of rotation accumulated per pointer unit of horizontal drag.
pub const ROTATION_SENSITIVITY: f32 = 0.5;

/// Zoom change per unit of wheel delta. A `+0.2` wheel step moves zoom by 0.5.
pub const ZOOM_SENSITIVITY: f32 = 2.5;

/// Zoom factor of the identity transform.
pub const IDENTITY_ZOOM: f32 = 1.0;

/// Full turn, used only to wrap rotation for display.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Default guide chat endpoint (the backend's `/api` prefix).
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:8000/api";

/// Default guide chat request timeout.
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the chat endpoint.
pub const BACKEND_URL_ENV: &str = "HERITAGE_BACKEND_URL";

/// Inline reply shown when a guide chat request fails.
pub const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Shown in place of a blank founding date.
pub const FOUNDED_FALLBACK: &str = "Ancient times";
