use std::sync::Arc;

use crate::consts::{
    FULL_TURN_DEGREES, IDENTITY_ZOOM, MAX_ZOOM, MIN_ZOOM, ROTATION_SENSITIVITY, ZOOM_SENSITIVITY,
};
use crate::error::{HeritageError, Result};
use crate::geometry::Vec2;

use super::events::ViewerKey;
use super::keyboard::KeyboardLease;
use super::step_index;
use super::tour_point::ImageRef;

/// On-screen transform of the immersive image plus drag bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformState {
    /// Free-running accumulator; wrapping at 360 is a rendering concern.
    pub rotation_degrees: f32,
    /// Always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom_factor: f32,
    pub offset: Vec2,
    pub dragging: bool,
    /// Pointer-space origin of the current drag. Meaningful only while `dragging`.
    pub drag_anchor: Vec2,
    pub active_image_index: usize,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation_degrees: 0.0,
            zoom_factor: IDENTITY_ZOOM,
            offset: Vec2::ZERO,
            dragging: false,
            drag_anchor: Vec2::ZERO,
            active_image_index: 0,
        }
    }
}

impl TransformState {
    /// True when rotation, zoom and offset hold their identity values.
    pub fn is_identity(&self) -> bool {
        self.rotation_degrees == 0.0 && self.zoom_factor == IDENTITY_ZOOM && self.offset == Vec2::ZERO
    }
}

/// What the caller should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// The user asked to leave the immersive view.
    Close,
    Ignored,
}

/// Interprets pointer, wheel and keyboard input into a planar transform over
/// a fixed, non-empty image sequence.
#[derive(Debug)]
pub struct TransformController {
    images: Arc<[ImageRef]>,
    state: TransformState,
    keyboard: Option<KeyboardLease>,
}

impl TransformController {
    pub fn new(images: Arc<[ImageRef]>) -> Result<Self> {
        if images.is_empty() {
            return Err(HeritageError::EmptyPanorama);
        }
        Ok(Self {
            images,
            state: TransformState::default(),
            keyboard: None,
        })
    }

    /// Hold a keyboard listener for as long as this controller lives.
    pub fn with_keyboard(mut self, lease: KeyboardLease) -> Self {
        self.keyboard = Some(lease);
        self
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn has_keyboard(&self) -> bool {
        self.keyboard.is_some()
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn current_image(&self) -> &ImageRef {
        &self.images[self.state.active_image_index]
    }

    /// Rotation wrapped into `[0, 360)` for drawing.
    pub fn rotation_display_degrees(&self) -> f32 {
        self.state.rotation_degrees.rem_euclid(FULL_TURN_DEGREES)
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        if self.state.dragging {
            return;
        }
        self.state.dragging = true;
        self.state.drag_anchor = pointer - self.state.offset;
    }

    pub fn update_drag(&mut self, pointer: Vec2, delta: Vec2) {
        if !self.state.dragging {
            return;
        }
        self.state.offset = pointer - self.state.drag_anchor;
        self.state.rotation_degrees += delta.x * ROTATION_SENSITIVITY;
    }

    pub fn end_drag(&mut self) {
        self.state.dragging = false;
    }

    /// Positive deltas zoom in, negative deltas zoom out.
    pub fn zoom(&mut self, delta: f32) {
        self.state.zoom_factor =
            (self.state.zoom_factor + delta * ZOOM_SENSITIVITY).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset(&mut self) {
        self.state.rotation_degrees = 0.0;
        self.state.zoom_factor = IDENTITY_ZOOM;
        self.state.offset = Vec2::ZERO;
    }

    pub fn next_image(&mut self) {
        self.state.active_image_index =
            step_index(self.state.active_image_index, self.images.len(), true);
    }

    pub fn previous_image(&mut self) {
        self.state.active_image_index =
            step_index(self.state.active_image_index, self.images.len(), false);
    }

    pub fn handle_key(&mut self, key: &ViewerKey) -> KeyOutcome {
        match key {
            ViewerKey::Escape => KeyOutcome::Close,
            ViewerKey::ArrowLeft => {
                self.previous_image();
                KeyOutcome::Handled
            }
            ViewerKey::ArrowRight => {
                self.next_image();
                KeyOutcome::Handled
            }
            ViewerKey::Char('r' | 'R') => {
                self.reset();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}
