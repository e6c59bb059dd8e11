use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::{HeritageError, Result};

use super::events::{Flow, TourEvent};
use super::keyboard::KeyboardHub;
use super::step_index;
use super::tour_point::{ImageRef, TourPoint};
use super::transform::{KeyOutcome, TransformController};

/// Gallery position and mode flag, mutated only by [`TourNavigator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorState {
    /// Index into the navigator's tour points.
    pub active_tour_point: usize,
    /// Always valid for the active tour point's image sequence.
    pub active_image_index: usize,
    pub immersive_mode_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Gallery,
    Immersive,
}

/// Signal handed back to the catalog when a tour session ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourEnded {
    pub site_id: String,
}

/// Owns the tour points of one site and the hand-off into immersive mode.
#[derive(Debug)]
pub struct TourNavigator {
    site_id: String,
    points: Vec<TourPoint>,
    panoramic: Arc<[ImageRef]>,
    state: NavigatorState,
    immersive: Option<TransformController>,
    keyboard: KeyboardHub,
}

impl TourNavigator {
    pub fn new(
        site_id: impl Into<String>,
        points: Vec<TourPoint>,
        panoramic: Vec<ImageRef>,
        keyboard: &KeyboardHub,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(HeritageError::NoTourPoints);
        }
        if panoramic.is_empty() {
            return Err(HeritageError::EmptyPanorama);
        }
        let mut seen = HashSet::new();
        for point in &points {
            point.validate()?;
            if !seen.insert(point.id.as_str()) {
                return Err(HeritageError::DuplicateTourPoint(point.id.clone()));
            }
        }

        let site_id = site_id.into();
        debug!(site = %site_id, points = points.len(), "tour started");
        Ok(Self {
            site_id,
            points,
            panoramic: panoramic.into(),
            state: NavigatorState {
                active_tour_point: 0,
                active_image_index: 0,
                immersive_mode_active: false,
            },
            immersive: None,
            keyboard: keyboard.clone(),
        })
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn tour_points(&self) -> &[TourPoint] {
        &self.points
    }

    pub fn panoramic_images(&self) -> &[ImageRef] {
        &self.panoramic
    }

    pub fn active_tour_point(&self) -> &TourPoint {
        &self.points[self.state.active_tour_point]
    }

    /// The gallery image for the active tour point.
    pub fn current_image(&self) -> &ImageRef {
        &self.active_tour_point().images[self.state.active_image_index]
    }

    pub fn mode(&self) -> ViewMode {
        if self.immersive.is_some() {
            ViewMode::Immersive
        } else {
            ViewMode::Gallery
        }
    }

    pub fn immersive(&self) -> Option<&TransformController> {
        self.immersive.as_ref()
    }

    pub fn immersive_mut(&mut self) -> Option<&mut TransformController> {
        self.immersive.as_mut()
    }

    /// Activate `id` and rewind to its first image. Unknown ids change nothing.
    pub fn select_tour_point(&mut self, id: &str) -> bool {
        let Some(index) = self.points.iter().position(|p| p.id == id) else {
            debug!(id, "ignoring unknown tour point");
            return false;
        };
        self.state = NavigatorState {
            active_tour_point: index,
            active_image_index: 0,
            ..self.state.clone()
        };
        debug!(id, "tour point selected");
        true
    }

    pub fn next_image(&mut self) {
        let len = self.active_tour_point().images.len();
        self.state.active_image_index = step_index(self.state.active_image_index, len, true);
    }

    pub fn previous_image(&mut self) {
        let len = self.active_tour_point().images.len();
        self.state.active_image_index = step_index(self.state.active_image_index, len, false);
    }

    /// Start a fresh immersive session over the panoramic sequence.
    pub fn enter_immersive_mode(&mut self) {
        if self.immersive.is_some() {
            return;
        }
        // The panoramic sequence was validated non-empty in `new`.
        if let Ok(controller) = TransformController::new(Arc::clone(&self.panoramic)) {
            self.immersive = Some(controller.with_keyboard(self.keyboard.acquire()));
            self.state.immersive_mode_active = true;
            debug!(site = %self.site_id, "entered immersive mode");
        }
    }

    /// Drop the immersive session; the gallery position is untouched.
    pub fn exit_immersive_mode(&mut self) {
        if self.immersive.take().is_some() {
            debug!(site = %self.site_id, "left immersive mode");
        }
        self.state.immersive_mode_active = false;
    }

    /// End the tour from either mode, releasing everything it holds.
    pub fn close(mut self) -> TourEnded {
        self.exit_immersive_mode();
        debug!(site = %self.site_id, "tour closed");
        TourEnded {
            site_id: self.site_id,
        }
    }

    /// Route one input event to whichever mode is active.
    ///
    /// Gallery-only events are ignored while immersive and vice versa. An
    /// escape key inside the immersive view returns to the gallery.
    pub fn apply(&mut self, event: &TourEvent) -> Flow {
        if matches!(event, TourEvent::Close) {
            return Flow::Close;
        }

        match self.immersive.as_mut() {
            None => match event {
                TourEvent::SelectTourPoint(id) => {
                    self.select_tour_point(id);
                }
                TourEvent::NextImage => self.next_image(),
                TourEvent::PreviousImage => self.previous_image(),
                TourEvent::EnterImmersive => self.enter_immersive_mode(),
                _ => debug!(%event, "ignored in gallery mode"),
            },
            Some(controller) => match event {
                TourEvent::NextImage => controller.next_image(),
                TourEvent::PreviousImage => controller.previous_image(),
                TourEvent::DragStart(pointer) => controller.begin_drag(*pointer),
                TourEvent::Drag { pointer, delta } => controller.update_drag(*pointer, *delta),
                TourEvent::DragEnd => controller.end_drag(),
                TourEvent::Zoom(delta) => controller.zoom(*delta),
                TourEvent::Reset => controller.reset(),
                TourEvent::Key(key) => {
                    if controller.handle_key(key) == KeyOutcome::Close {
                        self.exit_immersive_mode();
                    }
                }
                TourEvent::ExitImmersive => self.exit_immersive_mode(),
                _ => debug!(%event, "ignored in immersive mode"),
            },
        }
        Flow::Continue
    }
}
