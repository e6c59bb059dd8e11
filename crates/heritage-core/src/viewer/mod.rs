//! Guided-tour image viewer: a paged gallery over named tour points with an
//! immersive panoramic mode driven by pointer, wheel and keyboard input.

pub mod events;
pub mod hotspot;
pub mod keyboard;
pub mod navigator;
pub mod tour_point;
pub mod transform;

pub use events::{Flow, TourEvent, ViewerKey};
pub use hotspot::{default_hotspots, layout_hotspots, Hotspot, HotspotIcon, NormalizedPos, PlacedHotspot};
pub use keyboard::{KeyboardHub, KeyboardLease};
pub use navigator::{NavigatorState, TourEnded, TourNavigator, ViewMode};
pub use tour_point::{ImageRef, TourPoint};
pub use transform::{KeyOutcome, TransformController, TransformState};

/// Move `index` one step within `0..len`, stopping at either bound.
pub(crate) fn step_index(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        if index + 1 < len {
            index + 1
        } else {
            index
        }
    } else {
        index.saturating_sub(1)
    }
}
