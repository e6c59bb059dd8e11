use std::fmt;

use crate::error::{HeritageError, Result};
use crate::geometry::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotspotIcon {
    MapPin,
    Star,
}

impl fmt::Display for HotspotIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapPin => write!(f, "\u{1F4CD}"),
            Self::Star => write!(f, "\u{2B50}"),
        }
    }
}

/// A position in `[0,1]×[0,1]`, relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPos {
    x: f32,
    y: f32,
}

impl NormalizedPos {
    pub fn new(x: f32, y: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Err(HeritageError::HotspotOutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

/// A static labeled marker drawn over the tour image.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    pub icon: HotspotIcon,
    pub label: String,
    pub position: NormalizedPos,
}

impl Hotspot {
    pub fn new(icon: HotspotIcon, label: impl Into<String>, x: f32, y: f32) -> Result<Self> {
        Ok(Self {
            icon,
            label: label.into(),
            position: NormalizedPos::new(x, y)?,
        })
    }
}

/// A hotspot resolved to screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedHotspot {
    pub icon: HotspotIcon,
    pub label: String,
    /// Center of the marker.
    pub center: Vec2,
}

/// Markers shown on every tour view.
pub fn default_hotspots() -> Vec<Hotspot> {
    vec![
        Hotspot {
            icon: HotspotIcon::MapPin,
            label: "Sacred Hall".into(),
            position: NormalizedPos { x: 0.25, y: 0.5 },
        },
        Hotspot {
            icon: HotspotIcon::Star,
            label: "Prayer Wheel".into(),
            position: NormalizedPos {
                x: 2.0 / 3.0,
                y: 1.0 / 3.0,
            },
        },
    ]
}

/// Scale hotspots into `viewport`.
///
/// Markers stay fixed to the viewport: they do not follow the image's
/// rotation, zoom or offset.
pub fn layout_hotspots(hotspots: &[Hotspot], viewport: Rect) -> Vec<PlacedHotspot> {
    hotspots
        .iter()
        .map(|h| PlacedHotspot {
            icon: h.icon,
            label: h.label.clone(),
            center: Vec2::new(
                viewport.min.x + h.position.x * viewport.width(),
                viewport.min.y + h.position.y * viewport.height(),
            ),
        })
        .collect()
}
