use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HeritageError, Result};

/// Opaque reference to an image: a URL or a filesystem path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `http://` and `https://` references.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A named viewing context bound to its own ordered image sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourPoint {
    pub id: String,
    pub label: String,
    pub images: Vec<ImageRef>,
}

impl TourPoint {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        images: Vec<ImageRef>,
    ) -> Result<Self> {
        let point = Self {
            id: id.into(),
            label: label.into(),
            images,
        };
        point.validate()?;
        Ok(point)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.images.is_empty() {
            return Err(HeritageError::EmptyTourPoint(self.id.clone()));
        }
        Ok(())
    }
}
