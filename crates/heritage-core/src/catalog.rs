//! Heritage-site records and client-side filtering over the fetched collection.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::FOUNDED_FALLBACK;
use crate::error::{HeritageError, Result};
use crate::viewer::{ImageRef, TourPoint};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    pub date: String,
    pub description: String,
    pub significance: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelInfo {
    pub best_time_to_visit: String,
    pub nearest_airport: String,
    #[serde(default)]
    pub accommodation: Vec<String>,
    pub local_transport: String,
    pub permits_required: String,
    pub weather_info: String,
}

/// One heritage site (monastery) as served by the catalog backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub altitude: String,
    pub tradition: String,
    pub description: String,
    #[serde(default)]
    pub founded: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub spiritual_significance: String,
    pub main_image: ImageRef,
    #[serde(default)]
    pub gallery_images: Vec<ImageRef>,
    #[serde(default)]
    pub panoramic_images: Vec<ImageRef>,
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub visiting_hours: String,
    #[serde(default)]
    pub entrance_fee: String,
    #[serde(default)]
    pub accessibility: String,
    #[serde(default)]
    pub cultural_importance: String,
    #[serde(default)]
    pub festivals: Vec<Festival>,
    #[serde(default)]
    pub travel_info: TravelInfo,
    /// Explicit tour; when absent the default four-point tour is derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_points: Option<Vec<TourPoint>>,
}

impl SiteRecord {
    /// Gallery sequence, falling back to the main image.
    pub fn gallery(&self) -> Vec<ImageRef> {
        non_empty_or(&self.gallery_images, &self.main_image)
    }

    /// Dedicated immersive sequence, falling back to the gallery.
    pub fn panorama(&self) -> Vec<ImageRef> {
        if self.panoramic_images.is_empty() {
            self.gallery()
        } else {
            self.panoramic_images.clone()
        }
    }

    pub fn tour_points(&self) -> Vec<TourPoint> {
        if let Some(points) = &self.tour_points {
            return points.clone();
        }
        let gallery = self.gallery();
        let panorama = self.panorama();
        vec![
            default_point("exterior", "Exterior View", &gallery),
            default_point("interior", "Interior", &panorama),
            default_point("courtyard", "Courtyard", &gallery),
            default_point("temple", "Main Temple", &panorama),
        ]
    }

    pub fn founded_or_default(&self) -> &str {
        if self.founded.trim().is_empty() {
            FOUNDED_FALLBACK
        } else {
            &self.founded
        }
    }

    fn matches(&self, filter: &SiteFilter) -> bool {
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = [&self.name, &self.description, &self.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(district) = filter.district.as_deref().filter(|s| !s.is_empty()) {
            if self.district != district {
                return false;
            }
        }
        if let Some(tradition) = filter.tradition.as_deref().filter(|s| !s.is_empty()) {
            if self.tradition != tradition {
                return false;
            }
        }
        true
    }

    fn resolve_relative_images(&mut self, base: &Path) {
        let resolve = |image: &mut ImageRef| {
            if !image.is_remote() && Path::new(image.as_str()).is_relative() {
                *image = ImageRef::new(base.join(image.as_str()).to_string_lossy());
            }
        };
        resolve(&mut self.main_image);
        self.gallery_images.iter_mut().for_each(resolve);
        self.panoramic_images.iter_mut().for_each(resolve);
        if let Some(points) = &mut self.tour_points {
            points
                .iter_mut()
                .flat_map(|p| p.images.iter_mut())
                .for_each(resolve);
        }
    }
}

fn non_empty_or(images: &[ImageRef], fallback: &ImageRef) -> Vec<ImageRef> {
    if images.is_empty() {
        vec![fallback.clone()]
    } else {
        images.to_vec()
    }
}

fn default_point(id: &str, label: &str, images: &[ImageRef]) -> TourPoint {
    TourPoint {
        id: id.into(),
        label: label.into(),
        images: images.to_vec(),
    }
}

/// Search, district and tradition criteria. Every present criterion must hold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteFilter {
    /// Case-insensitive substring of name, description or location.
    pub search: Option<String>,
    pub district: Option<String>,
    pub tradition: Option<String>,
}

/// A festival together with the site that celebrates it.
#[derive(Clone, Debug, PartialEq)]
pub struct FestivalListing<'a> {
    pub site_name: &'a str,
    pub festival: &'a Festival,
}

#[derive(Deserialize, Serialize)]
struct CatalogFile {
    sites: Vec<SiteRecord>,
}

/// The fetched site collection.
#[derive(Clone, Debug)]
pub struct Catalog {
    sites: Vec<SiteRecord>,
}

impl Catalog {
    pub fn from_sites(sites: Vec<SiteRecord>) -> Result<Self> {
        if sites.is_empty() {
            return Err(HeritageError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for site in &sites {
            if !seen.insert(site.id.as_str()) {
                return Err(HeritageError::DuplicateSite(site.id.clone()));
            }
        }
        Ok(Self { sites })
    }

    /// Parse a catalog from TOML text (`[[sites]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_sites(file.sites)
    }

    /// Parse a catalog from the backend's JSON listing (an array of sites).
    pub fn from_json_str(content: &str) -> Result<Self> {
        let sites: Vec<SiteRecord> = serde_json::from_str(content)?;
        Self::from_sites(sites)
    }

    /// Load a TOML catalog; relative image paths resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut catalog = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            for site in &mut catalog.sites {
                site.resolve_relative_images(base);
            }
        }
        info!(path = %path.display(), sites = catalog.sites.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            sites: self.sites.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    pub fn get(&self, id: &str) -> Result<&SiteRecord> {
        self.sites
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| HeritageError::UnknownSite(id.to_string()))
    }

    pub fn filter(&self, filter: &SiteFilter) -> Vec<&SiteRecord> {
        self.sites.iter().filter(|s| s.matches(filter)).collect()
    }

    pub fn districts(&self) -> Vec<&str> {
        distinct(self.sites.iter().map(|s| s.district.as_str()))
    }

    pub fn traditions(&self) -> Vec<&str> {
        distinct(self.sites.iter().map(|s| s.tradition.as_str()))
    }

    pub fn festivals(&self) -> Vec<FestivalListing<'_>> {
        self.sites
            .iter()
            .flat_map(|site| {
                site.festivals.iter().map(move |festival| FestivalListing {
                    site_name: &site.name,
                    festival,
                })
            })
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
