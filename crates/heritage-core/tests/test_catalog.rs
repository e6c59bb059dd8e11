mod common;

use std::io::Write;

use heritage_core::catalog::{Catalog, SiteFilter};
use heritage_core::error::HeritageError;
use heritage_core::viewer::{KeyboardHub, TourNavigator};

use common::SAMPLE_CATALOG;

fn catalog() -> Catalog {
    Catalog::from_toml_str(SAMPLE_CATALOG).expect("sample catalog parses")
}

fn ids(sites: &[&heritage_core::catalog::SiteRecord]) -> Vec<String> {
    sites.iter().map(|s| s.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_sample() {
    let c = catalog();
    assert_eq!(c.sites().len(), 2);
    let rumtek = c.get("rumtek").unwrap();
    assert_eq!(rumtek.name, "Rumtek Monastery");
    assert_eq!(rumtek.festivals.len(), 1);
    assert!(rumtek.coordinates.is_none());
}

#[test]
fn test_unknown_site() {
    let err = catalog().get("nowhere").unwrap_err();
    assert!(matches!(err, HeritageError::UnknownSite(id) if id == "nowhere"));
}

#[test]
fn test_empty_catalog_rejected() {
    let err = Catalog::from_toml_str("sites = []").unwrap_err();
    assert!(matches!(err, HeritageError::EmptyCatalog));
}

#[test]
fn test_duplicate_site_rejected() {
    let mut sites = catalog().sites().to_vec();
    sites.push(sites[0].clone());
    let err = Catalog::from_sites(sites).unwrap_err();
    assert!(matches!(err, HeritageError::DuplicateSite(id) if id == "rumtek"));
}

#[test]
fn test_json_listing() {
    let json = r#"[{
        "id": "enchey",
        "name": "Enchey Monastery",
        "location": "Gangtok, East Sikkim",
        "district": "East Sikkim",
        "tradition": "Nyingma School of Tibetan Buddhism",
        "description": "Hilltop monastery overlooking Gangtok.",
        "main_image": "https://example.org/enchey.jpg",
        "coordinates": {"lat": 27.3389, "lng": 88.6065}
    }]"#;
    let c = Catalog::from_json_str(json).unwrap();
    let enchey = c.get("enchey").unwrap();
    assert_eq!(enchey.coordinates.as_ref().unwrap().lat, 27.3389);
    assert_eq!(enchey.founded_or_default(), "Ancient times");
}

#[test]
fn test_load_resolves_relative_images() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    let mut f = std::fs::File::create(&path).expect("create catalog");
    f.write_all(SAMPLE_CATALOG.as_bytes()).expect("write catalog");

    let c = Catalog::load(&path).unwrap();
    let rumtek = c.get("rumtek").unwrap();
    let expected = dir.path().join("images/rumtek.jpg");
    assert_eq!(rumtek.main_image.as_str(), expected.to_string_lossy());
    assert_eq!(
        rumtek.gallery_images[1].as_str(),
        "https://example.org/rumtek-2.jpg"
    );
}

#[test]
fn test_load_missing_file() {
    let err = Catalog::load(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, HeritageError::Io(_)));
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn test_empty_filter_keeps_all_in_order() {
    let c = catalog();
    assert_eq!(ids(&c.filter(&SiteFilter::default())), ["rumtek", "khecheopalri"]);
}

#[test]
fn test_search_is_case_insensitive_over_fields() {
    let c = catalog();
    let by_name = SiteFilter {
        search: Some("RUMTEK".into()),
        ..Default::default()
    };
    assert_eq!(ids(&c.filter(&by_name)), ["rumtek"]);

    let by_description = SiteFilter {
        search: Some("wishing lake".into()),
        ..Default::default()
    };
    assert_eq!(ids(&c.filter(&by_description)), ["khecheopalri"]);

    let by_location = SiteFilter {
        search: Some("sikkim".into()),
        ..Default::default()
    };
    assert_eq!(c.filter(&by_location).len(), 2);
}

#[test]
fn test_criteria_combine() {
    let c = catalog();
    let filter = SiteFilter {
        search: Some("monastery".into()),
        district: Some("West Sikkim".into()),
        tradition: Some("Nyingma School of Tibetan Buddhism".into()),
    };
    assert_eq!(ids(&c.filter(&filter)), ["khecheopalri"]);

    let none = SiteFilter {
        district: Some("West Sikkim".into()),
        tradition: Some("Kagyu School of Tibetan Buddhism".into()),
        ..Default::default()
    };
    assert!(c.filter(&none).is_empty());
}

#[test]
fn test_blank_criteria_are_ignored() {
    let c = catalog();
    let filter = SiteFilter {
        search: Some("   ".into()),
        district: Some(String::new()),
        tradition: None,
    };
    assert_eq!(c.filter(&filter).len(), 2);
}

#[test]
fn test_distinct_values_sorted() {
    let c = catalog();
    assert_eq!(c.districts(), ["East Sikkim", "West Sikkim"]);
    assert_eq!(
        c.traditions(),
        [
            "Kagyu School of Tibetan Buddhism",
            "Nyingma School of Tibetan Buddhism"
        ]
    );
}

#[test]
fn test_festivals_carry_site_name() {
    let c = catalog();
    let festivals = c.festivals();
    assert_eq!(festivals.len(), 2);
    assert_eq!(festivals[0].site_name, "Rumtek Monastery");
    assert_eq!(festivals[0].festival.name, "Kagyu Monlam");
    assert_eq!(festivals[1].site_name, "Khecheopalri Monastery");
}

// ---------------------------------------------------------------------------
// Tours derived from records
// ---------------------------------------------------------------------------

#[test]
fn test_default_tour_points() {
    let c = catalog();
    let rumtek = c.get("rumtek").unwrap();
    let points = rumtek.tour_points();
    let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Exterior View", "Interior", "Courtyard", "Main Temple"]);
    assert_eq!(points[0].images, rumtek.gallery_images);
    assert_eq!(points[1].images, rumtek.panoramic_images);
}

#[test]
fn test_explicit_tour_points_and_fallbacks() {
    let c = catalog();
    let lake = c.get("khecheopalri").unwrap();
    let points = lake.tour_points();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].id, "lake");
    // No gallery or panorama declared: both fall back to the main image.
    assert_eq!(lake.gallery(), vec![lake.main_image.clone()]);
    assert_eq!(lake.panorama(), vec![lake.main_image.clone()]);
}

#[test]
fn test_every_site_builds_a_navigator() {
    let hub = KeyboardHub::new();
    for site in catalog().sites() {
        let nav = TourNavigator::new(&site.id, site.tour_points(), site.panorama(), &hub);
        assert!(nav.is_ok(), "site {} failed", site.id);
    }
}

#[test]
fn test_shipped_catalog_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../catalog.toml");
    let c = Catalog::load(&path).expect("shipped catalog");
    assert_eq!(c.sites().len(), 6);
    assert!(c.get("rumtek").is_ok());
}
