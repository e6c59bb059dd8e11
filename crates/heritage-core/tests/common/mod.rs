#![allow(dead_code)]

use heritage_core::viewer::{ImageRef, KeyboardHub, TourNavigator, TourPoint};

/// Build image references from short names.
pub fn images(names: &[&str]) -> Vec<ImageRef> {
    names.iter().map(|n| ImageRef::new(*n)).collect()
}

/// Tour points `{A: [img1,img2], B: [img3], C: [img1,img2,img3]}`.
pub fn abc_points() -> Vec<TourPoint> {
    vec![
        TourPoint::new("A", "Point A", images(&["img1", "img2"])).expect("valid point"),
        TourPoint::new("B", "Point B", images(&["img3"])).expect("valid point"),
        TourPoint::new("C", "Point C", images(&["img1", "img2", "img3"])).expect("valid point"),
    ]
}

/// Navigator over the A/B/C points with a two-image panorama.
pub fn abc_navigator(hub: &KeyboardHub) -> TourNavigator {
    TourNavigator::new("test-site", abc_points(), images(&["pano1", "pano2"]), hub)
        .expect("valid navigator")
}

/// Two-site catalog in the on-disk TOML layout.
pub const SAMPLE_CATALOG: &str = r#"
[[sites]]
id = "rumtek"
name = "Rumtek Monastery"
location = "Rumtek, East Sikkim"
district = "East Sikkim"
tradition = "Kagyu School of Tibetan Buddhism"
description = "Seat-in-exile of the Karmapa Lama."
founded = "1966"
main_image = "images/rumtek.jpg"
gallery_images = ["images/rumtek.jpg", "https://example.org/rumtek-2.jpg"]
panoramic_images = ["images/rumtek-pano.jpg"]
highlights = ["Golden Stupa"]

[[sites.festivals]]
name = "Kagyu Monlam"
date = "February/March"
description = "Annual prayer festival"
significance = "Gathering for Kagyu practitioners"

[[sites]]
id = "khecheopalri"
name = "Khecheopalri Monastery"
location = "Khecheopalri, West Sikkim"
district = "West Sikkim"
tradition = "Nyingma School of Tibetan Buddhism"
description = "Near the sacred Wishing Lake."
main_image = "https://example.org/lake.jpg"

[[sites.festivals]]
name = "Maghe Sankranti"
date = "January"
description = "Sacred bathing at the lake"
significance = "Purification"

[[sites.tour_points]]
id = "lake"
label = "Wishing Lake"
images = ["https://example.org/lake.jpg", "https://example.org/lake-2.jpg"]
"#;
