use approx::assert_abs_diff_eq;

use heritage_core::error::HeritageError;
use heritage_core::geometry::{Rect, Vec2};
use heritage_core::viewer::{default_hotspots, layout_hotspots, Hotspot, HotspotIcon};

#[test]
fn test_default_hotspots() {
    let hotspots = default_hotspots();
    assert_eq!(hotspots.len(), 2);
    assert_eq!(hotspots[0].label, "Sacred Hall");
    assert_eq!(hotspots[0].icon, HotspotIcon::MapPin);
    assert_eq!(hotspots[1].label, "Prayer Wheel");
    assert_eq!(hotspots[1].icon, HotspotIcon::Star);
}

#[test]
fn test_layout_scales_to_viewport() {
    let viewport = Rect::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(800.0, 600.0));
    let placed = layout_hotspots(&default_hotspots(), viewport);

    assert_abs_diff_eq!(placed[0].center.x, 10.0 + 200.0);
    assert_abs_diff_eq!(placed[0].center.y, 20.0 + 300.0);
    assert_abs_diff_eq!(placed[1].center.x, 10.0 + 800.0 * 2.0 / 3.0, epsilon = 1e-3);
    assert_abs_diff_eq!(placed[1].center.y, 20.0 + 200.0, epsilon = 1e-3);
}

#[test]
fn test_layout_ignores_image_transform() {
    // Same viewport, same result: placement depends on nothing else.
    let viewport = Rect::from_min_size(Vec2::ZERO, Vec2::new(400.0, 400.0));
    let a = layout_hotspots(&default_hotspots(), viewport);
    let b = layout_hotspots(&default_hotspots(), viewport);
    assert_eq!(a, b);
}

#[test]
fn test_corners_are_valid() {
    assert!(Hotspot::new(HotspotIcon::Star, "origin", 0.0, 0.0).is_ok());
    assert!(Hotspot::new(HotspotIcon::Star, "far", 1.0, 1.0).is_ok());
}

#[test]
fn test_out_of_range_rejected() {
    let err = Hotspot::new(HotspotIcon::MapPin, "off", 1.2, 0.5).unwrap_err();
    assert!(matches!(err, HeritageError::HotspotOutOfRange { .. }));
    assert!(Hotspot::new(HotspotIcon::MapPin, "off", 0.5, -0.1).is_err());
    assert!(Hotspot::new(HotspotIcon::MapPin, "nan", f32::NAN, 0.5).is_err());
}
