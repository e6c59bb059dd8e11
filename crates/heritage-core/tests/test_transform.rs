use std::sync::Arc;

use approx::assert_abs_diff_eq;

use heritage_core::consts::{MAX_ZOOM, MIN_ZOOM, ROTATION_SENSITIVITY};
use heritage_core::geometry::Vec2;
use heritage_core::viewer::{ImageRef, KeyOutcome, TransformController, ViewerKey};

fn controller(count: usize) -> TransformController {
    let images: Vec<ImageRef> = (0..count).map(|i| ImageRef::new(format!("pano{i}"))).collect();
    TransformController::new(Arc::from(images)).expect("non-empty panorama")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn test_new_starts_at_identity() {
    let c = controller(2);
    assert!(c.state().is_identity());
    assert!(!c.state().dragging);
    assert_eq!(c.state().active_image_index, 0);
    assert_eq!(c.current_image().as_str(), "pano0");
}

#[test]
fn test_new_rejects_empty_sequence() {
    let empty: Arc<[ImageRef]> = Arc::from(Vec::new());
    assert!(TransformController::new(empty).is_err());
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_caps_after_fourth_step() {
    let mut c = controller(1);
    let expected: [f32; 5] = [1.5, 2.0, 2.5, 3.0, 3.0];
    for want in expected {
        c.zoom(0.2);
        assert_abs_diff_eq!(c.state().zoom_factor, want, epsilon = 1e-5);
    }
    assert_eq!(c.state().zoom_factor, MAX_ZOOM);
}

#[test]
fn test_zoom_stays_within_bounds() {
    let mut c = controller(1);
    let deltas: [f32; 10] = [10.0, -0.3, 0.7, -50.0, 0.01, -0.01, 3.3, -1.2, 1e6, -1e6];
    for delta in deltas {
        c.zoom(delta);
        let z = c.state().zoom_factor;
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&z), "zoom {z} after delta {delta}");
    }
}

#[test]
fn test_negative_zoom_clamps_at_minimum() {
    let mut c = controller(1);
    for _ in 0..10 {
        c.zoom(-0.2);
    }
    assert_eq!(c.state().zoom_factor, MIN_ZOOM);
}

// ---------------------------------------------------------------------------
// Drag
// ---------------------------------------------------------------------------

#[test]
fn test_drag_moves_offset_and_rotates() {
    let mut c = controller(1);
    c.begin_drag(Vec2::new(100.0, 100.0));
    c.update_drag(Vec2::new(130.0, 90.0), Vec2::new(30.0, -10.0));
    assert_eq!(c.state().offset, Vec2::new(30.0, -10.0));
    assert_abs_diff_eq!(c.state().rotation_degrees, 30.0 * ROTATION_SENSITIVITY);
}

#[test]
fn test_update_without_begin_is_noop() {
    let mut c = controller(1);
    c.update_drag(Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0));
    assert!(c.state().is_identity());
    assert!(!c.state().dragging);
}

#[test]
fn test_fresh_drag_does_not_jump() {
    let mut c = controller(1);
    c.begin_drag(Vec2::new(0.0, 0.0));
    c.update_drag(Vec2::new(40.0, 25.0), Vec2::new(40.0, 25.0));
    c.end_drag();
    let released_at = c.state().offset;

    // New gesture starting at the release point: no movement yet, no jump.
    c.begin_drag(Vec2::new(40.0, 25.0));
    c.update_drag(Vec2::new(40.0, 25.0), Vec2::ZERO);
    assert_eq!(c.state().offset, released_at);

    // And it continues from there rather than from the old anchor.
    c.update_drag(Vec2::new(50.0, 25.0), Vec2::new(10.0, 0.0));
    assert_eq!(c.state().offset, Vec2::new(50.0, 25.0));
}

#[test]
fn test_fresh_drag_elsewhere_keeps_offset() {
    let mut c = controller(1);
    c.begin_drag(Vec2::new(0.0, 0.0));
    c.update_drag(Vec2::new(20.0, 0.0), Vec2::new(20.0, 0.0));
    c.end_drag();

    c.begin_drag(Vec2::new(300.0, 300.0));
    c.update_drag(Vec2::new(300.0, 300.0), Vec2::ZERO);
    assert_eq!(c.state().offset, Vec2::new(20.0, 0.0));
}

#[test]
fn test_begin_while_dragging_keeps_anchor() {
    let mut c = controller(1);
    c.begin_drag(Vec2::new(10.0, 10.0));
    let anchor = c.state().drag_anchor;
    c.begin_drag(Vec2::new(99.0, 99.0));
    assert_eq!(c.state().drag_anchor, anchor);
}

#[test]
fn test_end_drag_is_idempotent() {
    let mut c = controller(1);
    c.end_drag();
    c.begin_drag(Vec2::ZERO);
    c.end_drag();
    c.end_drag();
    assert!(!c.state().dragging);
}

#[test]
fn test_rotation_is_not_wrapped() {
    let mut c = controller(1);
    c.begin_drag(Vec2::ZERO);
    for i in 1..=10 {
        c.update_drag(Vec2::new(i as f32 * 100.0, 0.0), Vec2::new(100.0, 0.0));
    }
    let expected = 1000.0 * ROTATION_SENSITIVITY;
    assert_abs_diff_eq!(c.state().rotation_degrees, expected, epsilon = 1e-3);
    assert_abs_diff_eq!(c.rotation_display_degrees(), expected % 360.0, epsilon = 1e-3);
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn test_reset_restores_identity() {
    let mut c = controller(3);
    c.next_image();
    c.zoom(0.4);
    c.begin_drag(Vec2::ZERO);
    c.update_drag(Vec2::new(-35.0, 12.0), Vec2::new(-35.0, 12.0));

    c.reset();

    let s = c.state();
    assert_eq!(s.rotation_degrees, 0.0);
    assert_eq!(s.zoom_factor, 1.0);
    assert_eq!(s.offset, Vec2::ZERO);
    assert!(s.dragging, "reset leaves the drag flag alone");
    assert_eq!(s.active_image_index, 1, "reset leaves the image index alone");
}

// ---------------------------------------------------------------------------
// Image sequence
// ---------------------------------------------------------------------------

#[test]
fn test_next_previous_clamp() {
    let mut c = controller(3);
    c.previous_image();
    assert_eq!(c.state().active_image_index, 0);
    for _ in 0..5 {
        c.next_image();
    }
    assert_eq!(c.state().active_image_index, 2);
    c.previous_image();
    assert_eq!(c.state().active_image_index, 1);
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

#[test]
fn test_key_dispatch() {
    let mut c = controller(2);
    assert_eq!(c.handle_key(&ViewerKey::ArrowRight), KeyOutcome::Handled);
    assert_eq!(c.state().active_image_index, 1);
    assert_eq!(c.handle_key(&ViewerKey::ArrowLeft), KeyOutcome::Handled);
    assert_eq!(c.state().active_image_index, 0);

    c.zoom(0.2);
    assert_eq!(c.handle_key(&ViewerKey::Char('R')), KeyOutcome::Handled);
    assert!(c.state().is_identity());
    c.zoom(0.2);
    assert_eq!(c.handle_key(&ViewerKey::Char('r')), KeyOutcome::Handled);
    assert!(c.state().is_identity());

    assert_eq!(c.handle_key(&ViewerKey::Escape), KeyOutcome::Close);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut c = controller(2);
    c.zoom(0.2);
    let before = c.state().clone();
    assert_eq!(c.handle_key(&ViewerKey::Char('x')), KeyOutcome::Ignored);
    assert_eq!(c.handle_key(&ViewerKey::Other("PageUp".into())), KeyOutcome::Ignored);
    assert_eq!(c.state(), &before);
}
