//! Cursor tracking tests
//!
//! Tests for:
//! - The yaw/pitch clamp envelope, for pointers inside and far outside
//!   the widget rect
//! - Damped convergence toward the target angles
//! - The end-to-end top-right-corner scenario through the headless mascot

use mascot3d::mascot::cursor::{PITCH_LIMIT, YAW_LIMIT};
use mascot3d::{AssetStore, CursorTracker, Mascot, Scene, Theme, WidgetRect};

const RECT: WidgetRect = WidgetRect {
    left: 40.0,
    top: 80.0,
    width: 120.0,
    height: 120.0,
};

fn converge(tracker: &mut CursorTracker, px: f32, py: f32) {
    // Smoothing is 0.1 per event; a few hundred events settle well below
    // test tolerance.
    for _ in 0..300 {
        tracker.pointer_moved(px, py);
    }
}

#[test]
fn in_rect_pointers_stay_inside_the_envelope() {
    let mut tracker = CursorTracker::new(RECT);
    for ix in 0..=12 {
        for iy in 0..=12 {
            let px = RECT.left + RECT.width * (ix as f32 / 12.0);
            let py = RECT.top + RECT.height * (iy as f32 / 12.0);
            converge(&mut tracker, px, py);
            assert!(tracker.yaw().abs() <= YAW_LIMIT + 1e-6);
            assert!(tracker.pitch().abs() <= PITCH_LIMIT + 1e-6);
        }
    }
}

#[test]
fn far_outside_pointers_are_clamped() {
    let mut tracker = CursorTracker::new(RECT);
    // Normalized magnitude far beyond 1: clamp must still hold.
    converge(&mut tracker, RECT.left + RECT.width * 50.0, RECT.top - RECT.height * 30.0);
    assert!((tracker.yaw() - YAW_LIMIT).abs() < 1e-5);
    assert!((tracker.pitch() - PITCH_LIMIT).abs() < 1e-5);

    converge(&mut tracker, RECT.left - RECT.width * 50.0, RECT.top + RECT.height * 30.0);
    assert!((tracker.yaw() + YAW_LIMIT).abs() < 1e-5);
    assert!((tracker.pitch() + PITCH_LIMIT).abs() < 1e-5);
}

#[test]
fn convergence_is_monotonic_toward_the_target() {
    let mut tracker = CursorTracker::new(RECT);
    let px = RECT.left + RECT.width; // nx = 1, target yaw = 0.5
    let py = RECT.top + RECT.height / 2.0;

    let mut last = tracker.yaw();
    for _ in 0..50 {
        tracker.pointer_moved(px, py);
        assert!(tracker.yaw() >= last);
        last = tracker.yaw();
    }
    assert!(last < 0.5); // still lagging, never overshooting
}

#[test]
fn top_right_corner_settles_at_half_yaw_and_pitch() {
    // End-to-end: px = left + width, py = top gives nx = 1, ny = 1,
    // targets yaw 0.5 and pitch 0.3, both inside the clamp.
    let mut scene = Scene::new();
    let mut assets = AssetStore::new();
    let mut mascot = Mascot::build(&mut scene, &mut assets, RECT, Theme::Dark);

    for _ in 0..300 {
        mascot.pointer_moved(RECT.left + RECT.width, RECT.top);
    }
    mascot.step(&mut scene, &mut assets, false, 0.25);

    let (yaw, pitch) = mascot.head_angles();
    assert!((yaw - 0.5).abs() < 1e-3);
    assert!((pitch - 0.3).abs() < 1e-3);

    // The head group carries the damped angles after the step.
    let head = scene.get_node(mascot.rig().head_group).unwrap();
    let euler = head.transform.rotation_euler();
    assert!((euler.y - 0.5).abs() < 1e-3);
    assert!((euler.x - 0.3).abs() < 1e-3);
}

#[test]
fn rect_update_changes_normalization() {
    let mut tracker = CursorTracker::new(RECT);
    let moved = WidgetRect::new(0.0, 0.0, 240.0, 240.0);
    tracker.set_rect(moved);

    // Center of the new rect: targets decay toward zero.
    converge(&mut tracker, 120.0, 120.0);
    assert!(tracker.yaw().abs() < 1e-3);
    assert!(tracker.pitch().abs() < 1e-3);
}
