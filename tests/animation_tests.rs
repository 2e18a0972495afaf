//! Animation profile tests
//!
//! Tests for:
//! - Idle/dancing torso amplitude bounds over simulated time
//! - The dancing profile's higher oscillation rate
//! - Profile switch taking effect on the very next step
//! - Arm phase offset, antenna accumulation and eye glow through the scene

use mascot3d::{AssetStore, Mascot, ProfileMode, RigPose, Scene, Theme, WidgetRect};
use std::f32::consts::PI;

const RECT: WidgetRect = WidgetRect {
    left: 0.0,
    top: 0.0,
    width: 120.0,
    height: 120.0,
};

fn build() -> (Scene, AssetStore, Mascot) {
    let mut scene = Scene::new();
    let mut assets = AssetStore::new();
    let mascot = Mascot::build(&mut scene, &mut assets, RECT, Theme::Dark);
    (scene, assets, mascot)
}

fn torso_y(scene: &Scene, mascot: &Mascot) -> f32 {
    scene
        .get_node(mascot.rig().torso)
        .unwrap()
        .transform
        .position
        .y
}

/// Counts local extrema in a sampled signal.
fn count_extrema(samples: &[f32]) -> usize {
    samples
        .windows(3)
        .filter(|w| (w[1] - w[0]) * (w[2] - w[1]) < 0.0)
        .count()
}

// ============================================================================
// Amplitude bounds over one simulated second
// ============================================================================

#[test]
fn idle_torso_stays_within_center_plus_minus_bob() {
    let (mut scene, mut assets, mut mascot) = build();
    for i in 0..=240 {
        let t = i as f32 / 240.0;
        mascot.step(&mut scene, &mut assets, false, t);
        let y = torso_y(&scene, &mascot);
        assert!(y >= -0.6 - 1e-5 && y <= -0.4 + 1e-5, "idle torso y {y} at t {t}");
    }
}

#[test]
fn dancing_torso_widens_amplitude() {
    let (mut scene, mut assets, mut mascot) = build();
    let mut max_y = f32::MIN;
    for i in 0..=240 {
        let t = i as f32 / 240.0;
        mascot.step(&mut scene, &mut assets, true, t);
        let y = torso_y(&scene, &mascot);
        assert!(y >= -0.5 - 1e-5 && y <= -0.3 + 1e-5, "dancing torso y {y} at t {t}");
        max_y = max_y.max(y);
    }
    // The bounce actually uses the widened envelope, not just stays inside it.
    assert!(max_y > -0.35);
}

#[test]
fn dancing_oscillates_measurably_faster_than_idle() {
    let (mut scene, mut assets, mut mascot) = build();

    let mut idle_samples = Vec::new();
    for i in 0..=240 {
        let t = i as f32 / 240.0;
        mascot.step(&mut scene, &mut assets, false, t);
        idle_samples.push(torso_y(&scene, &mascot));
    }

    let mut dancing_samples = Vec::new();
    for i in 0..=240 {
        let t = i as f32 / 240.0;
        mascot.step(&mut scene, &mut assets, true, t);
        dancing_samples.push(torso_y(&scene, &mascot));
    }

    let idle_extrema = count_extrema(&idle_samples);
    let dancing_extrema = count_extrema(&dancing_samples);

    // Idle completes less than a third of a cycle in one second; the dance
    // bounce turns around several times.
    assert!(idle_extrema <= 1, "idle extrema: {idle_extrema}");
    assert!(dancing_extrema >= 4, "dancing extrema: {dancing_extrema}");
}

// ============================================================================
// Mode switching
// ============================================================================

#[test]
fn flag_flip_changes_the_profile_on_the_next_step() {
    let (mut scene, mut assets, mut mascot) = build();

    // Idle never rolls the torso.
    mascot.step(&mut scene, &mut assets, false, 0.1);
    let idle_roll = scene
        .get_node(mascot.rig().torso)
        .unwrap()
        .transform
        .rotation_euler()
        .z;
    assert!(idle_roll.abs() < 1e-6);

    // The very next step with the flag set uses dancing kinematics.
    mascot.step(&mut scene, &mut assets, true, 0.1);
    let dancing_roll = scene
        .get_node(mascot.rig().torso)
        .unwrap()
        .transform
        .rotation_euler()
        .z;
    let expected = RigPose::sample(ProfileMode::Dancing, 0.1).torso_roll;
    assert!((dancing_roll - expected).abs() < 1e-5);
    assert!(dancing_roll.abs() > 1e-3);
}

// ============================================================================
// Rig details
// ============================================================================

#[test]
fn dancing_arms_move_out_of_phase() {
    let (mut scene, mut assets, mut mascot) = build();
    // Swing peak: 8t = PI/2.
    mascot.step(&mut scene, &mut assets, true, PI / 16.0);

    let left = scene
        .get_node(mascot.rig().left_arm)
        .unwrap()
        .transform
        .position
        .y;
    let right = scene
        .get_node(mascot.rig().right_arm)
        .unwrap()
        .transform
        .position
        .y;
    assert!(left > 0.0 - 0.01, "left arm up at the beat peak, got {left}");
    assert!(right < -0.59, "right arm down at the beat peak, got {right}");
}

#[test]
fn antenna_spin_accumulates_per_frame() {
    let (mut scene, mut assets, mut mascot) = build();
    for i in 0..10 {
        mascot.step(&mut scene, &mut assets, false, i as f32 / 60.0);
    }
    let idle_angle = scene
        .get_node(mascot.rig().antenna_tip)
        .unwrap()
        .transform
        .rotation_euler()
        .y;
    assert!((idle_angle - 10.0 * 0.02).abs() < 1e-4);

    // Dancing steps are 7.5x larger. Kept short so the total stays below
    // pi/2, where the Euler readback is unambiguous.
    for i in 10..15 {
        mascot.step(&mut scene, &mut assets, true, i as f32 / 60.0);
    }
    let mixed_angle = scene
        .get_node(mascot.rig().antenna_tip)
        .unwrap()
        .transform
        .rotation_euler()
        .y;
    assert!((mixed_angle - (10.0 * 0.02 + 5.0 * 0.15)).abs() < 1e-4);
}

#[test]
fn eye_glow_follows_the_profile() {
    let (mut scene, mut assets, mut mascot) = build();

    for i in 0..=120 {
        let t = i as f32 / 120.0;
        mascot.step(&mut scene, &mut assets, false, t);
        let glow = assets
            .get_material(mascot.rig().materials.eye)
            .unwrap()
            .emissive_intensity;
        assert!(glow >= 0.3 - 1e-5 && glow <= 0.7 + 1e-5);
    }

    let mut saw_bright = false;
    for i in 0..=120 {
        let t = i as f32 / 120.0;
        mascot.step(&mut scene, &mut assets, true, t);
        let glow = assets
            .get_material(mascot.rig().materials.eye)
            .unwrap()
            .emissive_intensity;
        assert!(glow >= 0.4 - 1e-5 && glow <= 1.2 + 1e-5);
        saw_bright |= glow > 1.0;
    }
    assert!(saw_bright);
}

#[test]
fn head_bobs_with_the_torso_in_idle() {
    let (mut scene, mut assets, mut mascot) = build();
    mascot.step(&mut scene, &mut assets, false, 0.7853982); // sin(2t) = 1
    let head_y = scene
        .get_node(mascot.rig().head_group)
        .unwrap()
        .transform
        .position
        .y;
    assert!((head_y - 0.8).abs() < 1e-4);
    assert!((torso_y(&scene, &mascot) + 0.4).abs() < 1e-4);
}
