//! Animation profiles
//!
//! The two mutually exclusive kinematic profiles driving the mascot. Pose
//! sampling is a pure function of elapsed wall-clock time, so switching
//! profiles takes effect on the very next frame and the math is testable
//! without a scene or a GPU.
//!
//! Phase is derived from `t` each frame rather than accumulated; a paused
//! host resumes with a phase jump, which is acceptable for a decorative
//! widget. The antenna spin is the one accumulated quantity and is
//! expressed as a per-frame step.

use std::f32::consts::PI;

/// Rest height of the torso center.
pub const TORSO_REST_Y: f32 = -0.5;
/// Rest height of the head group.
pub const HEAD_REST_Y: f32 = 0.7;
/// Rest height of both arms.
pub const ARM_REST_Y: f32 = -0.3;
/// Outward roll of the arms at rest (left positive, right negative).
pub const ARM_BASE_ROLL: f32 = 0.3;

mod idle {
    /// Angular frequency of the idle bob (rad/s).
    pub const FREQ: f32 = 2.0;
    /// Torso/head bob amplitude.
    pub const BOB: f32 = 0.1;
    /// Arm sway amplitude.
    pub const ARM_SWAY: f32 = 0.05;
    /// Antenna tip rotation per frame.
    pub const ANTENNA_STEP: f32 = 0.02;
    /// Eye glow center and swing (0.3..0.7 at 3 rad/s).
    pub const GLOW_CENTER: f32 = 0.5;
    pub const GLOW_SWING: f32 = 0.2;
    pub const GLOW_FREQ: f32 = 3.0;
}

mod dancing {
    /// Angular frequency of the dance bounce (rad/s).
    pub const FREQ: f32 = 8.0;
    /// Torso/head bounce amplitude.
    pub const BOUNCE: f32 = 0.2;
    /// Base wiggle amount scaled per axis below.
    pub const WIGGLE: f32 = 0.3;
    pub const TORSO_ROLL_SCALE: f32 = 0.3;
    pub const TORSO_YAW_SCALE: f32 = 0.2;
    pub const HEAD_ROLL_SCALE: f32 = 0.4;
    /// Phase lead of the head wiggle relative to the torso.
    pub const HEAD_PHASE: f32 = 0.5;
    /// Arm vertical swing amplitude.
    pub const ARM_SWING: f32 = 0.3;
    /// Arm roll arc on top of the base roll.
    pub const ARM_ROLL: f32 = 0.8;
    /// Forward/back arm tilt amplitude.
    pub const ARM_TILT: f32 = 0.4;
    /// Antenna tip rotation per frame.
    pub const ANTENNA_STEP: f32 = 0.15;
    /// Eye glow center and swing (0.4..1.2 at double the bounce rate).
    pub const GLOW_CENTER: f32 = 0.8;
    pub const GLOW_SWING: f32 = 0.4;
}

/// The selected kinematic behavior, derived fresh each frame from the
/// external playing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    Idle,
    Dancing,
}

impl ProfileMode {
    #[must_use]
    pub fn from_playing(playing: bool) -> Self {
        if playing { Self::Dancing } else { Self::Idle }
    }
}

/// Per-arm pose values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    pub y: f32,
    /// Rotation around Z.
    pub roll: f32,
    /// Forward/back rotation around X.
    pub tilt: f32,
}

/// One frame's worth of kinematic targets for the whole rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigPose {
    pub torso_y: f32,
    pub torso_roll: f32,
    pub torso_yaw: f32,

    pub head_y: f32,
    /// Secondary head wiggle around Z; yaw/pitch come from cursor tracking.
    pub head_roll: f32,

    pub left_arm: ArmPose,
    pub right_arm: ArmPose,

    /// Antenna tip rotation to accumulate this frame.
    pub antenna_spin_step: f32,
    /// Eye emissive intensity.
    pub eye_glow: f32,
}

impl RigPose {
    /// Samples the pose for `mode` at elapsed time `t` (seconds).
    #[must_use]
    pub fn sample(mode: ProfileMode, t: f32) -> Self {
        match mode {
            ProfileMode::Idle => Self::sample_idle(t),
            ProfileMode::Dancing => Self::sample_dancing(t),
        }
    }

    fn sample_idle(t: f32) -> Self {
        let bob = (t * idle::FREQ).sin();

        Self {
            torso_y: TORSO_REST_Y + bob * idle::BOB,
            torso_roll: 0.0,
            torso_yaw: 0.0,

            head_y: HEAD_REST_Y + bob * idle::BOB,
            head_roll: 0.0,

            left_arm: ArmPose {
                y: ARM_REST_Y + bob * idle::ARM_SWAY,
                roll: ARM_BASE_ROLL,
                tilt: 0.0,
            },
            right_arm: ArmPose {
                y: ARM_REST_Y + bob * idle::ARM_SWAY,
                roll: -ARM_BASE_ROLL,
                tilt: 0.0,
            },

            antenna_spin_step: idle::ANTENNA_STEP,
            eye_glow: idle::GLOW_CENTER + (t * idle::GLOW_FREQ).sin() * idle::GLOW_SWING,
        }
    }

    fn sample_dancing(t: f32) -> Self {
        let beat = t * dancing::FREQ;
        let bounce = beat.sin().abs() * dancing::BOUNCE;

        // Left and right arms are offset by PI so the dance is not mirrored.
        let left_swing = beat.sin();
        let right_swing = (beat + PI).sin();

        Self {
            torso_y: TORSO_REST_Y + bounce,
            torso_roll: (beat * 0.5).sin() * dancing::WIGGLE * dancing::TORSO_ROLL_SCALE,
            torso_yaw: (beat * 0.25).sin() * dancing::WIGGLE * dancing::TORSO_YAW_SCALE,

            head_y: HEAD_REST_Y + bounce,
            head_roll: (beat * 0.5 + dancing::HEAD_PHASE).sin()
                * dancing::WIGGLE
                * dancing::HEAD_ROLL_SCALE,

            left_arm: ArmPose {
                y: ARM_REST_Y + left_swing * dancing::ARM_SWING,
                roll: ARM_BASE_ROLL + left_swing * dancing::ARM_ROLL,
                tilt: (beat * 0.5).sin() * dancing::ARM_TILT,
            },
            right_arm: ArmPose {
                y: ARM_REST_Y + right_swing * dancing::ARM_SWING,
                roll: -ARM_BASE_ROLL - right_swing * dancing::ARM_ROLL,
                tilt: (beat * 0.5 + PI).sin() * dancing::ARM_TILT,
            },

            antenna_spin_step: dancing::ANTENNA_STEP,
            eye_glow: dancing::GLOW_CENTER + (beat * 2.0).sin() * dancing::GLOW_SWING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_torso_stays_within_bob_amplitude() {
        for i in 0..1000 {
            let t = i as f32 * 0.001;
            let pose = RigPose::sample(ProfileMode::Idle, t);
            assert!(pose.torso_y >= TORSO_REST_Y - 0.1 - 1e-6);
            assert!(pose.torso_y <= TORSO_REST_Y + 0.1 + 1e-6);
        }
    }

    #[test]
    fn dancing_arms_are_phase_offset() {
        // At the swing peak the left arm is up while the right is down.
        let t = (PI / 2.0) / 8.0;
        let pose = RigPose::sample(ProfileMode::Dancing, t);
        assert!(pose.left_arm.y > ARM_REST_Y + 0.29);
        assert!(pose.right_arm.y < ARM_REST_Y - 0.29);
    }

    #[test]
    fn eye_glow_ranges_per_profile() {
        for i in 0..2000 {
            let t = i as f32 * 0.002;
            let idle = RigPose::sample(ProfileMode::Idle, t);
            assert!(idle.eye_glow >= 0.3 - 1e-5 && idle.eye_glow <= 0.7 + 1e-5);
            let dancing = RigPose::sample(ProfileMode::Dancing, t);
            assert!(dancing.eye_glow >= 0.4 - 1e-5 && dancing.eye_glow <= 1.2 + 1e-5);
        }
    }
}
