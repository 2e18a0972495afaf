use glam::Vec3;

/// Light variants used by the widget's fixed lighting rig.
#[derive(Debug, Clone)]
pub enum LightKind {
    /// Uniform ambient contribution with no position.
    Ambient,
    /// Point light at a fixed world position.
    Point {
        position: Vec3,
        /// Attenuation range; contributions fade to zero at this distance.
        range: f32,
    },
}

/// A light component stored on the [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, position: Vec3, range: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Point { position, range },
        }
    }
}
