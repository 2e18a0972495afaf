use glam::{Vec3, Vec4};

use crate::resources::color::{vec3_from_hex, vec4_from_hex};

/// A colorable, optionally self-lit surface.
///
/// Covers everything the mascot needs: themed metallic body panels and the
/// emissive eyes/antenna tip. The renderer packs these fields straight into
/// the per-object uniform block.
#[derive(Debug, Clone)]
pub struct StandardMaterial {
    /// Base color (RGBA).
    pub color: Vec4,
    pub metalness: f32,
    pub roughness: f32,
    /// Emissive color; lit independently of scene lighting.
    pub emissive: Vec3,
    /// Emissive brightness multiplier, mutated every frame for the eyes.
    pub emissive_intensity: f32,
}

impl StandardMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            metalness: 0.0,
            roughness: 1.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 1.0,
        }
    }

    /// Opaque material from a packed `0xRRGGBB` color.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        Self::new(vec4_from_hex(hex))
    }

    #[must_use]
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    #[must_use]
    pub fn with_emissive_hex(mut self, hex: u32, intensity: f32) -> Self {
        self.emissive = vec3_from_hex(hex);
        self.emissive_intensity = intensity;
        self
    }

    /// Instant recolor; no interpolation, the next render shows the new
    /// color exactly.
    pub fn set_color_hex(&mut self, hex: u32) {
        self.color = vec4_from_hex(hex);
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
