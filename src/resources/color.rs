use glam::{Vec3, Vec4};

/// Converts a packed `0xRRGGBB` color to an RGB vector.
///
/// The palettes are authored as hex triples and used as-is, without gamma
/// conversion.
#[must_use]
pub fn vec3_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

/// Converts a packed `0xRRGGBB` color to an opaque RGBA vector.
#[must_use]
pub fn vec4_from_hex(hex: u32) -> Vec4 {
    vec3_from_hex(hex).extend(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels_unpack_in_rgb_order() {
        let c = vec3_from_hex(0xff8000);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert!(c.z.abs() < 1e-6);
    }

    #[test]
    fn vec4_is_opaque() {
        assert!((vec4_from_hex(0x000000).w - 1.0).abs() < 1e-6);
    }
}
