use crate::resources::geometry::Geometry;
use std::f32::consts::PI;

/// Capped Y-axis cylinder (cone when one radius is zero).
///
/// Side normals account for the slope between the two radii; the caps get
/// their own vertices so the rim stays hard-edged.
#[must_use]
pub fn create_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> Geometry {
    let radial_segments = radial_segments.max(3);
    let half = height / 2.0;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    // Side wall: two rings sharing a slope-corrected normal per column.
    let slope = (radius_bottom - radius_top) / height;
    for x in 0..=radial_segments {
        let u_ratio = x as f32 / radial_segments as f32;
        let phi = u_ratio * 2.0 * PI;
        let (sin, cos) = phi.sin_cos();

        let normal = {
            let n = [sin, slope, cos];
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            [n[0] / len, n[1] / len, n[2] / len]
        };

        positions.push([radius_top * sin, half, radius_top * cos]);
        normals.push(normal);
        positions.push([radius_bottom * sin, -half, radius_bottom * cos]);
        normals.push(normal);
    }

    for x in 0..radial_segments {
        let top_a = x * 2;
        let bot_a = top_a + 1;
        let top_b = top_a + 2;
        let bot_b = top_a + 3;

        indices.push(top_a as u16);
        indices.push(bot_a as u16);
        indices.push(top_b as u16);

        indices.push(bot_a as u16);
        indices.push(bot_b as u16);
        indices.push(top_b as u16);
    }

    // Caps: a center vertex fanned out to the rim.
    let mut build_cap = |radius: f32, y: f32, up: f32| {
        if radius <= 0.0 {
            return;
        }
        let center_index = positions.len() as u16;
        positions.push([0.0, y, 0.0]);
        normals.push([0.0, up, 0.0]);

        for x in 0..=radial_segments {
            let phi = x as f32 / radial_segments as f32 * 2.0 * PI;
            let (sin, cos) = phi.sin_cos();
            positions.push([radius * sin, y, radius * cos]);
            normals.push([0.0, up, 0.0]);
        }

        for x in 0..radial_segments {
            let rim_a = center_index + 1 + x as u16;
            let rim_b = rim_a + 1;
            if up > 0.0 {
                indices.push(center_index);
                indices.push(rim_a);
                indices.push(rim_b);
            } else {
                indices.push(center_index);
                indices.push(rim_b);
                indices.push(rim_a);
            }
        }
    };

    build_cap(radius_top, half, 1.0);
    build_cap(radius_bottom, -half, -1.0);

    Geometry {
        positions,
        normals,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cylinder_extents_match_height() {
        let geo = create_cylinder(0.05, 0.05, 0.4, 8);
        let max_y = geo.positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let min_y = geo.positions.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        assert!((max_y - 0.2).abs() < 1e-6);
        assert!((min_y + 0.2).abs() < 1e-6);
    }

    #[test]
    fn cylinder_side_normals_are_horizontal_for_equal_radii() {
        let geo = create_cylinder(0.05, 0.05, 0.4, 8);
        // Side wall vertices come first: 2 * (segments + 1)
        for n in geo.normals.iter().take(18) {
            assert!(n[1].abs() < 1e-6);
        }
    }

    #[test]
    fn cylinder_indices_stay_in_bounds() {
        let geo = create_cylinder(0.0, 0.1, 0.3, 12);
        let count = geo.positions.len() as u16;
        assert!(geo.indices.iter().all(|&i| i < count));
    }
}
