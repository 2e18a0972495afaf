use crate::resources::geometry::Geometry;

/// Axis-aligned box with per-face normals (24 vertices, 4 per face).
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> Geometry {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    let positions: Vec<[f32; 3]> = vec![
        // Front face (+Z)
        [-w, -h, d],
        [w, -h, d],
        [w, h, d],
        [-w, h, d],
        // Back face (-Z)
        [-w, -h, -d],
        [-w, h, -d],
        [w, h, -d],
        [w, -h, -d],
        // Top face (+Y)
        [-w, h, -d],
        [-w, h, d],
        [w, h, d],
        [w, h, -d],
        // Bottom face (-Y)
        [-w, -h, -d],
        [w, -h, -d],
        [w, -h, d],
        [-w, -h, d],
        // Right face (+X)
        [w, -h, -d],
        [w, h, -d],
        [w, h, d],
        [w, -h, d],
        // Left face (-X)
        [-w, -h, -d],
        [-w, -h, d],
        [-w, h, d],
        [-w, h, -d],
    ];

    const FACE_NORMALS: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
    ];
    let normals: Vec<[f32; 3]> = FACE_NORMALS
        .iter()
        .flat_map(|&n| std::iter::repeat_n(n, 4))
        .collect();

    // Two CCW triangles per face: 0,1,2  0,2,3
    let indices: Vec<u16> = (0..6u16)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

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
    fn box_has_four_vertices_per_face() {
        let geo = create_box(2.0, 2.0, 2.0);
        assert_eq!(geo.positions.len(), 24);
        assert_eq!(geo.normals.len(), 24);
        assert_eq!(geo.indices.len(), 36);
    }

    #[test]
    fn box_extents_match_dimensions() {
        let geo = create_box(1.2, 1.5, 1.0);
        let max_x = geo.positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let max_y = geo.positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let max_z = geo.positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        assert!((max_x - 0.6).abs() < 1e-6);
        assert!((max_y - 0.75).abs() < 1e-6);
        assert!((max_z - 0.5).abs() < 1e-6);
    }
}
