use crate::resources::primitives;

/// CPU-side triangle mesh data.
///
/// The widget draws six static primitives, so geometry is kept as planar
/// position/normal arrays plus a `u16` index list. Buffers are uploaded by
/// the renderer on first use and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl Geometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis-aligned box centered at the origin.
    #[must_use]
    pub fn new_box(width: f32, height: f32, depth: f32) -> Self {
        primitives::create_box(width, height, depth)
    }

    /// UV sphere centered at the origin.
    #[must_use]
    pub fn new_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        primitives::create_sphere(radius, width_segments, height_segments)
    }

    /// Y-axis cylinder centered at the origin.
    #[must_use]
    pub fn new_cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        primitives::create_cylinder(radius_top, radius_bottom, height, radial_segments)
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Interleaves positions and normals into `[px py pz nx ny nz]` vertex
    /// records for upload.
    #[must_use]
    pub fn interleaved_vertices(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.positions.len() * 6);
        for (p, n) in self.positions.iter().zip(self.normals.iter()) {
            out.extend_from_slice(p);
            out.extend_from_slice(n);
        }
        out
    }
}
