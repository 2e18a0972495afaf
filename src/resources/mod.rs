//! CPU-side render resources
//!
//! Geometry data, materials and the mesh component tying them together.
//! GPU buffers are created lazily by the renderer; everything here is plain
//! data that can be built and tested without a device.

pub mod color;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use color::{vec3_from_hex, vec4_from_hex};
pub use geometry::Geometry;
pub use material::StandardMaterial;
pub use mesh::Mesh;
