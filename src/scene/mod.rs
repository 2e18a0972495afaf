//! Scene graph module
//!
//! Manages the widget's small renderable hierarchy:
//! - [`Node`]: scene node (parent/child relationships and a transform)
//! - [`Transform`]: position, rotation, scale with cached matrices
//! - [`Scene`]: scene container (nodes, mesh components, lights, camera)
//! - [`Camera`]: fixed perspective camera
//! - [`Light`]: ambient and point lights
//! - `transform_system`: decoupled world-matrix propagation

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use camera::Camera;
pub use light::{Light, LightKind};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] stored in a [`Scene`].
    pub struct NodeHandle;
}
