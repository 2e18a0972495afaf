#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! A tiny real-time 3D robot mascot widget.
//!
//! The mascot is a six-part scene graph (torso, steerable head group with
//! eyes and antenna, two arms) advanced once per display frame by either an
//! idle or a dancing kinematic profile, selected each frame from an
//! external "audio is playing" flag. The head is continuously steered
//! toward the pointer with damped, clamped rotation, and the body palette
//! swaps instantly with the host theme.

pub mod app;
pub mod assets;
pub mod errors;
pub mod mascot;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod utils;

pub use app::MascotApp;
pub use assets::{AssetStore, DisposeStats, GeometryHandle, MaterialHandle};
pub use errors::{MascotError, Result};
pub use mascot::{
    CursorTracker, Mascot, MascotDriver, MascotRig, MascotSettings, PlayingFlag, ProfileMode,
    RigPose, Theme, WidgetRect,
};
pub use renderer::{Renderer, RendererSettings, WgpuContext};
pub use resources::{Geometry, Mesh, StandardMaterial};
pub use scene::{Camera, Light, Node, NodeHandle, Scene, Transform};
