//! The mascot: rig construction, procedural animation, cursor tracking
//! and the driver lifecycle.
//!
//! Layering follows the rest of the crate: everything except
//! [`MascotDriver`] operates on plain scene/asset data and is testable
//! without a GPU; the driver adds the renderer and the frame loop on top.

pub mod cursor;
pub mod driver;
pub mod profiles;
pub mod rig;
pub mod signal;

pub use cursor::{CursorTracker, WidgetRect};
pub use driver::{Mascot, MascotDriver, MascotSettings};
pub use profiles::{ProfileMode, RigPose};
pub use rig::{MascotRig, Theme};
pub use signal::PlayingFlag;
