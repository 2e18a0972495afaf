//! Error Types
//!
//! The widget has exactly one meaningful failure mode: construction-time
//! GPU/surface acquisition. Everything after construction is decorative and
//! degrades silently (a skipped frame, a frozen pose), so there are no
//! mid-life error variants beyond what the windowing layer can raise.
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, MascotError>`.

use thiserror::Error;

/// The error type for the mascot widget.
#[derive(Error, Debug)]
pub enum MascotError {
    /// Failed to request a compatible GPU adapter or create the surface.
    /// Fatal to construction: the caller must not render the mascot.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, MascotError>`.
pub type Result<T> = std::result::Result<T, MascotError>;
