use crate::assets::{GeometryHandle, MaterialHandle};

/// Mesh component: pairs a geometry with a material by handle.
///
/// Handles point into the [`AssetStore`], so several nodes can share one
/// geometry or material (both eyes do, both arms do). Sharing by handle is
/// what makes teardown dispose each unique resource exactly once.
///
/// [`AssetStore`]: crate::assets::AssetStore
#[derive(Debug, Clone, Copy)]
pub struct Mesh {
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: GeometryHandle, material: MaterialHandle) -> Self {
        Self { geometry, material }
    }
}
