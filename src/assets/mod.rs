//! Asset storage
//!
//! Slotmap-keyed storage for geometries and materials. The store is the
//! unit of teardown accounting: [`AssetStore::release`] clears everything
//! and reports how many unique resources were dropped, which is exactly
//! the "dispose once per unique resource" contract the driver's teardown
//! is tested against.

use slotmap::{SlotMap, new_key_type};

use crate::resources::{Geometry, StandardMaterial};

new_key_type! {
    /// Handle to a [`Geometry`] in an [`AssetStore`].
    pub struct GeometryHandle;
    /// Handle to a [`StandardMaterial`] in an [`AssetStore`].
    pub struct MaterialHandle;
}

/// Counts of unique resources released by a teardown pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisposeStats {
    pub geometries: usize,
    pub materials: usize,
}

impl DisposeStats {
    #[must_use]
    pub fn total(&self) -> usize {
        self.geometries + self.materials
    }
}

/// Storage for shared render resources.
#[derive(Default)]
pub struct AssetStore {
    geometries: SlotMap<GeometryHandle, Geometry>,
    materials: SlotMap<MaterialHandle, StandardMaterial>,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryHandle {
        self.geometries.insert(geometry)
    }

    pub fn add_material(&mut self, material: StandardMaterial) -> MaterialHandle {
        self.materials.insert(material)
    }

    #[inline]
    #[must_use]
    pub fn get_geometry(&self, handle: GeometryHandle) -> Option<&Geometry> {
        self.geometries.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_material(&self, handle: MaterialHandle) -> Option<&StandardMaterial> {
        self.materials.get(handle)
    }

    #[inline]
    pub fn get_material_mut(&mut self, handle: MaterialHandle) -> Option<&mut StandardMaterial> {
        self.materials.get_mut(handle)
    }

    #[must_use]
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Drops every stored resource and reports how many of each were live.
    ///
    /// A second call finds the store empty and reports zeros, so callers
    /// can assert that teardown ran exactly once.
    pub fn release(&mut self) -> DisposeStats {
        let stats = DisposeStats {
            geometries: self.geometries.len(),
            materials: self.materials.len(),
        };
        self.geometries.clear();
        self.materials.clear();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_counts_unique_resources_once() {
        let mut assets = AssetStore::new();
        let geo = assets.add_geometry(Geometry::new_box(1.0, 1.0, 1.0));
        assets.add_material(StandardMaterial::from_hex(0x9019d7));
        assets.add_material(StandardMaterial::from_hex(0xb366ff));

        // A shared handle is not a second resource.
        let _alias = geo;

        let stats = assets.release();
        assert_eq!(
            stats,
            DisposeStats {
                geometries: 1,
                materials: 2
            }
        );

        // Idempotent: nothing left to drop.
        assert_eq!(assets.release(), DisposeStats::default());
        assert!(assets.get_geometry(geo).is_none());
    }
}
