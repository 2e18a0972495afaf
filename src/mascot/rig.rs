//! Rig construction
//!
//! Builds the six-part robot hierarchy, its shared materials, the lighting
//! rig and the camera at their fixed rest values. Both eyes share one
//! geometry and one material, as do both arms, so teardown accounting sees
//! each unique resource once.

use glam::Vec3;

use crate::assets::{AssetStore, MaterialHandle};
use crate::resources::{Geometry, Mesh, StandardMaterial, vec3_from_hex};
use crate::scene::{Light, Node, NodeHandle, Scene};

use super::profiles::{ARM_BASE_ROLL, ARM_REST_Y, HEAD_REST_Y, TORSO_REST_Y};

/// Ambient theme of the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// `(primary, secondary)` packed hex colors for this theme.
    #[must_use]
    pub fn palette(self) -> (u32, u32) {
        match self {
            Self::Dark => (0x9019d7, 0xb366ff),
            Self::Light => (0x7c3aed, 0xa78bfa),
        }
    }
}

/// The recolorable material set plus the fixed emissive ones.
#[derive(Debug, Clone, Copy)]
pub struct RigMaterials {
    pub body: MaterialHandle,
    pub head: MaterialHandle,
    pub arm: MaterialHandle,
    pub antenna: MaterialHandle,
    /// Shared by both eyes; emissive intensity pulses every frame.
    pub eye: MaterialHandle,
    pub antenna_tip: MaterialHandle,
}

/// Node handles into the mascot hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct MascotRig {
    pub torso: NodeHandle,
    /// Group steered toward the cursor; parents the shell, eyes and antenna.
    pub head_group: NodeHandle,
    pub head_shell: NodeHandle,
    pub left_eye: NodeHandle,
    pub right_eye: NodeHandle,
    pub antenna: NodeHandle,
    pub antenna_tip: NodeHandle,
    pub left_arm: NodeHandle,
    pub right_arm: NodeHandle,

    pub materials: RigMaterials,
}

impl MascotRig {
    /// Builds the robot into `scene`/`assets` with the dark palette.
    pub fn build(scene: &mut Scene, assets: &mut AssetStore) -> Self {
        let (primary, secondary) = Theme::Dark.palette();

        // Camera and lights.
        scene.camera.set_position(Vec3::new(0.0, 0.0, 5.0));
        scene.lights.push(Light::new_ambient(Vec3::ONE, 0.6));
        scene.lights.push(Light::new_point(
            vec3_from_hex(0x9019d7),
            1.0,
            Vec3::new(5.0, 5.0, 5.0),
            100.0,
        ));
        scene.lights.push(Light::new_point(
            vec3_from_hex(0x7c3aed),
            0.8,
            Vec3::new(-5.0, -5.0, 5.0),
            100.0,
        ));

        // Materials.
        let materials = RigMaterials {
            body: assets.add_material(
                StandardMaterial::from_hex(primary)
                    .with_metalness(0.7)
                    .with_roughness(0.3),
            ),
            head: assets.add_material(
                StandardMaterial::from_hex(secondary)
                    .with_metalness(0.6)
                    .with_roughness(0.4),
            ),
            arm: assets.add_material(
                StandardMaterial::from_hex(primary)
                    .with_metalness(0.7)
                    .with_roughness(0.3),
            ),
            antenna: assets.add_material(StandardMaterial::from_hex(primary).with_metalness(0.8)),
            eye: assets.add_material(
                StandardMaterial::from_hex(0x00ffff).with_emissive_hex(0x00ffff, 0.5),
            ),
            antenna_tip: assets.add_material(
                StandardMaterial::from_hex(0xff00ff).with_emissive_hex(0xff00ff, 0.3),
            ),
        };

        // Torso.
        let torso_geo = assets.add_geometry(Geometry::new_box(1.2, 1.5, 1.0));
        let mut torso_node = Node::new();
        torso_node.transform.position.y = TORSO_REST_Y;
        let torso = scene.add_mesh_node(torso_node, Mesh::new(torso_geo, materials.body));

        // Head group and shell.
        let mut group_node = Node::new();
        group_node.transform.position.y = HEAD_REST_Y;
        let head_group = scene.add_node(group_node);

        let head_geo = assets.add_geometry(Geometry::new_box(1.0, 1.0, 0.8));
        let head_shell = scene.add_mesh_to_parent(
            Node::new(),
            Mesh::new(head_geo, materials.head),
            head_group,
        );

        // Eyes share one sphere and one material.
        let eye_geo = assets.add_geometry(Geometry::new_sphere(0.15, 16, 16));
        let mut left_eye_node = Node::new();
        left_eye_node.transform.position = Vec3::new(-0.25, 0.15, 0.45);
        let left_eye = scene.add_mesh_to_parent(
            left_eye_node,
            Mesh::new(eye_geo, materials.eye),
            head_group,
        );
        let mut right_eye_node = Node::new();
        right_eye_node.transform.position = Vec3::new(0.25, 0.15, 0.45);
        let right_eye = scene.add_mesh_to_parent(
            right_eye_node,
            Mesh::new(eye_geo, materials.eye),
            head_group,
        );

        // Antenna shaft and tip.
        let antenna_geo = assets.add_geometry(Geometry::new_cylinder(0.05, 0.05, 0.4, 8));
        let mut antenna_node = Node::new();
        antenna_node.transform.position.y = 0.7;
        let antenna = scene.add_mesh_to_parent(
            antenna_node,
            Mesh::new(antenna_geo, materials.antenna),
            head_group,
        );

        let tip_geo = assets.add_geometry(Geometry::new_sphere(0.1, 16, 16));
        let mut tip_node = Node::new();
        tip_node.transform.position.y = 0.9;
        let antenna_tip = scene.add_mesh_to_parent(
            tip_node,
            Mesh::new(tip_geo, materials.antenna_tip),
            head_group,
        );

        // Arms share one box and one material.
        let arm_geo = assets.add_geometry(Geometry::new_box(0.3, 1.0, 0.3));
        let mut left_arm_node = Node::new();
        left_arm_node.transform.position = Vec3::new(-0.75, ARM_REST_Y, 0.0);
        left_arm_node
            .transform
            .set_rotation_euler(0.0, 0.0, ARM_BASE_ROLL);
        let left_arm = scene.add_mesh_node(left_arm_node, Mesh::new(arm_geo, materials.arm));

        let mut right_arm_node = Node::new();
        right_arm_node.transform.position = Vec3::new(0.75, ARM_REST_Y, 0.0);
        right_arm_node
            .transform
            .set_rotation_euler(0.0, 0.0, -ARM_BASE_ROLL);
        let right_arm = scene.add_mesh_node(right_arm_node, Mesh::new(arm_geo, materials.arm));

        Self {
            torso,
            head_group,
            head_shell,
            left_eye,
            right_eye,
            antenna,
            antenna_tip,
            left_arm,
            right_arm,
            materials,
        }
    }

    /// Swaps the themed materials to `theme`'s palette. Instant hex swap,
    /// no interpolation; eyes and antenna tip keep their fixed colors.
    pub fn apply_theme(&self, assets: &mut AssetStore, theme: Theme) {
        let (primary, secondary) = theme.palette();
        for (handle, hex) in [
            (self.materials.body, primary),
            (self.materials.arm, primary),
            (self.materials.antenna, primary),
            (self.materials.head, secondary),
        ] {
            if let Some(material) = assets.get_material_mut(handle) {
                material.set_color_hex(hex);
            }
        }
    }
}
