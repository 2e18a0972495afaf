//! Scene graph tests
//!
//! Tests for:
//! - Transform TRS dirty checking and Euler round-trips
//! - Scene node creation, attachment and recursive removal
//! - Hierarchical world-matrix propagation

use glam::{Quat, Vec3};
use mascot3d::resources::Mesh;
use mascot3d::scene::node::Node;
use mascot3d::scene::transform::Transform;
use mascot3d::scene::Scene;
use mascot3d::{AssetStore, Geometry, StandardMaterial};
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call should always return true (force_update starts true)
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.rotation = Quat::from_rotation_y(FRAC_PI_2);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

#[test]
fn transform_euler_roundtrip() {
    let mut t = Transform::new();
    let (x, y, z) = (0.3, 0.5, 1.2);
    t.set_rotation_euler(x, y, z);

    let euler = t.rotation_euler();
    assert!(approx_eq(euler.x, x));
    assert!(approx_eq(euler.y, y));
    assert!(approx_eq(euler.z, z));
}

// ============================================================================
// Scene hierarchy
// ============================================================================

#[test]
fn scene_add_node_to_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new());
    assert!(scene.root_nodes.contains(&handle));
    assert!(scene.get_node(handle).is_some());
}

#[test]
fn scene_add_to_parent_links_both_sides() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new());
    let child = scene.add_to_parent(Node::new(), parent);

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert!(scene.get_node(parent).unwrap().children().contains(&child));
    assert!(!scene.root_nodes.contains(&child));
}

#[test]
fn scene_remove_node_removes_subtree_and_components() {
    let mut scene = Scene::new();
    let mut assets = AssetStore::new();
    let geo = assets.add_geometry(Geometry::new_box(1.0, 1.0, 1.0));
    let mat = assets.add_material(StandardMaterial::default());

    let parent = scene.add_node(Node::new());
    let child = scene.add_mesh_to_parent(Node::new(), Mesh::new(geo, mat), parent);
    let grandchild = scene.add_to_parent(Node::new(), child);

    scene.remove_node(parent);

    assert!(scene.get_node(parent).is_none());
    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
    assert!(scene.meshes.get(child).is_none());
    assert!(!scene.root_nodes.contains(&parent));
}

#[test]
fn camera_set_aspect_recomputes_projection() {
    let mut scene = Scene::new();
    let square = scene.camera.view_projection();

    scene.camera.set_aspect(2.0);
    let wide = scene.camera.view_projection();

    assert!(approx_eq(scene.camera.aspect, 2.0));
    // Widening the aspect halves the X focal scale.
    assert!(approx_eq(wide.col(0).x, square.col(0).x / 2.0));
    assert!(approx_eq(wide.col(1).y, square.col(1).y));
}

#[test]
fn scene_clear_keeps_camera() {
    let mut scene = Scene::new();
    scene.add_node(Node::new());
    let aspect = scene.camera.aspect;
    scene.clear();
    assert_eq!(scene.node_count(), 0);
    assert!(approx_eq(scene.camera.aspect, aspect));
}

// ============================================================================
// World-matrix propagation
// ============================================================================

#[test]
fn scene_update_propagates_world_matrices() {
    let mut scene = Scene::new();

    let mut parent_node = Node::new();
    parent_node.transform.position = Vec3::new(0.0, 0.7, 0.0);
    let parent = scene.add_node(parent_node);

    let mut child_node = Node::new();
    child_node.transform.position = Vec3::new(-0.25, 0.15, 0.45);
    let child = scene.add_to_parent(child_node, parent);

    scene.update();

    let world = scene.get_node(child).unwrap().world_matrix().translation;
    assert!(vec3_approx(world.into(), Vec3::new(-0.25, 0.85, 0.45)));
}

#[test]
fn scene_update_reflects_parent_motion_in_children() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new());
    let mut child_node = Node::new();
    child_node.transform.position = Vec3::new(1.0, 0.0, 0.0);
    let child = scene.add_to_parent(child_node, parent);

    scene.update();

    scene.get_node_mut(parent).unwrap().transform.position.y = 2.0;
    scene.update();

    let world = scene.get_node(child).unwrap().world_matrix().translation;
    assert!(vec3_approx(world.into(), Vec3::new(1.0, 2.0, 0.0)));
}
