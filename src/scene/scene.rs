use glam::Vec4;
use slotmap::{SlotMap, SparseSecondaryMap};

use crate::resources::Mesh;
use crate::scene::NodeHandle;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Scene container.
///
/// Pure data layer: the node hierarchy, per-node mesh components, the
/// lighting rig and the camera. The renderer reads it; the animation
/// driver is the sole per-frame writer.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    /// Mesh component per node (geometry + material handles).
    pub meshes: SparseSecondaryMap<NodeHandle, Mesh>,

    pub lights: Vec<Light>,
    pub camera: Camera,

    /// Clear color; `None` leaves the surface's default clear.
    pub background: Option<Vec4>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SparseSecondaryMap::new(),
            lights: Vec::new(),
            camera: Camera::new_perspective(50.0, 1.0, 0.1, 1000.0),
            background: None,
        }
    }

    /// Adds a node at the scene root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }
        handle
    }

    /// Adds a root node carrying a mesh component.
    pub fn add_mesh_node(&mut self, node: Node, mesh: Mesh) -> NodeHandle {
        let handle = self.add_node(node);
        self.meshes.insert(handle, mesh);
        handle
    }

    /// Adds a child node carrying a mesh component.
    pub fn add_mesh_to_parent(&mut self, node: Node, mesh: Mesh, parent: NodeHandle) -> NodeHandle {
        let handle = self.add_to_parent(node, parent);
        self.meshes.insert(handle, mesh);
        handle
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Removes a node and its entire subtree, including mesh components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        // Detach from parent or root list first.
        if let Some(node) = self.nodes.get(handle) {
            if let Some(parent) = node.parent {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|&c| c != handle);
                }
            } else {
                self.root_nodes.retain(|&r| r != handle);
            }
        } else {
            return;
        }

        let mut stack = vec![handle];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children.iter().copied());
            }
            self.meshes.remove(current);
        }
    }

    /// Removes every node, mesh component and light. The camera is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_nodes.clear();
        self.meshes.clear();
        self.lights.clear();
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Propagates world matrices through the hierarchy.
    ///
    /// Called once per frame after the animation step; this is the only
    /// hierarchy-wide mutation.
    pub fn update(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }
}
