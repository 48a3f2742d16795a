use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::camera::CameraRig;
use crate::scene::node::Node;

/// Mirror of the host's scene graph.
///
/// The host inserts one node per interactive mesh when the model finishes
/// loading and attaches its camera rig once the orbit controls exist. Handles
/// are generational, so a removed node makes every stored handle resolve to
/// `None` instead of aliasing a newer node.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeHandle, Node>,
    names: FxHashMap<String, NodeHandle>,
    camera: Option<CameraRig>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            names: FxHashMap::default(),
            camera: None,
        }
    }

    /// Adds a node. A later node with the same name shadows the earlier one
    /// in [`Scene::find_by_name`].
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let name = node.name.clone();
        let handle = self.nodes.insert(node);
        if !name.is_empty() {
            self.names.insert(name, handle);
        }
        handle
    }

    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node> {
        let node = self.nodes.remove(handle)?;
        if self.names.get(&node.name) == Some(&handle) {
            self.names.remove(&node.name);
        }
        Some(node)
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.names.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Camera
    // ========================================================================

    /// Attaches (or replaces) the live camera rig.
    pub fn set_camera(&mut self, rig: CameraRig) {
        self.camera = Some(rig);
    }

    /// Detaches the camera, e.g. while the canvas is being recreated.
    pub fn clear_camera(&mut self) -> Option<CameraRig> {
        self.camera.take()
    }

    #[must_use]
    pub fn camera(&self) -> Option<&CameraRig> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut CameraRig> {
        self.camera.as_mut()
    }

    // ========================================================================
    // Sync
    // ========================================================================

    /// Collects every node whose transform changed since the last call and
    /// clears their dirty flags. The host uploads these to its renderer.
    pub fn take_dirty_nodes(&mut self) -> Vec<NodeHandle> {
        self.nodes
            .iter_mut()
            .filter_map(|(handle, node)| node.transform.take_dirty().then_some(handle))
            .collect()
    }
}
