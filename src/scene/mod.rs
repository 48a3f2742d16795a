//! Scene mirror
//!
//! A data-only copy of the parts of the host scene the orchestration layer
//! touches:
//! - Node: named mesh with transform, visibility and emissive slot
//! - Transform: position / Euler rotation / scale with a dirty flag
//! - Scene: node storage keyed by generational [`NodeHandle`]s
//! - CameraRig: camera eye and orbit target

pub mod camera;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::CameraRig;
pub use node::{Emissive, Node};
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Weak reference to a scene node.
    pub struct NodeHandle;
}
