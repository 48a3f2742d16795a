//! Part bookkeeping
//!
//! - [`PartRegistry`]: part id → scene handle, rest pose and groups
//! - [`ToggleStateStore`]: open/closed flags per part or group
//! - [`BehaviorTable`]: click policy per part
//! - [`ChitLinkResolver`]: parts that open external content

pub mod behavior;
pub mod id;
pub mod links;
pub mod registry;
pub mod toggle;

pub use behavior::{Behavior, BehaviorRule, BehaviorTable};
pub use id::{GroupId, PartId, StateKey};
pub use links::{ChitLinkResolver, ContentSlug};
pub use registry::{Group, Part, PartKind, PartRegistry, PartSpec, RestPose};
pub use toggle::ToggleStateStore;
