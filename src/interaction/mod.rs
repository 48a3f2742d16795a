//! Pointer interaction
//!
//! - [`InteractionRouter`]: click → behavior → state flip + tweens
//! - [`Highlighter`]: click flash, hover glow and cursor changes

pub mod highlight;
pub mod router;

pub use highlight::{CLICK_HIGHLIGHT, CursorIcon, HOVER_HIGHLIGHT, Highlighter};
pub use router::{DispatchContext, DispatchOutcome, InteractionRouter};

use crate::parts::PartId;
use crate::scene::NodeHandle;

/// A pointer event from the renderer's picking layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub part: PartId,
    pub node: NodeHandle,
}

impl PointerEvent {
    #[must_use]
    pub fn new(part: PartId, node: NodeHandle) -> Self {
        Self { part, node }
    }
}
