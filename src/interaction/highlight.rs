use std::time::Duration;

use smallvec::SmallVec;

use crate::scene::{Emissive, NodeHandle, Scene};

/// Cursor the host should show. Emitted on hover transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorIcon {
    Default,
    Pointer,
}

pub const CLICK_HIGHLIGHT: Emissive = Emissive::from_hex(0x00ff_8844, 0.5);

pub const HOVER_HIGHLIGHT: Emissive = Emissive::from_hex(0x0044_88ff, 0.3);

/// Click flash and hover glow.
///
/// Clicks light the part for a fixed time, then clear it on a later tick.
/// Hover lights the part until the pointer leaves, except on the selected
/// part, which keeps whatever it has.
#[derive(Debug, Clone)]
pub struct Highlighter {
    click_duration: Duration,
    hovered: Option<NodeHandle>,
    selected: Option<NodeHandle>,
    pending_clears: SmallVec<[(NodeHandle, Duration); 4]>,
}

impl Highlighter {
    #[must_use]
    pub fn new(click_duration: Duration) -> Self {
        Self {
            click_duration,
            hovered: None,
            selected: None,
            pending_clears: SmallVec::new(),
        }
    }

    /// Selects the node and flashes it. Non-interactive nodes are not lit.
    pub fn on_click(&mut self, scene: &mut Scene, node: NodeHandle, now: Duration) {
        self.selected = Some(node);
        match scene.get_node_mut(node) {
            Some(n) if n.interactive => n.emissive = CLICK_HIGHLIGHT,
            _ => return,
        }
        let due = now + self.click_duration;
        match self.pending_clears.iter_mut().find(|(h, _)| *h == node) {
            Some(entry) => entry.1 = due,
            None => self.pending_clears.push((node, due)),
        }
    }

    /// Hover start. Returns the cursor to show, or `None` if ignored.
    pub fn on_pointer_enter(&mut self, scene: &mut Scene, node: NodeHandle) -> Option<CursorIcon> {
        if self.selected == Some(node) {
            return None;
        }
        let n = scene.get_node_mut(node)?;
        if !n.interactive {
            return None;
        }
        n.emissive = HOVER_HIGHLIGHT;
        self.hovered = Some(node);
        Some(CursorIcon::Pointer)
    }

    /// Hover end. Returns the cursor to restore, or `None` if the node was
    /// not the hovered one.
    pub fn on_pointer_leave(&mut self, scene: &mut Scene, node: NodeHandle) -> Option<CursorIcon> {
        if self.hovered != Some(node) {
            return None;
        }
        self.hovered = None;
        if self.selected != Some(node) {
            if let Some(n) = scene.get_node_mut(node) {
                n.emissive = Emissive::NONE;
            }
        }
        Some(CursorIcon::Default)
    }

    /// Clears click flashes that have run their course.
    pub fn tick(&mut self, scene: &mut Scene, now: Duration) {
        self.pending_clears.retain(|(node, due)| {
            if now < *due {
                return true;
            }
            if let Some(n) = scene.get_node_mut(*node) {
                n.emissive = Emissive::NONE;
            }
            false
        });
    }

    #[must_use]
    pub fn hovered(&self) -> Option<NodeHandle> {
        self.hovered
    }

    #[must_use]
    pub fn selected(&self) -> Option<NodeHandle> {
        self.selected
    }
}
