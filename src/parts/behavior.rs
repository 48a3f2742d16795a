use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::parts::id::{GroupId, PartId};

/// What a click on a part does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Behavior {
    /// Open the part's content page; no state change, no animation.
    ExternalLink,
    /// Ignore the click.
    Disabled,
    /// Flip the group flag and move every member in lockstep.
    GroupToggle { group: GroupId },
    /// Flip the part's own flag and move only this part.
    SoloToggle,
    /// Flip the pair flag and spin both members one step.
    PairToggle { pair: GroupId },
    /// Force every listed flag closed and drive the listed groups to rest.
    CloseAll {
        groups: Vec<GroupId>,
        #[serde(default)]
        parts: Vec<PartId>,
    },
    /// Spin one step; stateless. Used for every part without an entry.
    FreeSpin,
}

/// One row of the policy table as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorRule {
    pub part: PartId,
    pub behavior: Behavior,
}

/// Part id → behavior, built once at startup.
#[derive(Debug, Default, Clone)]
pub struct BehaviorTable {
    entries: FxHashMap<PartId, Behavior>,
}

static FALLBACK: Behavior = Behavior::FreeSpin;

impl BehaviorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `part`.
    pub fn insert(&mut self, part: PartId, behavior: Behavior) {
        self.entries.insert(part, behavior);
    }

    /// Behavior for `part`, falling back to [`Behavior::FreeSpin`].
    #[must_use]
    pub fn resolve(&self, part: PartId) -> &Behavior {
        self.entries.get(&part).unwrap_or(&FALLBACK)
    }

    #[must_use]
    pub fn contains(&self, part: PartId) -> bool {
        self.entries.contains_key(&part)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartId, &Behavior)> {
        self.entries.iter().map(|(id, b)| (*id, b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BehaviorRule> for BehaviorTable {
    fn from_iter<I: IntoIterator<Item = BehaviorRule>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|r| (r.part, r.behavior)).collect(),
        }
    }
}
