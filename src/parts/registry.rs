use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::animation::{AnimatedProperty, Motion};
use crate::parts::id::{GroupId, PartId};
use crate::scene::{NodeHandle, Scene, Transform};

/// What a part is, which decides how it moves when toggled on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Lid,
    Door,
    Drawer,
    RotatingChit,
    Disabled,
    ExternalLink,
}

impl PartKind {
    /// Motion used when the part is toggled by itself.
    #[must_use]
    pub fn motion(self) -> Option<Motion> {
        match self {
            PartKind::Lid => Some(Motion::Lid),
            PartKind::Door => Some(Motion::Door),
            PartKind::Drawer => Some(Motion::Drawer),
            PartKind::RotatingChit => Some(Motion::Spin),
            PartKind::Disabled | PartKind::ExternalLink => None,
        }
    }
}

/// Transform values captured when the scene became ready.
///
/// Every "close" drives back to these, no matter how many times the part has
/// been opened, reversed or spun since.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl RestPose {
    #[must_use]
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.position,
            rotation: transform.rotation,
        }
    }

    #[must_use]
    pub fn value(&self, property: AnimatedProperty) -> f32 {
        match property {
            AnimatedProperty::RotationX => self.rotation.x,
            AnimatedProperty::RotationY => self.rotation.y,
            AnimatedProperty::PositionZ => self.position.z,
        }
    }
}

/// A registered part.
#[derive(Debug, Clone)]
pub struct Part {
    pub id: PartId,
    pub kind: PartKind,
    /// Weak handle into the host scene.
    pub node: NodeHandle,
    /// Every group the part belongs to.
    pub groups: SmallVec<[GroupId; 2]>,
    pub rest: RestPose,
}

/// Parts that open and close together under one flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub motion: Motion,
    pub members: Vec<PartId>,
    /// Part hidden while the group is open and shown while closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_visibility: Option<PartId>,
}

impl Group {
    #[must_use]
    pub fn new(id: GroupId, motion: Motion, members: impl IntoIterator<Item = PartId>) -> Self {
        Self {
            id,
            motion,
            members: members.into_iter().collect(),
            linked_visibility: None,
        }
    }

    #[must_use]
    pub fn with_linked_visibility(mut self, part: PartId) -> Self {
        self.linked_visibility = Some(part);
        self
    }
}

/// Declared part, as listed in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSpec {
    pub id: PartId,
    pub kind: PartKind,
}

/// Part id → live handle and group memberships.
///
/// Filled once when the scene is ready. Lookups of unknown ids return `None`.
#[derive(Debug, Default)]
pub struct PartRegistry {
    parts: FxHashMap<PartId, Part>,
    groups: FxHashMap<GroupId, Group>,
}

impl PartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from a freshly loaded scene.
    ///
    /// Declared parts missing from the scene are skipped. Any other named,
    /// interactive node is registered as a [`PartKind::RotatingChit`].
    #[must_use]
    pub fn populate(scene: &Scene, parts: &[PartSpec], groups: &[Group]) -> Self {
        let mut registry = Self::new();
        for group in groups {
            registry.define_group(group.clone());
        }

        for spec in parts {
            let Some(handle) = scene.find_by_name(spec.id.as_str()) else {
                log::debug!("declared part {} not present in scene", spec.id);
                continue;
            };
            if let Some(node) = scene.get_node(handle) {
                let rest = RestPose::from_transform(&node.transform);
                registry.register(spec.id, handle, spec.kind, rest, None);
            }
        }

        for (handle, node) in scene.iter() {
            if !node.interactive || node.name.is_empty() {
                continue;
            }
            let id = PartId::new(&node.name);
            if registry.parts.contains_key(&id) {
                continue;
            }
            let rest = RestPose::from_transform(&node.transform);
            registry.register(id, handle, PartKind::RotatingChit, rest, None);
        }

        log::info!(
            "part registry ready: {} parts, {} groups",
            registry.parts.len(),
            registry.groups.len()
        );
        registry
    }

    /// Declares a group. Members registered later pick up the membership.
    pub fn define_group(&mut self, group: Group) {
        for member in &group.members {
            if let Some(part) = self.parts.get_mut(member) {
                if !part.groups.contains(&group.id) {
                    part.groups.push(group.id);
                }
            }
        }
        self.groups.insert(group.id, group);
    }

    /// Records a part. `group`, when given, adds the part to that (already
    /// declared) group in addition to the groups that list it.
    pub fn register(
        &mut self,
        id: PartId,
        node: NodeHandle,
        kind: PartKind,
        rest: RestPose,
        group: Option<GroupId>,
    ) {
        if let Some(extra) = group.and_then(|g| self.groups.get_mut(&g)) {
            if !extra.members.contains(&id) {
                extra.members.push(id);
            }
        }

        let groups = self
            .groups
            .values()
            .filter(|g| g.members.contains(&id))
            .map(|g| g.id)
            .collect();

        self.parts.insert(
            id,
            Part {
                id,
                kind,
                node,
                groups,
                rest,
            },
        );
    }

    #[must_use]
    pub fn lookup(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    #[must_use]
    pub fn handle(&self, id: PartId) -> Option<NodeHandle> {
        self.parts.get(&id).map(|p| p.node)
    }

    #[must_use]
    pub fn lookup_group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Registered members of a group, in declaration order. Members absent
    /// from the scene are left out.
    pub fn group_members(&self, id: GroupId) -> impl Iterator<Item = &Part> {
        self.groups
            .get(&id)
            .into_iter()
            .flat_map(|g| g.members.iter())
            .filter_map(|member| self.parts.get(member))
    }

    /// Handles of a group's registered members.
    #[must_use]
    pub fn group_handles(&self, id: GroupId) -> SmallVec<[NodeHandle; 8]> {
        self.group_members(id).map(|p| p.node).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
