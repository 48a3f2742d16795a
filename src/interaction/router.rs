use std::time::Duration;

use crate::animation::{AnimatedProperty, AnimationEngine, Easing, Motion, MotionProfile};
use crate::parts::{
    Behavior, BehaviorTable, ChitLinkResolver, ContentSlug, GroupId, Part, PartId, PartRegistry,
    StateKey, ToggleStateStore,
};
use crate::scene::{NodeHandle, Scene};

/// Everything a dispatch may touch, borrowed for the duration of one click.
pub struct DispatchContext<'a> {
    pub scene: &'a mut Scene,
    pub registry: &'a PartRegistry,
    pub toggles: &'a mut ToggleStateStore,
    pub engine: &'a mut AnimationEngine,
    pub now: Duration,
    /// Handle carried by the pointer event, used when the part is not
    /// registered.
    pub node: Option<NodeHandle>,
}

/// Result of routing one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The navigation collaborator should open this content.
    OpenContent(ContentSlug),
    /// Nothing happened (disabled part, or nothing to move).
    Ignored,
    /// A flag was flipped and its parts set in motion.
    Toggled { key: StateKey, open: bool },
    /// A stateless spin was started.
    Spun,
    /// A close-all reset ran.
    ClosedAll,
}

impl DispatchOutcome {
    /// The flag value handed to the camera director.
    #[must_use]
    pub fn resulting_open(&self) -> Option<bool> {
        match self {
            DispatchOutcome::Toggled { open, .. } => Some(*open),
            DispatchOutcome::ClosedAll => Some(false),
            _ => None,
        }
    }

    /// Whether the click should reach the camera director at all.
    #[must_use]
    pub fn reaches_camera(&self) -> bool {
        !matches!(self, DispatchOutcome::OpenContent(_) | DispatchOutcome::Ignored)
    }
}

/// Classifies clicks through the behavior table and applies them.
///
/// Inside one dispatch the flag is always written before any tween starts,
/// and every tween started by one dispatch shares the same start time.
#[derive(Debug, Clone)]
pub struct InteractionRouter {
    table: BehaviorTable,
    links: ChitLinkResolver,
    motion: MotionProfile,
    toggle_duration: Duration,
    spin_duration: Duration,
    easing: Easing,
}

impl InteractionRouter {
    #[must_use]
    pub fn new(
        table: BehaviorTable,
        links: ChitLinkResolver,
        motion: MotionProfile,
        toggle_duration: Duration,
        spin_duration: Duration,
    ) -> Self {
        Self {
            table,
            links,
            motion,
            toggle_duration,
            spin_duration,
            easing: Easing::EaseInOutQuad,
        }
    }

    #[must_use]
    pub fn table(&self) -> &BehaviorTable {
        &self.table
    }

    #[must_use]
    pub fn links(&self) -> &ChitLinkResolver {
        &self.links
    }

    #[must_use]
    pub fn motion(&self) -> &MotionProfile {
        &self.motion
    }

    pub fn dispatch(&self, part: PartId, ctx: &mut DispatchContext<'_>) -> DispatchOutcome {
        let registry = ctx.registry;

        match self.table.resolve(part) {
            Behavior::ExternalLink => match self.links.resolve(part) {
                Some(slug) => {
                    log::info!("{part} opens content {slug}");
                    DispatchOutcome::OpenContent(slug.clone())
                }
                None => {
                    log::warn!("{part} is an external link without a slug");
                    DispatchOutcome::Ignored
                }
            },

            Behavior::Disabled => {
                log::debug!("{part} is disabled, ignoring click");
                DispatchOutcome::Ignored
            }

            Behavior::GroupToggle { group } => {
                let open = ctx.toggles.flip(*group);
                self.drive_group(ctx, *group, open);
                DispatchOutcome::Toggled {
                    key: StateKey::Group(*group),
                    open,
                }
            }

            Behavior::SoloToggle => {
                let open = ctx.toggles.flip(part);
                match registry.lookup(part) {
                    Some(entry) => self.drive_part(ctx, entry, open),
                    None => log::debug!("{part} is not registered, nothing to move"),
                }
                DispatchOutcome::Toggled {
                    key: StateKey::Part(part),
                    open,
                }
            }

            Behavior::PairToggle { pair } => {
                let open = ctx.toggles.flip(*pair);
                for member in registry.group_members(*pair) {
                    self.spin(ctx, member.node);
                }
                DispatchOutcome::Toggled {
                    key: StateKey::Group(*pair),
                    open,
                }
            }

            Behavior::CloseAll { groups, parts } => {
                for group in groups {
                    ctx.toggles.set(*group, false);
                }
                for solo in parts {
                    ctx.toggles.set(*solo, false);
                }
                for group in groups {
                    self.drive_group(ctx, *group, false);
                }
                for solo in parts {
                    let Some(entry) = registry.lookup(*solo) else {
                        continue;
                    };
                    if !entry.groups.iter().any(|g| groups.contains(g)) {
                        self.drive_part(ctx, entry, false);
                    }
                }
                DispatchOutcome::ClosedAll
            }

            Behavior::FreeSpin => {
                let node = ctx.node.or_else(|| registry.handle(part));
                if node.is_some_and(|n| self.spin(ctx, n)) {
                    DispatchOutcome::Spun
                } else {
                    log::debug!("{part} has no live node to spin");
                    DispatchOutcome::Ignored
                }
            }
        }
    }

    /// Moves every registered member of `group` toward `open`, in lockstep,
    /// and updates the group's linked visibility.
    fn drive_group(&self, ctx: &mut DispatchContext<'_>, group: GroupId, open: bool) {
        let registry = ctx.registry;
        let Some(def) = registry.lookup_group(group) else {
            log::debug!("group {group} has no registered members, nothing to move");
            return;
        };

        for member in registry.group_members(group) {
            self.drive(ctx, member, def.motion, open);
        }

        if let Some(linked) = def.linked_visibility {
            match registry.handle(linked).and_then(|h| ctx.scene.get_node_mut(h)) {
                Some(node) => node.visible = !open,
                None => log::debug!("linked part {linked} of {group} not in scene"),
            }
        }
    }

    /// Moves one part with the motion of its own kind.
    fn drive_part(&self, ctx: &mut DispatchContext<'_>, part: &Part, open: bool) {
        match part.kind.motion() {
            Some(motion) => self.drive(ctx, part, motion, open),
            None => log::debug!("{} has no motion for its kind {:?}", part.id, part.kind),
        }
    }

    fn drive(&self, ctx: &mut DispatchContext<'_>, part: &Part, motion: Motion, open: bool) {
        if motion == Motion::Spin {
            self.spin(ctx, part.node);
            return;
        }
        let target = self.motion.toggle_target(motion, &part.rest, open);
        ctx.engine.animate(
            ctx.scene,
            part.node,
            motion.property(),
            target,
            self.toggle_duration,
            self.easing,
            ctx.now,
        );
    }

    /// One free-spin step from the live yaw.
    fn spin(&self, ctx: &mut DispatchContext<'_>, node: NodeHandle) -> bool {
        let Some(live) = ctx.scene.get_node(node) else {
            return false;
        };
        let property = AnimatedProperty::RotationY;
        let target = self.motion.spin_target(property.read(&live.transform));
        ctx.engine.animate(
            ctx.scene,
            node,
            property,
            target,
            self.spin_duration,
            self.easing,
            ctx.now,
        )
    }
}
