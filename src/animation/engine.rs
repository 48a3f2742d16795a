use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::animation::binding::{AnimatedProperty, PropertyBinding};
use crate::animation::easing::Easing;
use crate::animation::tween::Tween;
use crate::scene::{NodeHandle, Scene};

/// Per-frame tween driver over scalar transform fields.
///
/// Each (node, property) pair owns at most one tween. Starting a new tween on
/// a pair replaces the old one and begins from whatever value the field holds
/// at that moment, so a reversal mid-flight is continuous.
#[derive(Debug, Default)]
pub struct AnimationEngine {
    tweens: FxHashMap<PropertyBinding, Tween>,
    started: u64,
}

impl AnimationEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the tween for `node.property` toward `target`.
    ///
    /// Returns `false` without touching anything when the node is gone.
    pub fn animate(
        &mut self,
        scene: &Scene,
        node: NodeHandle,
        property: AnimatedProperty,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Duration,
    ) -> bool {
        let Some(live) = scene.get_node(node) else {
            log::debug!("animate: node {node:?} no longer exists, skipping");
            return false;
        };

        let start = property.read(&live.transform);
        let binding = PropertyBinding::new(node, property);
        let tween = Tween::new(start, target, now, duration, easing);

        if self.tweens.insert(binding, tween).is_some() {
            log::debug!(
                "[{}] {property:?} retargeted mid-flight: {start:.4} -> {target:.4}",
                live.name
            );
        } else {
            log::debug!("[{}] {property:?}: {start:.4} -> {target:.4}", live.name);
        }
        self.started += 1;
        true
    }

    /// Advances every active tween to `now`, writing interpolated values into
    /// the scene. Finished tweens write their exact end value and are removed.
    ///
    /// Returns the number of tweens that finished this frame.
    pub fn tick(&mut self, scene: &mut Scene, now: Duration) -> usize {
        let before = self.tweens.len();

        self.tweens.retain(|binding, tween| {
            let Some(node) = scene.get_node_mut(binding.node) else {
                log::debug!("tween target {:?} vanished, dropping", binding.node);
                return false;
            };

            let finished = tween.is_finished(now);
            let value = if finished { tween.end } else { tween.sample(now) };
            binding.property.write(&mut node.transform, value);

            if finished {
                log::debug!("[{}] {:?} settled at {value:.4}", node.name, binding.property);
            }
            !finished
        });

        before - self.tweens.len()
    }

    #[must_use]
    pub fn is_animating(&self, node: NodeHandle, property: AnimatedProperty) -> bool {
        self.tweens.contains_key(&PropertyBinding::new(node, property))
    }

    /// The in-flight tween for a field, if any.
    #[must_use]
    pub fn tween(&self, node: NodeHandle, property: AnimatedProperty) -> Option<&Tween> {
        self.tweens.get(&PropertyBinding::new(node, property))
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Total number of `animate` calls accepted since creation.
    #[must_use]
    pub fn started_count(&self) -> u64 {
        self.started
    }
}
