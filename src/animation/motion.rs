//! Open/close and spin motion rules.
//!
//! A [`Motion`] turns a part's rest pose plus a desired open/closed state into
//! the (property, target) pair the engine should tween. The closed target is
//! always the rest value captured when the scene loaded.

use std::f32::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::animation::binding::AnimatedProperty;
use crate::parts::RestPose;

/// How a part moves when toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Hinged lid: swings to a fixed absolute angle about X.
    Lid,
    /// Hinged door: swings forward by a fixed angle about X, relative to rest.
    Door,
    /// Drawer: slides along Z by a fixed offset from rest.
    Drawer,
    /// Yaw increment; ignores open/closed state.
    Spin,
}

impl Motion {
    #[must_use]
    pub fn property(self) -> AnimatedProperty {
        match self {
            Motion::Lid | Motion::Door => AnimatedProperty::RotationX,
            Motion::Drawer => AnimatedProperty::PositionZ,
            Motion::Spin => AnimatedProperty::RotationY,
        }
    }

    /// Whether the motion is driven by a boolean open/closed flag.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        !matches!(self, Motion::Spin)
    }
}

/// Geometry of every motion kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    /// Absolute X rotation of an open lid, radians.
    pub lid_open_angle: f32,
    /// Forward swing of an open door, radians.
    pub door_swing: f32,
    /// Z offset of an open drawer, scene units.
    pub drawer_slide: f32,
    /// Yaw added per spin, radians.
    pub spin_step: f32,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            lid_open_angle: -2.042_035_2,
            door_swing: PI * 0.65,
            drawer_slide: 16.0,
            spin_step: FRAC_PI_4,
        }
    }
}

impl MotionProfile {
    /// Target value for a toggle motion.
    ///
    /// For [`Motion::Spin`] this returns the rest yaw when closed and one step
    /// past it when open; the router uses [`MotionProfile::spin_target`] for
    /// live spins instead.
    #[must_use]
    pub fn toggle_target(&self, motion: Motion, rest: &RestPose, open: bool) -> f32 {
        let closed = rest.value(motion.property());
        if !open {
            return closed;
        }
        match motion {
            Motion::Lid => self.lid_open_angle,
            Motion::Door => closed + self.door_swing,
            Motion::Drawer => closed + self.drawer_slide,
            Motion::Spin => closed + self.spin_step,
        }
    }

    /// Free-spin target from the live yaw. Accumulates without bound.
    #[inline]
    #[must_use]
    pub fn spin_target(&self, current: f32) -> f32 {
        current + self.spin_step
    }
}
