use serde::{Deserialize, Serialize};

use crate::scene::{NodeHandle, Transform};

/// The scalar transform field a tween writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedProperty {
    RotationX, // Lid and door hinges
    RotationY, // Free spin
    PositionZ, // Drawer slide
}

impl AnimatedProperty {
    #[inline]
    #[must_use]
    pub fn read(self, transform: &Transform) -> f32 {
        match self {
            AnimatedProperty::RotationX => transform.rotation.x,
            AnimatedProperty::RotationY => transform.rotation.y,
            AnimatedProperty::PositionZ => transform.position.z,
        }
    }

    #[inline]
    pub fn write(self, transform: &mut Transform, value: f32) {
        match self {
            AnimatedProperty::RotationX => transform.rotation.x = value,
            AnimatedProperty::RotationY => transform.rotation.y = value,
            AnimatedProperty::PositionZ => transform.position.z = value,
        }
        transform.mark_dirty();
    }
}

/// Identifies the single field a tween owns. At most one tween per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyBinding {
    pub node: NodeHandle,
    pub property: AnimatedProperty,
}

impl PropertyBinding {
    #[must_use]
    pub fn new(node: NodeHandle, property: AnimatedProperty) -> Self {
        Self { node, property }
    }
}
