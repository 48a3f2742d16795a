use glam::Vec3;

/// Transform component
///
/// Position, Euler rotation and scale of a scene node, mirrored from the host
/// renderer. Rotation is stored as XYZ Euler angles because tweens drive one
/// axis at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,

    dirty: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            dirty: true,
        }
    }

    #[must_use]
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            ..Self::new()
        }
    }

    /// Flags the transform so the host re-uploads it.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
