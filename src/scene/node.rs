use glam::Vec3;

use crate::scene::transform::Transform;

/// Emissive overlay written by the highlighter.
///
/// The renderer owns the actual material; it reads this slot and applies it
/// as the material's emissive colour and intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissive {
    /// Linear RGB in `[0, 1]`.
    pub color: Vec3,
    pub intensity: f32,
}

impl Emissive {
    pub const NONE: Self = Self {
        color: Vec3::ZERO,
        intensity: 0.0,
    };

    /// Builds an emissive from a `0xRRGGBB` colour.
    #[must_use]
    pub const fn from_hex(hex: u32, intensity: f32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self {
            color: Vec3::new(r, g, b),
            intensity,
        }
    }
}

impl Default for Emissive {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mirrored scene node.
///
/// Holds only what the orchestration layer reads or writes; geometry and
/// materials stay with the renderer.
#[derive(Debug, Clone)]
pub struct Node {
    /// Mesh name from the loaded model; doubles as the part id.
    pub name: String,
    pub transform: Transform,
    /// Visibility flag, toggled for linked secondary parts.
    pub visible: bool,
    /// Whether pointer events on this node are routed at all.
    pub interactive: bool,
    pub emissive: Emissive,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            visible: true,
            interactive: true,
            emissive: Emissive::NONE,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
