use serde::{Deserialize, Serialize};

/// Easing curve applied to normalised tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out. Used for every part tween and camera shot.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Maps progress in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Input outside the range is clamped first.
    #[inline]
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseInOutQuad => ease_in_out_quad(p),
        }
    }
}

/// `2p²` below the midpoint, `1 - (-2p + 2)² / 2` from it on.
#[inline]
#[must_use]
pub fn ease_in_out_quad(p: f32) -> f32 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        let q = -2.0 * p + 2.0;
        1.0 - q * q / 2.0
    }
}
