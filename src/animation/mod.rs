//! Procedural tween animation.
//!
//! - [`AnimationEngine`]: one tween per (node, property), advanced once per frame
//! - [`Tween`]: start/end/time/easing record, shared with camera shots
//! - [`Easing`]: quadratic ease-in-out curve
//! - [`Motion`] / [`MotionProfile`]: open/close and spin targets from a rest pose

pub mod binding;
pub mod easing;
pub mod engine;
pub mod motion;
pub mod tween;
pub mod values;

pub use binding::{AnimatedProperty, PropertyBinding};
pub use easing::{Easing, ease_in_out_quad};
pub use engine::AnimationEngine;
pub use motion::{Motion, MotionProfile};
pub use tween::{Tween, progress_at};
pub use values::Interpolatable;
