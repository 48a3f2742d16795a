//! Camera choreography: part events → eased camera moves.

pub mod director;

pub use director::{CameraDirector, CameraShot, ShotDestination, ShotRule};
