use glam::Vec3;

/// Live camera and orbit-controls state.
///
/// `position` is the camera eye, `target` the orbit centre the controls look
/// at. The camera director tweens both; the host copies them back into its
/// camera and controls after each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl CameraRig {
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            fov: 50.0,
        }
    }
}
