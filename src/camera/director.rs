use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{Easing, Tween};
use crate::parts::PartId;
use crate::scene::Scene;

/// Where a shot ends: camera eye and orbit target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotDestination {
    pub position: Vec3,
    #[serde(default)]
    pub target: Vec3,
}

impl ShotDestination {
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// One row of the shot table.
///
/// `when_open` restricts the rule to events whose resulting flag matches;
/// `None` matches any event for the part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotRule {
    pub part: PartId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_open: Option<bool>,
    pub destination: ShotDestination,
}

impl ShotRule {
    #[must_use]
    pub fn new(part: PartId, destination: ShotDestination) -> Self {
        Self {
            part,
            when_open: None,
            destination,
        }
    }

    #[must_use]
    pub fn when_open(mut self, open: bool) -> Self {
        self.when_open = Some(open);
        self
    }

    fn matches(&self, part: PartId, open: Option<bool>) -> bool {
        self.part == part && self.when_open.is_none_or(|want| open == Some(want))
    }
}

/// An in-flight camera move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraShot {
    pub part: PartId,
    pub position: Tween<Vec3>,
    pub target: Tween<Vec3>,
}

impl CameraShot {
    #[must_use]
    pub fn start_time(&self) -> Duration {
        self.position.start_time
    }

    #[must_use]
    pub fn destination(&self) -> ShotDestination {
        ShotDestination::new(self.position.end, self.target.end)
    }
}

/// Camera choreography shared by every screen that embeds the 3D view.
///
/// Holds the shot table and at most one active shot. A new shot replaces the
/// active one and starts from the camera's live pose.
#[derive(Debug, Clone)]
pub struct CameraDirector {
    rules: Vec<ShotRule>,
    duration: Duration,
    easing: Easing,
    active: Option<CameraShot>,
}

impl CameraDirector {
    #[must_use]
    pub fn new(rules: Vec<ShotRule>, duration: Duration) -> Self {
        Self {
            rules,
            duration,
            easing: Easing::EaseInOutQuad,
            active: None,
        }
    }

    /// First matching destination for a part event.
    #[must_use]
    pub fn destination_for(&self, part: PartId, open: Option<bool>) -> Option<ShotDestination> {
        self.rules
            .iter()
            .find(|rule| rule.matches(part, open))
            .map(|rule| rule.destination)
    }

    /// Reacts to a resolved click. Returns `true` if a shot started.
    pub fn on_part_event(
        &mut self,
        scene: &Scene,
        part: PartId,
        open: Option<bool>,
        now: Duration,
    ) -> bool {
        match self.destination_for(part, open) {
            Some(destination) => self.shoot(scene, part, destination, now),
            None => false,
        }
    }

    /// Starts a shot toward `destination`, preempting any active one.
    ///
    /// Dropped (returns `false`) when the scene has no camera attached yet.
    pub fn shoot(
        &mut self,
        scene: &Scene,
        part: PartId,
        destination: ShotDestination,
        now: Duration,
    ) -> bool {
        let Some(camera) = scene.camera() else {
            log::warn!("camera not available, dropping shot for {part}");
            return false;
        };

        if let Some(previous) = &self.active {
            log::debug!("shot for {} preempted by {part}", previous.part);
        }

        self.active = Some(CameraShot {
            part,
            position: Tween::new(
                camera.position,
                destination.position,
                now,
                self.duration,
                self.easing,
            ),
            target: Tween::new(camera.target, destination.target, now, self.duration, self.easing),
        });
        log::info!(
            "camera shot for {part}: {:?} -> {:?}",
            camera.position,
            destination.position
        );
        true
    }

    /// Advances the active shot. Returns `true` while a shot is still running.
    pub fn tick(&mut self, scene: &mut Scene, now: Duration) -> bool {
        let Some(shot) = self.active else {
            return false;
        };
        let Some(camera) = scene.camera_mut() else {
            log::warn!("camera detached mid-shot, abandoning shot for {}", shot.part);
            self.active = None;
            return false;
        };

        if shot.position.is_finished(now) {
            camera.position = shot.position.end;
            camera.target = shot.target.end;
            self.active = None;
            log::debug!("camera shot for {} complete at {:?}", shot.part, camera.position);
            return false;
        }

        camera.position = shot.position.sample(now);
        camera.target = shot.target.sample(now);
        true
    }

    #[must_use]
    pub fn active_shot(&self) -> Option<&CameraShot> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn rules(&self) -> &[ShotRule] {
        &self.rules
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
