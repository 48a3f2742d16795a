//! Shared fixtures: a stand-in toolbox scene and a driven explorer.

#![allow(dead_code)]

use std::time::Duration;

use glam::Vec3;

use chitbox::config::ExplorerConfig;
use chitbox::interaction::{DispatchOutcome, PointerEvent};
use chitbox::parts::{PartId, PartKind};
use chitbox::scene::{Node, NodeHandle, Scene, Transform};
use chitbox::Explorer;

pub const EPSILON: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Rest transform per part kind, offset from zero so relative motions show.
fn rest_transform(kind: PartKind) -> Transform {
    match kind {
        PartKind::Door => Transform::from_position_rotation(Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0)),
        PartKind::Drawer => Transform::from_position_rotation(Vec3::new(0.0, 0.0, 0.5), Vec3::ZERO),
        PartKind::ExternalLink => {
            Transform::from_position_rotation(Vec3::new(0.0, 0.0, 0.25), Vec3::new(0.0, 0.3, 0.0))
        }
        _ => Transform::new(),
    }
}

/// One node per declared part, plus an undeclared interactive mesh
/// (`Curve005`) and a non-interactive backdrop.
pub fn scene_for(config: &ExplorerConfig) -> Scene {
    let mut scene = Scene::new();
    for spec in &config.parts {
        scene.add_node(Node::new(spec.id.as_str()).with_transform(rest_transform(spec.kind)));
    }
    scene.add_node(Node::new("Curve005"));
    let mut backdrop = Node::new("Backdrop");
    backdrop.interactive = false;
    scene.add_node(backdrop);
    scene
}

/// Toolbox scene with the camera placed and the registry built.
pub struct Toolbox {
    pub scene: Scene,
    pub explorer: Explorer,
}

impl Toolbox {
    pub fn new() -> Self {
        Self::with_config(ExplorerConfig::toolbox())
    }

    pub fn with_config(config: ExplorerConfig) -> Self {
        let mut scene = scene_for(&config);
        let mut explorer = Explorer::new(config).expect("valid config");
        scene.set_camera(explorer.initial_camera());
        explorer.on_scene_ready(&scene);
        Self { scene, explorer }
    }

    pub fn handle(&self, name: &str) -> NodeHandle {
        self.scene
            .find_by_name(name)
            .unwrap_or_else(|| panic!("no node named {name}"))
    }

    pub fn node(&self, name: &str) -> &Node {
        self.scene.get_node(self.handle(name)).expect("live node")
    }

    pub fn event(&self, name: &str) -> PointerEvent {
        PointerEvent::new(PartId::new(name), self.handle(name))
    }

    pub fn click(&mut self, name: &str, now: Duration) -> DispatchOutcome {
        let event = self.event(name);
        self.explorer.on_click(&mut self.scene, event, now)
    }

    /// Single update at `now`; enough to settle anything that ends by then.
    pub fn settle(&mut self, now: Duration) {
        self.explorer.update(&mut self.scene, now);
    }

    /// Frame loop from `from` to `to` inclusive at ~60 Hz, calling `check`
    /// after each update.
    pub fn run_frames(&mut self, from: Duration, to: Duration, mut check: impl FnMut(&Self)) {
        let mut now = from;
        loop {
            self.explorer.update(&mut self.scene, now);
            check(self);
            if now >= to {
                break;
            }
            now = (now + ms(16)).min(to);
        }
    }
}
