//! Toolbox Tour
//!
//! Headless walk through the toolbox preset: opens the lids, pulls the
//! drawers, opens a chit's content page and resets everything, logging each
//! event and the camera position at the end of every step.
//!
//! Run with `RUST_LOG=info cargo run --example toolbox_tour [config.json]`.

use std::time::Duration;

use anyhow::{Context, Result};

use chitbox::config::ExplorerConfig;
use chitbox::interaction::PointerEvent;
use chitbox::parts::PartId;
use chitbox::scene::{Node, Scene};
use chitbox::{Explorer, ExplorerEvent, FrameClock};

const FRAME: Duration = Duration::from_millis(16);

/// Stand-in for the loaded model: one node per declared part.
fn build_scene(config: &ExplorerConfig) -> Scene {
    let mut scene = Scene::new();
    for spec in &config.parts {
        scene.add_node(Node::new(spec.id.as_str()));
    }
    scene
}

struct Tour {
    scene: Scene,
    explorer: Explorer,
    clock: FrameClock,
}

impl Tour {
    fn click(&mut self, name: &str) -> Result<()> {
        let node = self
            .scene
            .find_by_name(name)
            .with_context(|| format!("part {name} is not in the scene"))?;
        let outcome = self
            .explorer
            .on_click(&mut self.scene, PointerEvent::new(PartId::new(name), node), self.clock.now());
        log::info!("click {name} -> {outcome:?}");
        self.report();
        Ok(())
    }

    /// Runs frames until nothing moves.
    fn play(&mut self) {
        loop {
            let now = self.clock.advance(FRAME);
            if !self.explorer.update(&mut self.scene, now) {
                break;
            }
        }
        self.report();
        if let Some(camera) = self.scene.camera() {
            log::info!(
                "  t={:>5}ms frame {} camera at {:.3}",
                self.clock.now().as_millis(),
                self.clock.frames(),
                camera.position
            );
        }
    }

    fn report(&mut self) {
        for event in self.explorer.drain_events() {
            match event {
                ExplorerEvent::OpenContent(slug) => log::info!("  navigate to {}", slug.path()),
                other => log::info!("  {other:?}"),
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ExplorerConfig::from_path(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => ExplorerConfig::toolbox(),
    };

    let mut scene = build_scene(&config);
    let mut explorer = Explorer::new(config)?;
    scene.set_camera(explorer.initial_camera());
    explorer.on_scene_ready(&scene);

    let mut tour = Tour {
        scene,
        explorer,
        clock: FrameClock::new(),
    };

    for part in ["Cube010_1", "Cube034", "Cube022", "Curve005_3", "Cube010_2"] {
        tour.click(part)?;
        tour.play();
    }

    let open = tour.explorer.toggles().open_keys().count();
    log::info!("tour finished with {open} open flags");
    Ok(())
}
