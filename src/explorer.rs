//! Explorer facade
//!
//! [`Explorer`] is what the host drives. It owns every component, turns
//! pointer events into dispatches, advances tweens once per frame and queues
//! the events the host must act on.
//!
//! ```rust,ignore
//! let mut explorer = Explorer::new(ExplorerConfig::toolbox())?;
//! scene.set_camera(explorer.initial_camera());
//! explorer.on_scene_ready(&scene);
//!
//! // per frame
//! let now = clock.tick();
//! explorer.update(&mut scene, now);
//! for event in explorer.drain_events() {
//!     // open pages, change cursor, ...
//! }
//! ```

use std::time::Duration;

use crate::animation::AnimationEngine;
use crate::camera::CameraDirector;
use crate::config::ExplorerConfig;
use crate::errors::Result;
use crate::interaction::{
    CursorIcon, DispatchContext, DispatchOutcome, Highlighter, InteractionRouter, PointerEvent,
};
use crate::parts::{ContentSlug, PartId, PartRegistry, ToggleStateStore};
use crate::scene::{CameraRig, Scene};

/// Outward notifications, drained by the host after each handler or frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent {
    /// Navigate to the content page for this slug.
    OpenContent(ContentSlug),
    CursorChanged(CursorIcon),
    SelectionChanged(PartId),
    /// A camera shot triggered by this part started.
    ShotStarted(PartId),
}

/// UI toggles carried for the host. Nothing in the core reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFlags {
    pub wireframe: bool,
    pub auto_rotate: bool,
}

pub struct Explorer {
    config: ExplorerConfig,
    router: InteractionRouter,
    registry: PartRegistry,
    toggles: ToggleStateStore,
    engine: AnimationEngine,
    director: CameraDirector,
    highlighter: Highlighter,
    view: ViewFlags,
    selected: Option<PartId>,
    ready: bool,
    events: Vec<ExplorerEvent>,
}

impl Explorer {
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        config.validate()?;

        let timings = config.timings;
        let router = InteractionRouter::new(
            config.behavior_table(),
            config.link_resolver(),
            config.motion,
            timings.toggle(),
            timings.spin(),
        );
        let director = CameraDirector::new(config.camera.shots.clone(), timings.camera());

        log::info!(
            "explorer created: {} behaviors, {} links, {} shots",
            router.table().len(),
            router.links().len(),
            director.rules().len()
        );

        Ok(Self {
            router,
            registry: PartRegistry::new(),
            toggles: ToggleStateStore::new(),
            engine: AnimationEngine::new(),
            director,
            highlighter: Highlighter::new(timings.click_highlight()),
            view: ViewFlags::default(),
            selected: None,
            ready: false,
            events: Vec::new(),
            config,
        })
    }

    /// Camera rig at the configured home view.
    #[must_use]
    pub fn initial_camera(&self) -> CameraRig {
        let home = self.config.camera.home;
        CameraRig {
            fov: self.config.camera.fov,
            ..CameraRig::new(home.position, home.target)
        }
    }

    /// Builds the part registry from the loaded model and captures rest poses.
    ///
    /// Calling it again (model reload) rebuilds the registry; open/closed
    /// flags survive.
    pub fn on_scene_ready(&mut self, scene: &Scene) {
        if self.ready {
            log::info!("scene reloaded, rebuilding part registry");
        }
        self.registry = PartRegistry::populate(scene, &self.config.parts, &self.config.groups);
        self.ready = true;
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Handles a click on a part.
    ///
    /// The part is selected and flashed on every click, whatever its
    /// behavior. The camera only reacts to clicks that changed state or
    /// moved something. Clicks on a node that is gone or not interactive
    /// are dropped before any of that.
    pub fn on_click(
        &mut self,
        scene: &mut Scene,
        event: PointerEvent,
        now: Duration,
    ) -> DispatchOutcome {
        if !scene.get_node(event.node).is_some_and(|n| n.interactive) {
            log::debug!("click on {} ignored, node is gone or not interactive", event.part);
            return DispatchOutcome::Ignored;
        }

        self.highlighter.on_click(scene, event.node, now);
        if self.selected != Some(event.part) {
            self.selected = Some(event.part);
            self.events.push(ExplorerEvent::SelectionChanged(event.part));
        }

        let mut ctx = DispatchContext {
            scene: &mut *scene,
            registry: &self.registry,
            toggles: &mut self.toggles,
            engine: &mut self.engine,
            now,
            node: Some(event.node),
        };
        let outcome = self.router.dispatch(event.part, &mut ctx);

        if let DispatchOutcome::OpenContent(slug) = &outcome {
            self.events.push(ExplorerEvent::OpenContent(slug.clone()));
        }

        if outcome.reaches_camera()
            && self
                .director
                .on_part_event(scene, event.part, outcome.resulting_open(), now)
        {
            self.events.push(ExplorerEvent::ShotStarted(event.part));
        }

        outcome
    }

    pub fn on_pointer_enter(&mut self, scene: &mut Scene, event: PointerEvent) {
        if let Some(icon) = self.highlighter.on_pointer_enter(scene, event.node) {
            self.events.push(ExplorerEvent::CursorChanged(icon));
        }
    }

    pub fn on_pointer_leave(&mut self, scene: &mut Scene, event: PointerEvent) {
        if let Some(icon) = self.highlighter.on_pointer_leave(scene, event.node) {
            self.events.push(ExplorerEvent::CursorChanged(icon));
        }
    }

    // ========================================================================
    // Frame update
    // ========================================================================

    /// Advances part tweens, the camera shot and highlight timers.
    ///
    /// Returns `true` while anything is still moving.
    pub fn update(&mut self, scene: &mut Scene, now: Duration) -> bool {
        let settled = self.engine.tick(scene, now);
        if settled > 0 {
            log::debug!("{settled} tweens settled at {now:?}");
        }
        let camera_moving = self.director.tick(scene, now);
        self.highlighter.tick(scene, now);
        !self.engine.is_idle() || camera_moving
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<ExplorerEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // View flags
    // ========================================================================

    #[must_use]
    pub fn view_flags(&self) -> ViewFlags {
        self.view
    }

    pub fn toggle_wireframe(&mut self) -> bool {
        self.view.wireframe = !self.view.wireframe;
        self.view.wireframe
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.view.auto_rotate = !self.view.auto_rotate;
        self.view.auto_rotate
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// No part tween and no camera shot in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.engine.is_idle() && self.director.active_shot().is_none()
    }

    #[must_use]
    pub fn selected_part(&self) -> Option<PartId> {
        self.selected
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    #[must_use]
    pub fn toggles(&self) -> &ToggleStateStore {
        &self.toggles
    }

    #[must_use]
    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    #[must_use]
    pub fn director(&self) -> &CameraDirector {
        &self.director
    }

    #[must_use]
    pub fn router(&self) -> &InteractionRouter {
        &self.router
    }

    #[must_use]
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }
}
