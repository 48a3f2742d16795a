//! Camera Director Tests
//!
//! Tests for:
//! - Shot table lookup with open/closed conditions
//! - Shot interpolation and completion
//! - Preemption from the live camera pose
//! - Degraded mode without a camera

mod common;

use glam::Vec3;

use chitbox::camera::{CameraDirector, ShotDestination, ShotRule};
use chitbox::config::{HOME_VIEW, LID_VIEW, SIDE_VIEW, TOP_VIEW};
use chitbox::parts::PartId;
use chitbox::scene::{CameraRig, Scene};
use chitbox::ExplorerEvent;

use common::{Toolbox, approx, ms, vec3_approx};

fn director() -> CameraDirector {
    let drawer = PartId::new("Drawer");
    CameraDirector::new(
        vec![
            ShotRule::new(drawer, ShotDestination::new(TOP_VIEW, Vec3::ZERO)).when_open(true),
            ShotRule::new(drawer, ShotDestination::new(SIDE_VIEW, Vec3::ZERO)).when_open(false),
            ShotRule::new(PartId::new("Lid"), ShotDestination::new(LID_VIEW, Vec3::ZERO)),
        ],
        ms(1000),
    )
}

fn scene_with_camera() -> Scene {
    let mut scene = Scene::new();
    scene.set_camera(CameraRig::new(HOME_VIEW, Vec3::ZERO));
    scene
}

// ============================================================================
// Shot table
// ============================================================================

#[test]
fn destination_honours_open_condition() {
    let director = director();
    let drawer = PartId::new("Drawer");
    assert_eq!(
        director.destination_for(drawer, Some(true)).map(|d| d.position),
        Some(TOP_VIEW)
    );
    assert_eq!(
        director.destination_for(drawer, Some(false)).map(|d| d.position),
        Some(SIDE_VIEW)
    );
    assert!(director.destination_for(drawer, None).is_none());
}

#[test]
fn unconditional_rule_matches_any_state() {
    let director = director();
    let lid = PartId::new("Lid");
    for open in [None, Some(true), Some(false)] {
        assert_eq!(director.destination_for(lid, open).map(|d| d.position), Some(LID_VIEW));
    }
    assert!(director.destination_for(PartId::new("Other"), Some(true)).is_none());
}

// ============================================================================
// Shot playback
// ============================================================================

#[test]
fn shot_eases_to_destination() {
    let mut scene = scene_with_camera();
    let mut director = director();

    assert!(director.on_part_event(&scene, PartId::new("Lid"), Some(true), ms(0)));
    assert!(director.tick(&mut scene, ms(500)));
    let mid = scene.camera().unwrap().position;
    assert!(vec3_approx(mid, (HOME_VIEW + LID_VIEW) * 0.5), "midpoint was {mid}");

    assert!(!director.tick(&mut scene, ms(1000)));
    assert_eq!(scene.camera().unwrap().position, LID_VIEW);
    assert_eq!(scene.camera().unwrap().target, Vec3::ZERO);
    assert!(director.active_shot().is_none());
}

#[test]
fn shot_moves_target_too() {
    let mut scene = scene_with_camera();
    let mut director = CameraDirector::new(Vec::new(), ms(1000));
    let target = Vec3::new(0.0, 1.0, 0.0);

    director.shoot(&scene, PartId::new("Any"), ShotDestination::new(LID_VIEW, target), ms(0));
    director.tick(&mut scene, ms(2000));
    assert_eq!(scene.camera().unwrap().target, target);
}

#[test]
fn preemption_starts_from_live_pose() {
    let mut scene = scene_with_camera();
    let mut director = director();

    director.on_part_event(&scene, PartId::new("Drawer"), Some(true), ms(0));
    director.tick(&mut scene, ms(300));
    let live = scene.camera().unwrap().position;
    assert!(!vec3_approx(live, HOME_VIEW));

    assert!(director.on_part_event(&scene, PartId::new("Lid"), None, ms(300)));
    let shot = director.active_shot().unwrap();
    assert_eq!(shot.part, PartId::new("Lid"));
    assert_eq!(shot.position.start, live);
    assert_eq!(shot.start_time(), ms(300));

    // First frame of the new shot does not jump.
    director.tick(&mut scene, ms(300));
    assert!(vec3_approx(scene.camera().unwrap().position, live));

    director.tick(&mut scene, ms(1300));
    assert_eq!(scene.camera().unwrap().position, LID_VIEW);
}

#[test]
fn missing_camera_drops_shot() {
    let mut scene = Scene::new();
    let mut director = director();

    assert!(!director.on_part_event(&scene, PartId::new("Lid"), None, ms(0)));
    assert!(director.active_shot().is_none());
    assert!(!director.tick(&mut scene, ms(500)));
    assert!(scene.camera().is_none());
}

#[test]
fn detached_camera_abandons_shot() {
    let mut scene = scene_with_camera();
    let mut director = director();
    director.on_part_event(&scene, PartId::new("Lid"), None, ms(0));

    scene.clear_camera();
    assert!(!director.tick(&mut scene, ms(100)));
    assert!(director.active_shot().is_none());
}

// ============================================================================
// Through the explorer
// ============================================================================

#[test]
fn initial_camera_is_home_view() {
    let tb = Toolbox::new();
    let camera = tb.scene.camera().unwrap();
    assert_eq!(camera.position, HOME_VIEW);
    assert_eq!(camera.target, Vec3::ZERO);
    assert!(approx(camera.fov, 50.0));
}

#[test]
fn links_and_disabled_parts_never_move_camera() {
    let mut tb = Toolbox::new();
    tb.click("Cube011", ms(0));
    tb.click("Cylinder136_1", ms(0));
    assert!(tb.explorer.director().active_shot().is_none());
    assert!(
        !tb.explorer
            .drain_events()
            .iter()
            .any(|e| matches!(e, ExplorerEvent::ShotStarted(_)))
    );
}

#[test]
fn close_all_returns_camera_home() {
    let mut tb = Toolbox::new();
    tb.click("Cube010_1", ms(0));
    tb.settle(ms(1000));
    assert_eq!(tb.scene.camera().unwrap().position, LID_VIEW);

    tb.click("Cube010_2", ms(1500));
    tb.settle(ms(2500));
    assert_eq!(tb.scene.camera().unwrap().position, HOME_VIEW);
    assert!(tb.explorer.is_idle());
}

#[test]
fn door_click_preempts_running_drawer_shot() {
    let mut tb = Toolbox::new();
    tb.click("Cube034", ms(0));
    tb.settle(ms(500));
    let live = tb.scene.camera().unwrap().position;

    tb.click("Curve001_1", ms(500));
    let shot = tb.explorer.director().active_shot().unwrap();
    assert_eq!(shot.part, PartId::new("Curve001_1"));
    assert!(vec3_approx(shot.position.start, live));
    assert_eq!(shot.destination().position, SIDE_VIEW);
}
