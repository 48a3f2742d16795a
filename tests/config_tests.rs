//! Configuration Tests
//!
//! Tests for:
//! - Toolbox preset contents
//! - JSON loading, defaults and round trip
//! - Validation errors

use chitbox::config::{ALL_DRAWERS, ALL_LIDS, ExplorerConfig, Timings};
use chitbox::parts::{Behavior, GroupId, PartId, PartKind};
use chitbox::{ChitboxError, Explorer};

// ============================================================================
// Preset
// ============================================================================

#[test]
fn toolbox_preset_is_valid() {
    let config = ExplorerConfig::toolbox();
    config.validate().unwrap();
    assert_eq!(config, ExplorerConfig::default());
    assert!(Explorer::new(config).is_ok());
}

#[test]
fn toolbox_timings() {
    let timings = ExplorerConfig::toolbox().timings;
    assert_eq!(timings.toggle_ms, 800);
    assert_eq!(timings.spin_ms, 500);
    assert_eq!(timings.camera_ms, 1000);
    assert_eq!(timings.click_highlight_ms, 300);
}

#[test]
fn toolbox_drawer_group_carries_chits() {
    let config = ExplorerConfig::toolbox();
    let drawers = config
        .groups
        .iter()
        .find(|g| g.id == GroupId::new(ALL_DRAWERS))
        .unwrap();
    assert_eq!(drawers.members.len(), 28);
    assert!(drawers.members.contains(&PartId::new("Cube022_1")));
    assert!(drawers.members.contains(&PartId::new("Cube034_3")));
}

#[test]
fn toolbox_lid_group_links_cylinder() {
    let config = ExplorerConfig::toolbox();
    let lids = config
        .groups
        .iter()
        .find(|g| g.id == GroupId::new(ALL_LIDS))
        .unwrap();
    assert_eq!(lids.linked_visibility, Some(PartId::new("Cylinder001")));
}

#[test]
fn links_shadow_explicit_rules() {
    let mut config = ExplorerConfig::toolbox();
    config.behaviors.push(chitbox::parts::BehaviorRule {
        part: PartId::new("Cube012"),
        behavior: Behavior::SoloToggle,
    });
    let table = config.behavior_table();
    assert_eq!(table.resolve(PartId::new("Cube012")), &Behavior::ExternalLink);
}

#[test]
fn disabled_kind_implies_disabled_behavior() {
    let mut config = ExplorerConfig::toolbox();
    config.behaviors.retain(|r| r.part != PartId::new("Cylinder136_1"));
    let table = config.behavior_table();
    assert_eq!(table.resolve(PartId::new("Cylinder136_1")), &Behavior::Disabled);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_round_trip_preserves_preset() {
    let config = ExplorerConfig::toolbox();
    let text = config.to_json_string().unwrap();
    let parsed = ExplorerConfig::from_json_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn empty_json_uses_defaults() {
    let config = ExplorerConfig::from_json_str("{}").unwrap();
    assert_eq!(config.timings, Timings::default());
    assert!(config.parts.is_empty());
    assert!(config.camera.shots.is_empty());
    assert!((config.camera.fov - 50.0).abs() < f32::EPSILON);
}

#[test]
fn partial_timings_fill_in_defaults() {
    let config = ExplorerConfig::from_json_str(r#"{ "timings": { "toggle_ms": 1200 } }"#).unwrap();
    assert_eq!(config.timings.toggle_ms, 1200);
    assert_eq!(config.timings.spin_ms, 500);
}

#[test]
fn behavior_json_shape() {
    let text = r#"{
        "groups": [ { "id": "g", "motion": "drawer", "members": ["A"] } ],
        "behaviors": [
            { "part": "A", "behavior": { "type": "group_toggle", "group": "g" } },
            { "part": "B", "behavior": { "type": "close_all", "groups": ["g"] } },
            { "part": "C", "behavior": { "type": "free_spin" } }
        ]
    }"#;
    let config = ExplorerConfig::from_json_str(text).unwrap();
    assert_eq!(
        config.behaviors[1].behavior,
        Behavior::CloseAll {
            groups: vec![GroupId::new("g")],
            parts: Vec::new()
        }
    );
}

#[test]
fn shot_rules_from_json() {
    let text = r#"{
        "camera": {
            "shots": [
                { "part": "Lid", "destination": { "position": [1.0, 2.0, 3.0] } },
                { "part": "Box", "when_open": true,
                  "destination": { "position": [0.0, 9.0, 0.0], "target": [0.0, 1.0, 0.0] } }
            ]
        }
    }"#;
    let config = ExplorerConfig::from_json_str(text).unwrap();
    let shots = &config.camera.shots;
    assert_eq!(shots.len(), 2);
    assert_eq!(shots[0].when_open, None);
    assert_eq!(shots[0].destination.target, glam::Vec3::ZERO);
    assert_eq!(shots[1].when_open, Some(true));
}

#[test]
fn from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("chitbox-config-{}.json", std::process::id()));
    std::fs::write(&path, ExplorerConfig::toolbox().to_json_string().unwrap()).unwrap();
    let loaded = ExplorerConfig::from_path(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded.unwrap(), ExplorerConfig::toolbox());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn missing_file_is_io_error() {
    let err = ExplorerConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ChitboxError::IoError(_)));
}

#[test]
fn malformed_json_is_json_error() {
    let err = ExplorerConfig::from_json_str("{ \"parts\": [").unwrap_err();
    assert!(matches!(err, ChitboxError::JsonError(_)));
}

#[test]
fn unknown_behavior_type_is_json_error() {
    let text = r#"{ "behaviors": [ { "part": "A", "behavior": { "type": "explode" } } ] }"#;
    let err = ExplorerConfig::from_json_str(text).unwrap_err();
    assert!(matches!(err, ChitboxError::JsonError(_)));
}

#[test]
fn duplicate_part_rejected() {
    let mut config = ExplorerConfig::toolbox();
    config.parts.push(chitbox::parts::PartSpec {
        id: PartId::new("Cube034"),
        kind: PartKind::Drawer,
    });
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ChitboxError::DuplicatePart(ref name) if name == "Cube034"));
}

#[test]
fn duplicate_group_rejected() {
    let mut config = ExplorerConfig::toolbox();
    let lids = config.groups[0].clone();
    config.groups.push(lids);
    assert!(matches!(config.validate(), Err(ChitboxError::DuplicateGroup(_))));
}

#[test]
fn empty_group_rejected() {
    let text = r#"{ "groups": [ { "id": "nothing", "motion": "lid", "members": [] } ] }"#;
    let err = ExplorerConfig::from_json_str(text).unwrap_err();
    assert!(matches!(err, ChitboxError::EmptyGroup(ref g) if g == "nothing"));
}

#[test]
fn unknown_group_rejected() {
    let text = r#"{ "behaviors": [
        { "part": "Knob", "behavior": { "type": "group_toggle", "group": "ghosts" } }
    ] }"#;
    let err = ExplorerConfig::from_json_str(text).unwrap_err();
    match err {
        ChitboxError::UnknownGroup { part, group } => {
            assert_eq!(part, "Knob");
            assert_eq!(group, "ghosts");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn close_all_with_unknown_group_rejected() {
    let mut config = ExplorerConfig::toolbox();
    config.groups.retain(|g| g.id != GroupId::new(ALL_DRAWERS));
    assert!(matches!(config.validate(), Err(ChitboxError::UnknownGroup { .. })));
}

#[test]
fn external_link_without_slug_rejected() {
    let mut config = ExplorerConfig::toolbox();
    config.links.retain(|l| l.part != PartId::new("Cube005"));
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ChitboxError::MissingSlug(ref p) if p == "Cube005"));
}

#[test]
fn zero_duration_rejected() {
    let text = r#"{ "timings": { "camera_ms": 0 } }"#;
    let err = ExplorerConfig::from_json_str(text).unwrap_err();
    assert!(matches!(err, ChitboxError::ZeroDuration("camera_ms")));
    assert!(Explorer::new(ExplorerConfig {
        timings: Timings {
            spin_ms: 0,
            ..Timings::default()
        },
        ..ExplorerConfig::toolbox()
    })
    .is_err());
}
