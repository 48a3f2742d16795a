//! Explorer configuration
//!
//! Everything that varies between products lives here as data: which meshes
//! are parts, how they group, what a click on each does, which clicks move
//! the camera, and the motion and timing constants. [`ExplorerConfig::toolbox`]
//! is the built-in preset for the chit toolbox model; other products load a
//! JSON file with the same shape.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::animation::{Motion, MotionProfile};
use crate::camera::{ShotDestination, ShotRule};
use crate::errors::{ChitboxError, Result};
use crate::parts::{
    Behavior, BehaviorRule, BehaviorTable, ChitLinkResolver, ContentSlug, Group, GroupId, PartId,
    PartKind, PartSpec,
};
use crate::utils::time::millis;

/// Durations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Open/close tween length.
    pub toggle_ms: u64,
    /// Free-spin tween length.
    pub spin_ms: u64,
    /// Camera shot length.
    pub camera_ms: u64,
    /// How long a click flash stays lit.
    pub click_highlight_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toggle_ms: 800,
            spin_ms: 500,
            camera_ms: 1000,
            click_highlight_ms: 300,
        }
    }
}

impl Timings {
    #[must_use]
    pub fn toggle(&self) -> Duration {
        millis(self.toggle_ms)
    }

    #[must_use]
    pub fn spin(&self) -> Duration {
        millis(self.spin_ms)
    }

    #[must_use]
    pub fn camera(&self) -> Duration {
        millis(self.camera_ms)
    }

    #[must_use]
    pub fn click_highlight(&self) -> Duration {
        millis(self.click_highlight_ms)
    }
}

/// Initial camera placement and the shot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub home: ShotDestination,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub shots: Vec<ShotRule>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            home: ShotDestination::new(HOME_VIEW, Vec3::ZERO),
            fov: 50.0,
            shots: Vec::new(),
        }
    }
}

/// Part → content slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRule {
    pub part: PartId,
    pub slug: ContentSlug,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub motion: MotionProfile,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub parts: Vec<PartSpec>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub behaviors: Vec<BehaviorRule>,
    #[serde(default)]
    pub links: Vec<LinkRule>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::toolbox()
    }
}

// ============================================================================
// Toolbox preset
// ============================================================================

pub const HOME_VIEW: Vec3 = Vec3::new(-0.066, 4.303, 8.925);
pub const LID_VIEW: Vec3 = Vec3::new(0.162, 2.847, 9.490);
pub const SIDE_VIEW: Vec3 = Vec3::new(-0.328, 1.367, 6.776);
pub const TOP_VIEW: Vec3 = Vec3::new(0.048, 7.626, 3.445);

pub const ALL_LIDS: &str = "allLids";
pub const ALL_DRAWERS: &str = "allDrawers";
pub const ALL_CURVES: &str = "allCurves";
pub const ALL_CURVE001: &str = "allCurve001";

const LIDS: [&str; 3] = ["Cube010", "Cube010_1", "Cube010_2"];
const FRONT_DOORS: [&str; 3] = ["Curve005_1", "Curve005_2", "Curve005_3"];
const SIDE_DOORS: [&str; 3] = ["Curve001", "Curve001_1", "Curve001_2"];
const DRAWERS: [&str; 4] = ["Cube034", "Cube034_2", "Cube034_3", "Cube034_1"];

/// Chits riding in the drawers, with their content slugs.
const CHITS: [(&str, &str); 24] = [
    ("Cube000", "cube000"),
    ("Cube001", "cube001"),
    ("Cube002", "cube002"),
    ("Cube003", "cube003"),
    ("Cube004", "cube004"),
    ("Cube005", "cube005"),
    ("Cube006", "cube006"),
    ("Cube007", "cube007"),
    ("Cube011", "stories"),
    ("Cube011_1", "stories"),
    ("Cube012", "resistance"),
    ("Cube012_1", "resistance"),
    ("Cube013", "core-beliefs"),
    ("Cube013_1", "core-beliefs"),
    ("Cube014", "readiness"),
    ("Cube014_1", "readiness"),
    ("Cube023", "values"),
    ("Cube023_1", "values"),
    ("Cube022", "wounds"),
    ("Cube022_1", "wounds"),
    ("Cube021", "self-talk"),
    ("Cube021_1", "self-talk"),
    ("Cube015", "subconsciousness"),
    ("Cube015_1", "subconsciousness"),
];

fn rule(part: &str, behavior: Behavior) -> BehaviorRule {
    BehaviorRule {
        part: PartId::new(part),
        behavior,
    }
}

fn part_ids(names: &[&str]) -> Vec<PartId> {
    names.iter().map(|n| PartId::new(n)).collect()
}

fn specs(names: &[&str], kind: PartKind) -> impl Iterator<Item = PartSpec> {
    names.iter().map(move |name| PartSpec {
        id: PartId::new(name),
        kind,
    })
}

impl ExplorerConfig {
    /// Preset for the chit toolbox model.
    #[must_use]
    pub fn toolbox() -> Self {
        let chit_names: Vec<&str> = CHITS.iter().map(|(name, _)| *name).collect();

        let mut parts: Vec<PartSpec> = Vec::new();
        parts.extend(specs(&LIDS, PartKind::Lid));
        parts.extend(specs(&FRONT_DOORS, PartKind::Door));
        parts.extend(specs(&SIDE_DOORS, PartKind::Door));
        parts.extend(specs(&DRAWERS, PartKind::Drawer));
        parts.extend(specs(&chit_names, PartKind::ExternalLink));
        parts.extend(specs(&["Cylinder001"], PartKind::RotatingChit));
        parts.extend(specs(&["Cylinder136_1"], PartKind::Disabled));

        let groups = vec![
            Group::new(GroupId::new(ALL_LIDS), Motion::Lid, part_ids(&LIDS))
                .with_linked_visibility(PartId::new("Cylinder001")),
            Group::new(GroupId::new(ALL_CURVES), Motion::Door, part_ids(&FRONT_DOORS)),
            Group::new(GroupId::new(ALL_CURVE001), Motion::Door, part_ids(&SIDE_DOORS)),
            Group::new(
                GroupId::new(ALL_DRAWERS),
                Motion::Drawer,
                part_ids(&DRAWERS).into_iter().chain(part_ids(&chit_names)),
            ),
        ];

        let group = |name: &str| GroupId::new(name);
        let behaviors = vec![
            rule("Cube010_1", Behavior::GroupToggle { group: group(ALL_LIDS) }),
            rule(
                "Cube010_2",
                Behavior::CloseAll {
                    groups: vec![
                        group(ALL_LIDS),
                        group(ALL_DRAWERS),
                        group(ALL_CURVE001),
                        group(ALL_CURVES),
                    ],
                    parts: part_ids(&LIDS),
                },
            ),
            rule("Cube010", Behavior::SoloToggle),
            rule("Curve005_2", Behavior::GroupToggle { group: group(ALL_CURVES) }),
            rule("Curve005_1", Behavior::SoloToggle),
            rule("Curve005_3", Behavior::SoloToggle),
            rule("Cube034", Behavior::GroupToggle { group: group(ALL_DRAWERS) }),
            rule("Cube034_1", Behavior::GroupToggle { group: group(ALL_DRAWERS) }),
            rule("Curve001_1", Behavior::GroupToggle { group: group(ALL_CURVE001) }),
            rule("Cylinder136_1", Behavior::Disabled),
        ];

        let links = CHITS
            .iter()
            .map(|(part, slug)| LinkRule {
                part: PartId::new(part),
                slug: ContentSlug::new(*slug),
            })
            .collect();

        let origin = Vec3::ZERO;
        let shots = vec![
            ShotRule::new(PartId::new("Cube010_1"), ShotDestination::new(LID_VIEW, origin)),
            ShotRule::new(PartId::new("Curve001_1"), ShotDestination::new(SIDE_VIEW, origin)),
            ShotRule::new(PartId::new("Cube034"), ShotDestination::new(TOP_VIEW, origin)).when_open(true),
            ShotRule::new(PartId::new("Cube034"), ShotDestination::new(SIDE_VIEW, origin)).when_open(false),
            ShotRule::new(PartId::new("Cube034_1"), ShotDestination::new(TOP_VIEW, origin)).when_open(true),
            ShotRule::new(PartId::new("Cube034_1"), ShotDestination::new(SIDE_VIEW, origin)).when_open(false),
            ShotRule::new(PartId::new("Cube010_2"), ShotDestination::new(HOME_VIEW, origin)),
        ];

        Self {
            timings: Timings::default(),
            motion: MotionProfile::default(),
            camera: CameraConfig {
                shots,
                ..CameraConfig::default()
            },
            parts,
            groups,
            behaviors,
            links,
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("loading explorer config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks internal consistency.
    pub fn validate(&self) -> Result<()> {
        for (name, ms) in [
            ("toggle_ms", self.timings.toggle_ms),
            ("spin_ms", self.timings.spin_ms),
            ("camera_ms", self.timings.camera_ms),
            ("click_highlight_ms", self.timings.click_highlight_ms),
        ] {
            if ms == 0 {
                return Err(ChitboxError::ZeroDuration(name));
            }
        }

        let mut seen_parts = FxHashSet::default();
        for spec in &self.parts {
            if !seen_parts.insert(spec.id) {
                return Err(ChitboxError::DuplicatePart(spec.id.to_string()));
            }
        }

        let mut seen_groups = FxHashSet::default();
        for group in &self.groups {
            if !seen_groups.insert(group.id) {
                return Err(ChitboxError::DuplicateGroup(group.id.to_string()));
            }
            if group.members.is_empty() {
                return Err(ChitboxError::EmptyGroup(group.id.to_string()));
            }
        }

        let unknown = |part: PartId, group: GroupId| ChitboxError::UnknownGroup {
            part: part.to_string(),
            group: group.to_string(),
        };
        for rule in &self.behaviors {
            match &rule.behavior {
                Behavior::GroupToggle { group } | Behavior::PairToggle { pair: group } => {
                    if !seen_groups.contains(group) {
                        return Err(unknown(rule.part, *group));
                    }
                }
                Behavior::CloseAll { groups, .. } => {
                    if let Some(missing) = groups.iter().find(|g| !seen_groups.contains(*g)) {
                        return Err(unknown(rule.part, *missing));
                    }
                }
                Behavior::ExternalLink => {
                    if !self.links.iter().any(|l| l.part == rule.part) {
                        return Err(ChitboxError::MissingSlug(rule.part.to_string()));
                    }
                }
                Behavior::Disabled | Behavior::SoloToggle | Behavior::FreeSpin => {}
            }
        }

        for spec in &self.parts {
            if spec.kind == PartKind::ExternalLink && !self.links.iter().any(|l| l.part == spec.id) {
                return Err(ChitboxError::MissingSlug(spec.id.to_string()));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Derived tables
    // ========================================================================

    /// Policy table. Linked parts always resolve to
    /// [`Behavior::ExternalLink`], shadowing any explicit rule for them.
    #[must_use]
    pub fn behavior_table(&self) -> BehaviorTable {
        let mut table: BehaviorTable = self.behaviors.iter().cloned().collect();
        for link in &self.links {
            if let Some((_, shadowed)) = table.iter().find(|(id, _)| *id == link.part) {
                if *shadowed != Behavior::ExternalLink {
                    log::warn!("{} is linked to content; its {shadowed:?} rule is unreachable", link.part);
                }
            }
            table.insert(link.part, Behavior::ExternalLink);
        }
        for spec in &self.parts {
            if spec.kind == PartKind::Disabled && !table.contains(spec.id) {
                table.insert(spec.id, Behavior::Disabled);
            }
        }
        table
    }

    #[must_use]
    pub fn link_resolver(&self) -> ChitLinkResolver {
        self.links
            .iter()
            .map(|link| (link.part, link.slug.clone()))
            .collect()
    }
}
