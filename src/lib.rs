pub mod animation;
pub mod camera;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod interaction;
pub mod parts;
pub mod scene;
pub mod utils;

pub use animation::{AnimatedProperty, AnimationEngine, Easing, Motion, MotionProfile, Tween};
pub use camera::{CameraDirector, ShotDestination, ShotRule};
pub use config::ExplorerConfig;
pub use errors::ChitboxError;
pub use explorer::{Explorer, ExplorerEvent, ViewFlags};
pub use interaction::{CursorIcon, DispatchOutcome, Highlighter, InteractionRouter, PointerEvent};
pub use parts::{
    Behavior, BehaviorTable, ChitLinkResolver, ContentSlug, GroupId, PartId, PartKind,
    PartRegistry, StateKey, ToggleStateStore,
};
pub use scene::{CameraRig, Node, NodeHandle, Scene, Transform};
pub use utils::FrameClock;
