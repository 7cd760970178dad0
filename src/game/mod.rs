//! Game Module
//!
//! Scene-level systems that build on the engine's door core.

pub mod config;
pub mod doors;
pub mod hint;
pub mod scene;
pub mod walk;

pub use config::{DoorConfig, HintConfig, SceneConfig, SceneConfigError};
pub use doors::{DoorFrame, DoorId, DoorSet};
pub use hint::HintOverlay;
pub use scene::{DoorScene, SceneFrame};
pub use walk::WalkPath;
