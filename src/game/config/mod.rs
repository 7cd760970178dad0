//! Config Module
//!
//! Scene layout and door tuning, loadable from JSON.

pub mod door_config;
pub mod scene_config;

pub use door_config::DoorConfig;
pub use scene_config::{HintConfig, SceneConfig, SceneConfigError};
