//! Scene Configuration
//!
//! Room layout, door list and hint timing for a door scene. Loaded from JSON;
//! any field missing from the file keeps its default. `Default` returns the
//! single-door reference room.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::door_config::DoorConfig;
use crate::door::{DoorConfigError, DoorHinge};
use crate::game::doors::DoorSet;

/// On-screen hint text and how long it stays up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Text shown in the subtitle bar
    pub text: String,
    /// Seconds the hint is visible after the scene starts
    pub intro_seconds: f32,
    /// Seconds the hint is re-shown whenever a door opens
    pub on_open_seconds: f32,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            text: "approach the door".to_string(),
            intro_seconds: 8.0,
            on_open_seconds: 2.5,
        }
    }
}

/// Complete scene description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Side length of the square room (meters). Places the doorways of the
    /// built-in layouts; the scene itself only reads each door's center.
    pub room_size: f32,
    /// Where the observer spawns
    pub observer_start: Vec3,
    /// Doors, in update order
    pub doors: Vec<DoorConfig>,
    /// Subtitle hint
    pub hint: HintConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::with_room_size(16.0)
    }
}

impl SceneConfig {
    /// Single-door room of the given size, doorway centered in the front wall.
    pub fn with_room_size(room_size: f32) -> Self {
        let front = Vec2::new(0.0, -room_size * 0.5);
        Self {
            room_size,
            observer_start: Vec3::new(0.0, 2.4, 6.0),
            doors: vec![DoorConfig::named("front", front, Vec2::Y)],
            hint: HintConfig::default(),
        }
    }

    /// Reference room with a second doorway in the back wall.
    pub fn two_doors() -> Self {
        let mut config = Self::default();
        let half = config.room_size * 0.5;
        config.doors = vec![
            DoorConfig::named("front", Vec2::new(0.0, -half), Vec2::Y),
            DoorConfig::named("back", Vec2::new(0.0, half), Vec2::NEG_Y),
        ];
        config
    }

    /// Parse a scene from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SceneConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SceneConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SceneConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build every door's controller and hinge, in config order.
    ///
    /// Hinges are indexed the same way as the returned [`DoorSet`]'s ids.
    pub fn build_doors(&self) -> Result<(DoorSet, Vec<DoorHinge>), SceneConfigError> {
        let mut doors = DoorSet::new();
        let mut hinges = Vec::with_capacity(self.doors.len());

        for door in &self.doors {
            let (controller, hinge) = door.build().map_err(|source| SceneConfigError::Door {
                name: door.name.clone(),
                source,
            })?;
            doors.insert(door.name.clone(), controller);
            hinges.push(hinge);
        }

        Ok((doors, hinges))
    }

    /// Validate every door, naming the first one that fails.
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        self.build_doors().map(|_| ())
    }
}

/// Errors that can occur while loading or building a scene.
#[derive(Debug)]
pub enum SceneConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// A door's parameters are invalid.
    Door {
        name: String,
        source: DoorConfigError,
    },
}

impl std::fmt::Display for SceneConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneConfigError::IoError(e) => write!(f, "IO error: {e}"),
            SceneConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            SceneConfigError::Door { name, source } => write!(f, "door '{name}': {source}"),
        }
    }
}

impl std::error::Error for SceneConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneConfigError::IoError(e) => Some(e),
            SceneConfigError::JsonError(e) => Some(e),
            SceneConfigError::Door { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for SceneConfigError {
    fn from(e: std::io::Error) -> Self {
        SceneConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for SceneConfigError {
    fn from(e: serde_json::Error) -> Self {
        SceneConfigError::JsonError(e)
    }
}
