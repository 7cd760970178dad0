//! Door Configuration
//!
//! Serializable description of one doorway. `Default` returns the front door
//! of the reference room: a 2m wide, 3m tall door in the wall at z = -8.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::door::{
    DEFAULT_CLOSE_RADIUS, DEFAULT_OPEN_INWARD, DEFAULT_OPEN_OUTWARD, DEFAULT_OPEN_RADIUS,
    DEFAULT_SMOOTHING, DoorConfigError, DoorController, DoorHinge, DoorParams,
};

/// One doorway: placement, panel size and trigger tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Name used in logs and lookups
    pub name: String,
    /// Middle of the doorway on the ground plane `(x, z)`
    pub center: Vec2,
    /// Axis through the doorway on the ground plane
    pub facing: Vec2,
    /// Panel width (meters)
    pub width: f32,
    /// Panel height (meters)
    pub height: f32,
    /// Panel thickness (meters)
    pub thickness: f32,
    /// Distance below which the door opens
    pub open_radius: f32,
    /// Distance above which the door closes
    pub close_radius: f32,
    /// Hinge angle when swinging away from an observer moving along `facing`
    pub open_outward_angle: f32,
    /// Hinge angle when swinging the other way
    pub open_inward_angle: f32,
    /// Fraction of the remaining angle closed per frame
    pub smoothing_factor: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            name: "front".to_string(),
            center: Vec2::new(0.0, -8.0),
            facing: Vec2::Y,
            width: 2.0,
            height: 3.0,
            thickness: 0.2,
            open_radius: DEFAULT_OPEN_RADIUS,
            close_radius: DEFAULT_CLOSE_RADIUS,
            open_outward_angle: DEFAULT_OPEN_OUTWARD,
            open_inward_angle: DEFAULT_OPEN_INWARD,
            smoothing_factor: DEFAULT_SMOOTHING,
        }
    }
}

impl DoorConfig {
    /// Default door with a different name and placement.
    pub fn named(name: &str, center: Vec2, facing: Vec2) -> Self {
        Self {
            name: name.to_string(),
            center,
            facing,
            ..Default::default()
        }
    }

    /// Controller parameters for this door.
    pub fn params(&self) -> DoorParams {
        DoorParams {
            center: self.center,
            facing: self.facing,
            open_radius: self.open_radius,
            close_radius: self.close_radius,
            open_outward_angle: self.open_outward_angle,
            open_inward_angle: self.open_inward_angle,
            smoothing_factor: self.smoothing_factor,
        }
    }

    /// Hinge geometry for this door.
    pub fn hinge(&self) -> Result<DoorHinge, DoorConfigError> {
        DoorHinge::for_doorway(self.center, self.facing, self.width, self.height, self.thickness)
    }

    /// Validate and build the controller and hinge.
    pub fn build(&self) -> Result<(DoorController, DoorHinge), DoorConfigError> {
        let controller = DoorController::new(self.params())?;
        let hinge = self.hinge()?;
        Ok((controller, hinge))
    }
}
