//! Door Controller
//!
//! Proximity-triggered door with a hysteresis band and an eased hinge angle.
//!
//! # State Machine
//!
//! - Closed -> Open when the observer's ground-plane distance to the door
//!   center drops below `open_radius`
//! - Open -> Closed when the distance rises above `close_radius`
//! - Anything in between keeps the current state
//!
//! # Swing Direction
//!
//! On opening, the door swings away from the observer. If the observer moved
//! more than [`MOVEMENT_NOISE_THRESHOLD`] this frame, the sign of the movement
//! along the door's facing axis decides; otherwise the observer's side of the
//! doorway does.
//!
//! # Usage
//!
//! ```rust,ignore
//! use door_scene_engine::door::{DoorController, DoorParams};
//!
//! let mut door = DoorController::new(DoorParams::default())?;
//!
//! // Each frame:
//! let step = door.update(camera_position, camera_position - previous_position);
//! hinge.rotation = Quat::from_rotation_y(step.angle);
//! ```

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use super::error::DoorConfigError;
use crate::observer::{ObserverSample, ground_plane};

/// Movement shorter than this (per frame) counts as standing still
pub const MOVEMENT_NOISE_THRESHOLD: f32 = 0.02;

/// Distance below which a closed door opens
pub const DEFAULT_OPEN_RADIUS: f32 = 4.0;

/// Distance above which an open door closes
pub const DEFAULT_CLOSE_RADIUS: f32 = 5.0;

/// Hinge angle when swinging away from an observer walking along +facing
pub const DEFAULT_OPEN_OUTWARD: f32 = -FRAC_PI_2;

/// Hinge angle when swinging toward the far side
pub const DEFAULT_OPEN_INWARD: f32 = FRAC_PI_2;

/// Fraction of the remaining angle closed each frame
pub const DEFAULT_SMOOTHING: f32 = 0.15;

static_assertions::const_assert!(DEFAULT_OPEN_RADIUS > 0.0);
static_assertions::const_assert!(DEFAULT_OPEN_RADIUS < DEFAULT_CLOSE_RADIUS);
static_assertions::const_assert!(DEFAULT_SMOOTHING > 0.0 && DEFAULT_SMOOTHING < 1.0);

/// Logical door state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

/// Which of the two open angles the door is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingDirection {
    /// Away from an observer moving along the facing axis
    Outward,
    /// Away from an observer moving against the facing axis
    Inward,
}

/// Discrete notification produced by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    /// The door just opened; callers typically play a sound or show a hint
    Opened(SwingDirection),
    /// The door just started closing
    Closed,
}

/// Result of one [`DoorController::update`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorStep {
    /// Eased hinge angle (radians about +Y) to apply this frame
    pub angle: f32,
    /// Transition that happened this frame, if any
    pub event: Option<DoorEvent>,
}

/// Construction parameters for a [`DoorController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorParams {
    /// Door reference point on the ground plane `(x, z)`
    pub center: Vec2,
    /// Axis through the doorway on the ground plane; need not be normalized
    pub facing: Vec2,
    pub open_radius: f32,
    pub close_radius: f32,
    pub open_outward_angle: f32,
    pub open_inward_angle: f32,
    pub smoothing_factor: f32,
}

impl Default for DoorParams {
    fn default() -> Self {
        Self {
            center: Vec2::new(0.0, -8.0),
            facing: Vec2::Y,
            open_radius: DEFAULT_OPEN_RADIUS,
            close_radius: DEFAULT_CLOSE_RADIUS,
            open_outward_angle: DEFAULT_OPEN_OUTWARD,
            open_inward_angle: DEFAULT_OPEN_INWARD,
            smoothing_factor: DEFAULT_SMOOTHING,
        }
    }
}

impl DoorParams {
    /// Default parameters around a different center.
    pub fn at(center: Vec2) -> Self {
        Self {
            center,
            ..Default::default()
        }
    }

    /// Check every precondition a controller relies on.
    pub fn validate(&self) -> Result<(), DoorConfigError> {
        let scalars = [
            ("open_radius", self.open_radius),
            ("close_radius", self.close_radius),
            ("open_outward_angle", self.open_outward_angle),
            ("open_inward_angle", self.open_inward_angle),
            ("smoothing_factor", self.smoothing_factor),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(DoorConfigError::NonFinite(name));
            }
        }
        if !self.center.is_finite() {
            return Err(DoorConfigError::NonFinite("center"));
        }
        if !self.facing.is_finite() {
            return Err(DoorConfigError::NonFinite("facing"));
        }
        if self.facing.length_squared() == 0.0 {
            return Err(DoorConfigError::ZeroFacing);
        }

        if self.open_radius <= 0.0 {
            return Err(DoorConfigError::NonPositiveOpenRadius(self.open_radius));
        }
        if self.close_radius <= self.open_radius {
            return Err(DoorConfigError::RadiiOutOfOrder {
                open: self.open_radius,
                close: self.close_radius,
            });
        }

        if self.open_outward_angle == 0.0 || self.open_inward_angle == 0.0 {
            return Err(DoorConfigError::ZeroOpenAngle);
        }
        if self.open_outward_angle.signum() == self.open_inward_angle.signum() {
            return Err(DoorConfigError::OpenAnglesSameSign {
                outward: self.open_outward_angle,
                inward: self.open_inward_angle,
            });
        }

        if self.smoothing_factor <= 0.0 || self.smoothing_factor >= 1.0 {
            return Err(DoorConfigError::SmoothingOutOfRange(self.smoothing_factor));
        }

        Ok(())
    }
}

/// Decide which way a door should swing when it opens.
///
/// `offset` is the observer's ground-plane position relative to the door
/// center, `movement` the observer's full movement this frame and `facing`
/// the door's unit axis.
pub fn choose_swing(offset: Vec2, movement: Vec3, facing: Vec2) -> SwingDirection {
    let outward = if movement.length() > MOVEMENT_NOISE_THRESHOLD {
        ground_plane(movement).dot(facing) > 0.0
    } else {
        offset.dot(facing) < 0.0
    };

    if outward {
        SwingDirection::Outward
    } else {
        SwingDirection::Inward
    }
}

/// One door's open/closed state and eased hinge angle.
#[derive(Debug, Clone)]
pub struct DoorController {
    center: Vec2,
    /// Normalized
    facing: Vec2,
    open_radius: f32,
    close_radius: f32,
    open_outward_angle: f32,
    open_inward_angle: f32,
    smoothing_factor: f32,

    state: DoorState,
    target_angle: f32,
    current_angle: f32,
}

impl DoorController {
    /// Build a closed door at rest.
    pub fn new(params: DoorParams) -> Result<Self, DoorConfigError> {
        params.validate()?;
        Ok(Self {
            center: params.center,
            facing: params.facing.normalize(),
            open_radius: params.open_radius,
            close_radius: params.close_radius,
            open_outward_angle: params.open_outward_angle,
            open_inward_angle: params.open_inward_angle,
            smoothing_factor: params.smoothing_factor,
            state: DoorState::Closed,
            target_angle: 0.0,
            current_angle: 0.0,
        })
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    /// Angle the hinge is easing toward.
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    /// Angle currently applied to the hinge.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    pub fn open_radius(&self) -> f32 {
        self.open_radius
    }

    pub fn close_radius(&self) -> f32 {
        self.close_radius
    }

    pub fn smoothing_factor(&self) -> f32 {
        self.smoothing_factor
    }

    /// Open angle for a swing direction.
    pub fn open_angle(&self, swing: SwingDirection) -> f32 {
        match swing {
            SwingDirection::Outward => self.open_outward_angle,
            SwingDirection::Inward => self.open_inward_angle,
        }
    }

    /// Ground-plane distance from `position` to the door center.
    pub fn planar_distance(&self, position: Vec3) -> f32 {
        ground_plane(position).distance(self.center)
    }

    /// Advance one frame.
    ///
    /// Must be called once per rendered frame. The transition is applied
    /// before smoothing, so a freshly chosen target already moves the hinge
    /// this frame.
    pub fn update(&mut self, position: Vec3, movement: Vec3) -> DoorStep {
        let distance = self.planar_distance(position);

        let event = match self.state {
            DoorState::Closed if distance < self.open_radius => {
                let offset = ground_plane(position) - self.center;
                let swing = choose_swing(offset, movement, self.facing);
                self.state = DoorState::Open;
                self.target_angle = self.open_angle(swing);
                log::debug!(
                    "door at {} opened {:?} (distance {:.2})",
                    self.center,
                    swing,
                    distance
                );
                Some(DoorEvent::Opened(swing))
            }
            DoorState::Open if distance > self.close_radius => {
                self.state = DoorState::Closed;
                self.target_angle = 0.0;
                log::debug!("door at {} closing (distance {:.2})", self.center, distance);
                Some(DoorEvent::Closed)
            }
            _ => None,
        };

        self.current_angle += (self.target_angle - self.current_angle) * self.smoothing_factor;

        DoorStep {
            angle: self.current_angle,
            event,
        }
    }

    /// [`update`](Self::update) from a tracked observer sample.
    pub fn update_sample(&mut self, sample: &ObserverSample) -> DoorStep {
        self.update(sample.position, sample.movement)
    }

    /// Jump the hinge straight to its target angle.
    ///
    /// Use this when a scene is (re)loaded and there is nothing to animate.
    pub fn snap_to_target(&mut self) {
        self.current_angle = self.target_angle;
    }
}
