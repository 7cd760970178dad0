//! Door Module
//!
//! Proximity-triggered doors for first-person scenes.
//!
//! # Components
//!
//! - [`DoorController`] - Open/closed state machine with a hysteresis band
//!   and an exponentially eased hinge angle
//!   - Swing direction chosen from observer movement, falling back to the
//!     observer's side of the doorway when standing still
//! - [`DoorHinge`] - Hinge pivot placement and panel transforms
//! - [`DoorConfigError`] - Construction-time validation failures

pub mod controller;
pub mod error;
pub mod hinge;

pub use controller::{
    DEFAULT_CLOSE_RADIUS, DEFAULT_OPEN_INWARD, DEFAULT_OPEN_OUTWARD, DEFAULT_OPEN_RADIUS,
    DEFAULT_SMOOTHING, DoorController, DoorEvent, DoorParams, DoorState, DoorStep,
    MOVEMENT_NOISE_THRESHOLD, SwingDirection, choose_swing,
};
pub use error::DoorConfigError;
pub use hinge::DoorHinge;
