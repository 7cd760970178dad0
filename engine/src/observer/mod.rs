//! Observer Module
//!
//! The observer is whatever moves through the scene and triggers doors,
//! usually the first-person camera. Doors only ever read its position and
//! the movement since the previous frame.
//!
//! # Components
//!
//! - [`ObserverSample`] - Position plus frame-to-frame movement
//! - [`ObserverTracker`] - Remembers the previous frame's position

pub mod tracker;

pub use tracker::{ObserverSample, ObserverTracker};

use glam::{Vec2, Vec3};

/// Project a world position onto the ground plane as `(x, z)`.
#[inline]
pub fn ground_plane(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}
