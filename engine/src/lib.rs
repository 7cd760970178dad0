//! Door Scene Engine Library
//!
//! Core logic for a small first-person room scene: doors that swing open as
//! the observer approaches and ease shut once they walk away. Rendering,
//! input devices and audio belong to the host; this library only reads the
//! observer's position and produces hinge angles and events.
//!
//! # Modules
//!
//! - [`door`] - Door controller state machine, hinge geometry, config errors
//! - [`observer`] - Per-frame observer sampling
//! - [`game`] - Scene configuration, door arena, hint overlay, frame driver
//!
//! # Example
//!
//! ```ignore
//! use door_scene_engine::game::{DoorScene, SceneConfig};
//!
//! let mut scene = DoorScene::new(&SceneConfig::default())?;
//!
//! // Each rendered frame
//! let frame = scene.tick(camera_position, dt);
//! for door in &frame.doors {
//!     set_hinge_rotation(door.id, door.angle);
//! }
//! ```

pub mod door;
pub mod observer;

// Scene-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the door core at crate level for convenience
pub use door::{
    DoorConfigError, DoorController, DoorEvent, DoorHinge, DoorParams, DoorState, DoorStep,
    SwingDirection,
};
// Re-export observer types
pub use observer::{ObserverSample, ObserverTracker, ground_plane};
// Re-export scene types
pub use game::{DoorId, DoorScene, DoorSet, SceneConfig};
