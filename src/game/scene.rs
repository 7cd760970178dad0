//! Door Scene
//!
//! Per-frame driver tying the observer, the doors, their hinges and the hint
//! overlay together. The host's render loop calls [`DoorScene::tick`] once per
//! frame with the camera position and applies the returned hinge angles.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut scene = DoorScene::new(&SceneConfig::default())?;
//!
//! // Each frame:
//! let frame = scene.tick(camera.position, dt);
//! for door in &frame.doors {
//!     hinge_nodes[door.id.0].rotation = Quat::from_rotation_y(door.angle);
//! }
//! for _ in 0..scene.drain_cues() {
//!     audio.play(door_sound);
//! }
//! ```

use glam::{Mat4, Vec3};

use super::config::{SceneConfig, SceneConfigError};
use super::doors::{DoorFrame, DoorId, DoorSet};
use super::hint::HintOverlay;
use crate::door::{DoorEvent, DoorHinge};
use crate::observer::ObserverTracker;

/// Everything a host needs to present one frame.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    /// Per-door angles and events, in door id order
    pub doors: Vec<DoorFrame>,
    /// Whether the subtitle hint should be drawn
    pub hint_visible: bool,
    /// Door sound cues queued this frame
    pub cues: usize,
}

/// A room full of proximity doors.
#[derive(Debug, Clone)]
pub struct DoorScene {
    observer: ObserverTracker,
    doors: DoorSet,
    hinges: Vec<DoorHinge>,
    hint: HintOverlay,
    pending_cues: usize,
}

impl DoorScene {
    /// Build every door described by `config`.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneConfigError> {
        let (doors, hinges) = config.build_doors()?;
        log::info!("scene ready with {} door(s)", doors.len());

        Ok(Self {
            observer: ObserverTracker::new(config.observer_start),
            doors,
            hinges,
            hint: HintOverlay::new(&config.hint),
            pending_cues: 0,
        })
    }

    pub fn doors(&self) -> &DoorSet {
        &self.doors
    }

    pub fn hint(&self) -> &HintOverlay {
        &self.hint
    }

    pub fn hinge(&self, id: DoorId) -> Option<&DoorHinge> {
        self.hinges.get(id.0)
    }

    /// World transform of a door panel at its current angle.
    pub fn hinge_transform(&self, id: DoorId) -> Option<Mat4> {
        let door = self.doors.get(id)?;
        let hinge = self.hinges.get(id.0)?;
        Some(hinge.panel_transform(door.current_angle()))
    }

    /// Move the observer without it counting as movement.
    pub fn teleport(&mut self, position: Vec3) {
        self.observer.teleport(position);
    }

    /// Advance one frame with the observer at `position`.
    pub fn tick(&mut self, position: Vec3, dt: f32) -> SceneFrame {
        // Fire expired hint timers before doors can re-show it this frame
        self.hint.tick(dt);

        let sample = self.observer.sample(position);
        let doors = self.doors.update_all(&sample);

        let mut cues = 0;
        for frame in &doors {
            if let Some(DoorEvent::Opened(_)) = frame.event {
                cues += 1;
                self.hint.door_opened();
            }
        }
        self.pending_cues += cues;

        SceneFrame {
            doors,
            hint_visible: self.hint.is_visible(),
            cues,
        }
    }

    /// Take all queued door sound cues.
    pub fn drain_cues(&mut self) -> usize {
        std::mem::take(&mut self.pending_cues)
    }
}
