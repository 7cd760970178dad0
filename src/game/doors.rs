//! Door Set
//!
//! Every door in a scene lives in one arena, indexed by [`DoorId`]. All doors
//! read the same observer sample each frame and own no shared state, so the
//! order they are updated in never changes the outcome.

use crate::door::{DoorController, DoorEvent};
use crate::observer::ObserverSample;

/// Stable index of a door inside a [`DoorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoorId(pub usize);

/// One door's output for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorFrame {
    pub id: DoorId,
    /// Hinge angle to apply this frame
    pub angle: f32,
    pub event: Option<DoorEvent>,
}

/// Arena of independent door controllers.
#[derive(Debug, Clone, Default)]
pub struct DoorSet {
    names: Vec<String>,
    doors: Vec<DoorController>,
}

impl DoorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a door and return its id.
    pub fn insert(&mut self, name: impl Into<String>, controller: DoorController) -> DoorId {
        let id = DoorId(self.doors.len());
        self.names.push(name.into());
        self.doors.push(controller);
        id
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn get(&self, id: DoorId) -> Option<&DoorController> {
        self.doors.get(id.0)
    }

    pub fn get_mut(&mut self, id: DoorId) -> Option<&mut DoorController> {
        self.doors.get_mut(id.0)
    }

    pub fn name(&self, id: DoorId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Look a door up by name.
    pub fn find(&self, name: &str) -> Option<DoorId> {
        self.names.iter().position(|n| n == name).map(DoorId)
    }

    /// Iterate doors in id order.
    pub fn iter(&self) -> impl Iterator<Item = (DoorId, &DoorController)> {
        self.doors.iter().enumerate().map(|(i, d)| (DoorId(i), d))
    }

    /// Update every door against the same sample.
    pub fn update_all(&mut self, sample: &ObserverSample) -> Vec<DoorFrame> {
        self.doors
            .iter_mut()
            .enumerate()
            .map(|(i, door)| {
                let step = door.update_sample(sample);
                if let Some(event) = step.event {
                    log::debug!("{}: {:?}", self.names[i], event);
                }
                DoorFrame {
                    id: DoorId(i),
                    angle: step.angle,
                    event: step.event,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door::DoorParams;
    use glam::{Vec2, Vec3};

    fn two_door_set() -> DoorSet {
        let mut set = DoorSet::new();
        set.insert("front", DoorController::new(DoorParams::at(Vec2::new(0.0, -8.0))).unwrap());
        set.insert("back", DoorController::new(DoorParams::at(Vec2::new(0.0, 8.0))).unwrap());
        set
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let set = two_door_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.find("front"), Some(DoorId(0)));
        assert_eq!(set.find("back"), Some(DoorId(1)));
        assert_eq!(set.find("side"), None);
        assert_eq!(set.name(DoorId(1)), Some("back"));
    }

    #[test]
    fn test_only_nearby_door_opens() {
        let mut set = two_door_set();
        let frames = set.update_all(&ObserverSample::stationary(Vec3::new(0.0, 1.6, -6.0)));
        assert!(matches!(frames[0].event, Some(DoorEvent::Opened(_))));
        assert_eq!(frames[1].event, None);
        assert!(set.get(DoorId(0)).unwrap().is_open());
        assert!(!set.get(DoorId(1)).unwrap().is_open());
    }

    #[test]
    fn test_both_doors_can_open_in_one_frame() {
        let mut set = DoorSet::new();
        set.insert("a", DoorController::new(DoorParams::at(Vec2::new(-1.0, 0.0))).unwrap());
        set.insert("b", DoorController::new(DoorParams::at(Vec2::new(1.0, 0.0))).unwrap());
        let frames = set.update_all(&ObserverSample::stationary(Vec3::ZERO));
        assert!(frames.iter().all(|f| matches!(f.event, Some(DoorEvent::Opened(_)))));
    }

    #[test]
    fn test_empty_set() {
        let mut set = DoorSet::new();
        assert!(set.is_empty());
        assert!(set.update_all(&ObserverSample::stationary(Vec3::ZERO)).is_empty());
    }
}
