//! Observer Tracker
//!
//! Turns a stream of per-frame positions into samples carrying the movement
//! since the previous frame. Call [`ObserverTracker::sample`] exactly once per
//! rendered frame, after the camera has moved and before doors are updated.

use glam::Vec3;

/// One frame's view of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSample {
    /// Current world position
    pub position: Vec3,
    /// Position delta since the previous sample
    pub movement: Vec3,
}

impl ObserverSample {
    /// A sample with no movement, e.g. an observer standing still.
    pub fn stationary(position: Vec3) -> Self {
        Self {
            position,
            movement: Vec3::ZERO,
        }
    }

    /// Build a sample from the previous and current positions.
    pub fn between(previous: Vec3, current: Vec3) -> Self {
        Self {
            position: current,
            movement: current - previous,
        }
    }
}

/// Tracks the observer's previous position across frames.
#[derive(Debug, Clone)]
pub struct ObserverTracker {
    previous: Vec3,
}

impl ObserverTracker {
    /// Start tracking from the observer's spawn position.
    pub fn new(initial: Vec3) -> Self {
        Self { previous: initial }
    }

    /// Position recorded by the last sample (or the spawn position).
    pub fn previous(&self) -> Vec3 {
        self.previous
    }

    /// Produce this frame's sample and remember `position` for the next one.
    pub fn sample(&mut self, position: Vec3) -> ObserverSample {
        let sample = ObserverSample::between(self.previous, position);
        self.previous = position;
        sample
    }

    /// Move the observer without producing a movement spike next frame.
    ///
    /// Use this for respawns and scripted jumps.
    pub fn teleport(&mut self, position: Vec3) {
        self.previous = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_at_spawn_has_no_movement() {
        let spawn = Vec3::new(0.0, 2.4, 6.0);
        let mut tracker = ObserverTracker::new(spawn);
        let sample = tracker.sample(spawn);
        assert_eq!(sample.position, spawn);
        assert_eq!(sample.movement, Vec3::ZERO);
    }

    #[test]
    fn test_movement_is_delta_from_previous_frame() {
        let mut tracker = ObserverTracker::new(Vec3::ZERO);
        tracker.sample(Vec3::new(0.0, 0.0, 1.0));
        let sample = tracker.sample(Vec3::new(0.5, 0.0, 1.5));
        assert_eq!(sample.movement, Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(tracker.previous(), Vec3::new(0.5, 0.0, 1.5));
    }

    #[test]
    fn test_teleport_suppresses_movement_spike() {
        let mut tracker = ObserverTracker::new(Vec3::ZERO);
        tracker.teleport(Vec3::new(100.0, 0.0, 100.0));
        let sample = tracker.sample(Vec3::new(100.0, 0.0, 100.0));
        assert_eq!(sample.movement, Vec3::ZERO);
    }
}
