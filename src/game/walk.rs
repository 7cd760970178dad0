//! Scripted Walk
//!
//! Moves an observer along a polyline at constant speed. Stands in for the
//! interactive camera in headless runs and tests.

use glam::{Vec2, Vec3};

/// Constant-speed path through a list of waypoints.
#[derive(Debug, Clone)]
pub struct WalkPath {
    waypoints: Vec<Vec3>,
    /// Index of the waypoint being walked toward
    next: usize,
    position: Vec3,
    speed: f32,
}

impl WalkPath {
    /// Start at the first waypoint. An empty list stands still at the origin.
    pub fn new(waypoints: Vec<Vec3>, speed: f32) -> Self {
        let position = waypoints.first().copied().unwrap_or(Vec3::ZERO);
        Self {
            waypoints,
            next: 1,
            position,
            speed: speed.max(0.0),
        }
    }

    /// Walk from `start` through the doorway at `door_center` to `beyond`,
    /// then back out to `start`. Keeps the start height throughout.
    pub fn through_doorway(start: Vec3, door_center: Vec2, beyond: Vec2, speed: f32) -> Self {
        let y = start.y;
        Self::new(
            vec![
                start,
                Vec3::new(door_center.x, y, door_center.y),
                Vec3::new(beyond.x, y, beyond.y),
                Vec3::new(door_center.x, y, door_center.y),
                start,
            ],
            speed,
        )
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.waypoints.len()
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        let mut budget = self.speed * dt.max(0.0);

        while budget > 0.0 && !self.is_finished() {
            let target = self.waypoints[self.next];
            let to_target = target - self.position;
            let distance = to_target.length();

            if distance <= budget {
                self.position = target;
                budget -= distance;
                self.next += 1;
            } else {
                self.position += to_target / distance * budget;
                budget = 0.0;
            }
        }

        self.position
    }
}
