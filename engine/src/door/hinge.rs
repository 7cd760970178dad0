//! Door Hinge Geometry
//!
//! A door panel hangs from a hinge at one edge of its doorway. The hinge
//! rotates about the vertical axis by the angle a [`DoorController`] produces;
//! the panel is offset half its width from the hinge and sits on the floor.
//!
//! [`DoorController`]: super::DoorController

use glam::{Mat4, Quat, Vec2, Vec3};

use super::error::DoorConfigError;

/// Hinge pivot plus the panel dimensions it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorHinge {
    /// World position of the hinge axis at floor level
    pub pivot: Vec3,
    /// Panel width (meters)
    pub width: f32,
    /// Panel height (meters)
    pub height: f32,
    /// Panel thickness (meters), matches the wall it sits in
    pub thickness: f32,
}

impl DoorHinge {
    /// Place a hinge at the left edge of a doorway.
    ///
    /// `center` is the middle of the doorway on the ground plane and `facing`
    /// the axis through it. With +Z facing the hinge lands `width / 2` toward -X.
    pub fn for_doorway(
        center: Vec2,
        facing: Vec2,
        width: f32,
        height: f32,
        thickness: f32,
    ) -> Result<Self, DoorConfigError> {
        if !(width > 0.0 && height > 0.0 && thickness > 0.0) {
            return Err(DoorConfigError::InvalidDimensions);
        }
        let facing = facing.try_normalize().ok_or(DoorConfigError::ZeroFacing)?;
        let lateral = Vec2::new(facing.y, -facing.x);
        let pivot = center - lateral * (width * 0.5);

        Ok(Self {
            pivot: Vec3::new(pivot.x, 0.0, pivot.y),
            width,
            height,
            thickness,
        })
    }

    /// Hinge rotation for a door angle.
    #[inline]
    pub fn rotation(&self, angle: f32) -> Quat {
        Quat::from_rotation_y(angle)
    }

    /// Panel offset from the hinge in hinge-local space.
    #[inline]
    fn panel_offset(&self) -> Vec3 {
        Vec3::new(self.width * 0.5, self.height * 0.5, 0.0)
    }

    /// World transform of the panel's center for a door angle.
    pub fn panel_transform(&self, angle: f32) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(angle), self.pivot)
            * Mat4::from_translation(self.panel_offset())
    }

    /// World position of the panel's center.
    pub fn panel_center(&self, angle: f32) -> Vec3 {
        self.pivot + self.rotation(angle) * self.panel_offset()
    }

    /// World position of the panel's free edge at floor level.
    pub fn free_edge(&self, angle: f32) -> Vec3 {
        self.pivot + self.rotation(angle) * Vec3::new(self.width, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.001;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn front_door() -> DoorHinge {
        DoorHinge::for_doorway(Vec2::new(0.0, -8.0), Vec2::Y, 2.0, 3.0, 0.2).unwrap()
    }

    #[test]
    fn test_pivot_at_left_edge_of_doorway() {
        let hinge = front_door();
        assert!(approx_vec(hinge.pivot, Vec3::new(-1.0, 0.0, -8.0)));
    }

    #[test]
    fn test_closed_panel_fills_doorway() {
        let hinge = front_door();
        assert!(approx_vec(hinge.panel_center(0.0), Vec3::new(0.0, 1.5, -8.0)));
        assert!(approx_vec(hinge.free_edge(0.0), Vec3::new(1.0, 0.0, -8.0)));
    }

    #[test]
    fn test_outward_swing_moves_free_edge_along_facing() {
        // -90 degrees about +Y takes +X to +Z
        let hinge = front_door();
        let edge = hinge.free_edge(-FRAC_PI_2);
        assert!(approx_vec(edge, Vec3::new(-1.0, 0.0, -6.0)));
    }

    #[test]
    fn test_transform_matches_panel_center() {
        let hinge = front_door();
        for angle in [0.0, 0.4, -1.2, FRAC_PI_2] {
            let from_matrix = hinge.panel_transform(angle).transform_point3(Vec3::ZERO);
            assert!(approx_vec(from_matrix, hinge.panel_center(angle)));
        }
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = DoorHinge::for_doorway(Vec2::ZERO, Vec2::Y, 0.0, 3.0, 0.2).unwrap_err();
        assert_eq!(err, DoorConfigError::InvalidDimensions);
        let err = DoorHinge::for_doorway(Vec2::ZERO, Vec2::ZERO, 2.0, 3.0, 0.2).unwrap_err();
        assert_eq!(err, DoorConfigError::ZeroFacing);
    }
}
