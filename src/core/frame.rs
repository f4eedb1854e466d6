//! Local-to-world pose of the object that owns a point field.
//!
//! Field positions are stored in the owner's local frame while selections,
//! falloff distances, and solver results live in world space. A
//! [`FieldFrame`] converts between the two:
//!
//! ```text
//! world = position + rotation * (scale * local)
//! local = rotation⁻¹ * (world - position) / scale
//! ```

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Uniformly scaled rigid pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldFrame {
    /// Frame origin in world space (the owner's pivot)
    pub position: WorldPoint,
    /// Frame orientation
    pub rotation: UnitQuaternion<f32>,
    /// Uniform scale (must be positive)
    pub scale: f32,
}

impl Default for FieldFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl FieldFrame {
    /// Frame that maps local coordinates to identical world coordinates.
    pub fn identity() -> Self {
        Self {
            position: WorldPoint::ZERO,
            rotation: UnitQuaternion::identity(),
            scale: 1.0,
        }
    }

    /// Create a frame from its parts
    pub fn new(position: WorldPoint, rotation: UnitQuaternion<f32>, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Translated identity frame
    pub fn from_position(position: WorldPoint) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// True if the frame can be inverted.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.scale > 0.0 && self.scale.is_finite() && self.position.is_finite()
    }

    /// Local point to world point.
    #[inline]
    pub fn transform_point(&self, local: WorldPoint) -> WorldPoint {
        let v = self.rotation * (local.to_vector() * self.scale);
        self.position + WorldPoint::from(v)
    }

    /// World point to local point.
    #[inline]
    pub fn inverse_transform_point(&self, world: WorldPoint) -> WorldPoint {
        let v = self.rotation.inverse() * (world - self.position).to_vector();
        WorldPoint::from(v / self.scale)
    }

    /// World direction to local direction (scale applies, position does not).
    #[inline]
    pub fn inverse_transform_vector(&self, world: WorldPoint) -> WorldPoint {
        let v = self.rotation.inverse() * world.to_vector();
        WorldPoint::from(v / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: WorldPoint, b: WorldPoint) -> bool {
        a.distance(&b) < 1e-5
    }

    #[test]
    fn test_identity_roundtrip() {
        let frame = FieldFrame::identity();
        let p = WorldPoint::new(1.0, -2.0, 3.0);
        assert_eq!(frame.transform_point(p), p);
        assert_eq!(frame.inverse_transform_point(p), p);
    }

    #[test]
    fn test_rotated_scaled_frame() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let frame = FieldFrame::new(WorldPoint::new(10.0, 0.0, 0.0), rotation, 2.0);

        let world = frame.transform_point(WorldPoint::new(1.0, 0.0, 0.0));
        assert!(approx(world, WorldPoint::new(10.0, 2.0, 0.0)));

        let local = frame.inverse_transform_point(world);
        assert!(approx(local, WorldPoint::new(1.0, 0.0, 0.0)));

        // Vectors ignore the frame position
        let v = frame.inverse_transform_vector(WorldPoint::new(0.0, 2.0, 0.0));
        assert!(approx(v, WorldPoint::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_validity() {
        assert!(FieldFrame::identity().is_valid());
        let mut frame = FieldFrame::identity();
        frame.scale = 0.0;
        assert!(!frame.is_valid());
    }
}
