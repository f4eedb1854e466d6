//! Solver output and rigid transform types.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

/// Raw result returned by an external alignment solver.
///
/// `matrix` is a 16-float 4×4 transform in the solver's flat layout;
/// [`TransformReconciler`](super::TransformReconciler) maps it into the
/// consumer's convention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// True if the solver converged; anything else is refused
    pub converged: bool,
    /// Flat 4×4 transform
    pub matrix: [f32; 16],
    /// Centroid of the reference (target) cloud before alignment
    pub centroid_ref_before: [f32; 3],
    /// Centroid of the moving (source) cloud before alignment
    pub centroid_target_before: [f32; 3],
}

impl SolverResult {
    /// Identity matrix in the solver layout
    pub const IDENTITY_MATRIX: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    /// Converged result carrying `matrix` and zero centroids.
    pub fn converged(matrix: [f32; 16]) -> Self {
        Self {
            converged: true,
            matrix,
            centroid_ref_before: [0.0; 3],
            centroid_target_before: [0.0; 3],
        }
    }

    /// Non-converged result (identity matrix).
    pub fn failed() -> Self {
        Self {
            converged: false,
            ..Self::converged(Self::IDENTITY_MATRIX)
        }
    }

    /// Attach the pre-alignment centroids.
    pub fn with_centroids(mut self, reference: [f32; 3], moving: [f32; 3]) -> Self {
        self.centroid_ref_before = reference;
        self.centroid_target_before = moving;
        self
    }

    /// True if every matrix and centroid entry is finite
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
            && self.centroid_ref_before.iter().all(|v| v.is_finite())
            && self.centroid_target_before.iter().all(|v| v.is_finite())
    }
}

/// Rotation + translation in world space, ready for blending.
///
/// `rotation` is the rotation applied to the consumer (already inverted by
/// the reconciler where a solver result is involved).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Rotation applied to the consumer
    pub rotation: UnitQuaternion<f32>,
    /// Translation in meters (world frame)
    pub translation: WorldPoint,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// No rotation, no translation
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: WorldPoint::ZERO,
        }
    }

    /// Create from parts
    pub fn new(rotation: UnitQuaternion<f32>, translation: WorldPoint) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure translation
    pub fn from_translation(translation: WorldPoint) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Rotation about `axis` by `angle` radians, no translation.
    pub fn from_axis_angle(axis: Vector3<f32>, angle: f32) -> Self {
        Self {
            rotation: UnitQuaternion::from_scaled_axis(axis.normalize() * angle),
            translation: WorldPoint::ZERO,
        }
    }

    /// True if rotation and translation contain only finite values.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.coords.iter().all(|v| v.is_finite())
    }

    /// Apply to a point: `rotation * p + translation`.
    #[inline]
    pub fn transform_point(&self, p: WorldPoint) -> WorldPoint {
        WorldPoint::from(self.rotation * p.to_vector()) + self.translation
    }

    /// Inverse transform
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -WorldPoint::from(rotation * self.translation.to_vector()),
        }
    }
}
