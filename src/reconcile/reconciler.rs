//! Solver-matrix to consumer-transform conversion.

use log::warn;
use nalgebra::{Matrix3, Matrix4, Rotation3, UnitQuaternion, Vector3};

use super::types::{RigidTransform, SolverResult};
use crate::core::{FieldFrame, WorldPoint};
use crate::error::{Error, Result};

/// Minimum norm of the basis vectors used for rotation extraction.
const MIN_BASIS_NORM: f32 = 1e-6;

/// Converts raw solver results into consumer rotations and translations.
///
/// Three mismatches are handled:
///
/// 1. Layout: the flat solver matrix is read with the index map
///    `[0,4,8,3 / 1,5,9,7 / 2,6,10,11 / 12,13,14,15]` (row by row).
/// 2. Rotation: rebuilt look-at style from column 2 (forward) and
///    column 1 (up) of the remapped matrix.
/// 3. Pivot: the solver works about cloud centroids; the consumer applies
///    `R⁻¹` about its own pivot with translation `t + R⁻¹ · pivot`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformReconciler {
    orthonormality_tolerance: Option<f32>,
}

impl Default for TransformReconciler {
    fn default() -> Self {
        Self {
            orthonormality_tolerance: Some(1e-3),
        }
    }
}

impl TransformReconciler {
    /// Create a reconciler.
    ///
    /// With `Some(tol)`, a 3×3 block whose `RᵀR` deviates from identity by
    /// more than `tol` (or that mirrors) is rejected. With `None`, any block
    /// is accepted and the look-at reconstruction silently projects it onto
    /// a rotation.
    pub fn new(orthonormality_tolerance: Option<f32>) -> Self {
        Self {
            orthonormality_tolerance,
        }
    }

    /// Reconciler that accepts scaled or sheared blocks
    pub fn permissive() -> Self {
        Self::new(None)
    }

    /// Configured tolerance
    pub fn orthonormality_tolerance(&self) -> Option<f32> {
        self.orthonormality_tolerance
    }

    /// Remap the flat solver matrix into the consumer layout.
    pub fn reorder(m: &[f32; 16]) -> Matrix4<f32> {
        Matrix4::new(
            m[0], m[4], m[8], m[3], //
            m[1], m[5], m[9], m[7], //
            m[2], m[6], m[10], m[11], //
            m[12], m[13], m[14], m[15],
        )
    }

    /// Convert a solver result.
    ///
    /// Refuses non-converged results with [`Error::NotConverged`]; non-finite
    /// entries and degenerate or non-rigid rotation blocks are
    /// [`Error::InvalidState`].
    pub fn reconcile(&self, result: &SolverResult) -> Result<ReconciledTransform> {
        if !result.converged {
            warn!("[Reconciler] Refusing non-converged solver result");
            return Err(Error::NotConverged);
        }
        if !result.is_finite() {
            return Err(Error::invalid("solver result contains non-finite values"));
        }

        let matrix = Self::reorder(&result.matrix);
        let block: Matrix3<f32> = matrix.fixed_view::<3, 3>(0, 0).into_owned();

        if let Some(tol) = self.orthonormality_tolerance {
            let deviation = (block.transpose() * block - Matrix3::identity()).amax();
            if deviation > tol || block.determinant() <= 0.0 {
                return Err(Error::invalid(format!(
                    "rotation block is not a proper rotation (deviation {:.2e})",
                    deviation
                )));
            }
        }

        let forward = Vector3::new(matrix[(0, 2)], matrix[(1, 2)], matrix[(2, 2)]);
        let up = Vector3::new(matrix[(0, 1)], matrix[(1, 1)], matrix[(2, 1)]);
        let rotation = look_rotation(forward, up)?;
        let translation = WorldPoint::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

        Ok(ReconciledTransform {
            rotation,
            translation,
            reference_centroid: WorldPoint::from(result.centroid_ref_before),
            moving_centroid: WorldPoint::from(result.centroid_target_before),
        })
    }
}

/// Rotation whose z axis is `forward` and whose y axis is `up` projected
/// orthogonal to it.
fn look_rotation(forward: Vector3<f32>, up: Vector3<f32>) -> Result<UnitQuaternion<f32>> {
    if forward.norm() < MIN_BASIS_NORM {
        return Err(Error::invalid("forward column is degenerate"));
    }
    let z = forward.normalize();
    let x = up.cross(&z);
    if x.norm() < MIN_BASIS_NORM {
        return Err(Error::invalid("up column is degenerate or parallel to forward"));
    }
    let x = x.normalize();
    let y = z.cross(&x);
    let basis = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]));
    Ok(UnitQuaternion::from_rotation_matrix(&basis))
}

/// Rotation and translation extracted from one solver result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReconciledTransform {
    /// Rotation extracted from the matrix (`R`)
    pub rotation: UnitQuaternion<f32>,
    /// Translation column of the matrix (`t`)
    pub translation: WorldPoint,
    /// Reference cloud centroid reported by the solver
    pub reference_centroid: WorldPoint,
    /// Moving cloud centroid reported by the solver
    pub moving_centroid: WorldPoint,
}

impl ReconciledTransform {
    /// Rotation applied to the consumer (`R⁻¹`).
    #[inline]
    pub fn applied_rotation(&self) -> UnitQuaternion<f32> {
        self.rotation.inverse()
    }

    /// `R⁻¹` with the raw solver translation, no pivot compensation.
    pub fn local(&self) -> RigidTransform {
        RigidTransform::new(self.applied_rotation(), self.translation)
    }

    /// `R⁻¹` with translation `t + R⁻¹ · pivot`.
    pub fn about_pivot(&self, pivot: WorldPoint) -> RigidTransform {
        let inv = self.applied_rotation();
        let offset = WorldPoint::from(inv * pivot.to_vector());
        RigidTransform::new(inv, self.translation + offset)
    }

    /// Move a whole frame: `rotation = R⁻¹ · rotation`,
    /// `position = t + R⁻¹ · position`. Scale is kept.
    pub fn apply_to_frame(&self, frame: &FieldFrame) -> FieldFrame {
        let moved = self.about_pivot(frame.position);
        FieldFrame::new(moved.translation, moved.rotation * frame.rotation, frame.scale)
    }
}
