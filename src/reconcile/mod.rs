//! Transform reconciliation between solver output and the point field.
//!
//! An external solver returns a flat 16-float matrix computed about the
//! clouds' centroids. [`TransformReconciler`] turns it into a
//! [`RigidTransform`] the deformation engine can blend, or into a new
//! owner pose for whole-frame alignment.
//!
//! ## Convention
//!
//! The rotation extracted from the matrix (`R`) is applied to the consumer
//! as its inverse, `R⁻¹`. Whole-frame moves use
//!
//! ```text
//! rotation' = R⁻¹ · rotation
//! position' = t + R⁻¹ · pivot
//! ```

mod reconciler;
mod types;

pub use reconciler::{ReconciledTransform, TransformReconciler};
pub use types::{RigidTransform, SolverResult};
