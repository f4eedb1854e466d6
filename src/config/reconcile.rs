//! Reconciliation configuration section.

use serde::{Deserialize, Serialize};

use crate::reconcile::TransformReconciler;

use super::defaults;

/// Solver-output validation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileSection {
    /// Max deviation of `RᵀR` from identity; `null` accepts any block
    #[serde(default = "defaults::orthonormality_tolerance")]
    pub orthonormality_tolerance: Option<f32>,
}

impl Default for ReconcileSection {
    fn default() -> Self {
        Self {
            orthonormality_tolerance: Some(1e-3),
        }
    }
}

impl ReconcileSection {
    /// Build the reconciler
    pub fn to_reconciler(&self) -> TransformReconciler {
        TransformReconciler::new(self.orthonormality_tolerance)
    }
}
