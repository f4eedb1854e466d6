//! Local and whole-frame alignment pipelines.
//!
//! ## Local alignment
//!
//! ```text
//! device ──read_back──► PointField ──FieldIndex──► selected indices
//!                                                       │ flatten
//! reference points ───────────────────────────► AlignmentSolver
//!                                                       │ SolverResult
//!                                            TransformReconciler
//!                                                       │ RigidTransform
//!                      DeformationEngine ◄──────────────┘
//!                              │
//! device ◄──write_back── PointField
//! ```
//!
//! ## Whole-frame alignment
//!
//! Registers every field point against the reference and moves the owner
//! frame instead of the points.

use log::{debug, info, warn};

use crate::core::{FieldFrame, SelectionVolume, WorldPoint};
use crate::deform::{ApplyParams, ApplyReport, DeformationEngine, FalloffCenter, rest_centroid};
use crate::error::{Error, Result};
use crate::field::{DeviceBuffer, FieldIndex, PointField};
use crate::reconcile::{ReconciledTransform, RigidTransform, TransformReconciler};
use crate::solver::{AlignmentRequest, AlignmentSolver, SolverParams};

/// Settings of a [`LocalAligner`].
#[derive(Clone, Debug, PartialEq)]
pub struct AlignerSettings {
    /// Parameters forwarded to the solver
    pub solver: SolverParams,
    /// Deformation parameters of local alignment
    pub apply: ApplyParams,
    /// Add `R⁻¹ · pivot` to the translation of local blends
    pub compensate_pivot: bool,
    /// Cell size of the selection index (meters)
    pub index_cell_size: f32,
    /// Orthonormality tolerance of the reconciler (`None` accepts any block)
    pub orthonormality_tolerance: Option<f32>,
}

impl Default for AlignerSettings {
    fn default() -> Self {
        Self {
            solver: SolverParams::default(),
            apply: ApplyParams::default(),
            compensate_pivot: false,
            index_cell_size: 0.25,
            orthonormality_tolerance: Some(1e-3),
        }
    }
}

/// Why a local alignment did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The selection volume is degenerate or picked no field point
    EmptySelection,
    /// No reference points were supplied
    EmptyTarget,
}

/// Result of one local alignment.
#[derive(Clone, Debug, PartialEq)]
pub enum AlignmentOutcome {
    /// Nothing to align; the field was not touched
    Skipped(SkipReason),
    /// The transform was blended into the field and uploaded
    Applied {
        /// Field points handed to the solver
        selected: usize,
        /// Reference points handed to the solver
        target: usize,
        /// Solver output after reconciliation
        reconciled: ReconciledTransform,
        /// Transform that was blended
        transform: RigidTransform,
        /// Deformation report
        report: ApplyReport,
    },
}

impl AlignmentOutcome {
    /// True if the field was deformed
    pub fn is_applied(&self) -> bool {
        matches!(self, AlignmentOutcome::Applied { .. })
    }
}

/// Drives selection, solver, reconciliation, and deformation for one field.
pub struct LocalAligner<S: AlignmentSolver> {
    solver: S,
    reconciler: TransformReconciler,
    engine: DeformationEngine,
    index: FieldIndex,
    settings: AlignerSettings,
}

impl<S: AlignmentSolver> LocalAligner<S> {
    /// Create an aligner around `solver`.
    pub fn new(solver: S, settings: AlignerSettings) -> Result<Self> {
        Ok(Self {
            solver,
            reconciler: TransformReconciler::new(settings.orthonormality_tolerance),
            engine: DeformationEngine::new(),
            index: FieldIndex::new(settings.index_cell_size)?,
            settings,
        })
    }

    /// Use `engine` (for example one wired to a monitor).
    pub fn with_engine(mut self, engine: DeformationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Settings in use
    pub fn settings(&self) -> &AlignerSettings {
        &self.settings
    }

    /// Wrapped solver
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Wrapped solver (mutable)
    pub fn solver_mut(&mut self) -> &mut S {
        &mut self.solver
    }

    /// Deformation engine
    pub fn engine(&self) -> &DeformationEngine {
        &self.engine
    }

    /// Align the selected part of `field` onto `target` and blend the
    /// result into the surrounding points.
    ///
    /// The device copy is read before selection and written after the
    /// blend. A non-converged solver result is refused with
    /// [`Error::NotConverged`] and leaves the field as read back.
    pub fn align_local(
        &mut self,
        field: &mut PointField,
        device: &mut dyn DeviceBuffer,
        selection: &SelectionVolume,
        target: &[WorldPoint],
    ) -> Result<AlignmentOutcome> {
        field.read_back(device)?;

        let indices = self.index.select(field, selection);
        if indices.is_empty() {
            debug!("[Align] Selection is empty, nothing to align");
            return Ok(AlignmentOutcome::Skipped(SkipReason::EmptySelection));
        }
        if target.is_empty() {
            warn!("[Align] No reference points, skipping local alignment");
            return Ok(AlignmentOutcome::Skipped(SkipReason::EmptyTarget));
        }

        let source: Vec<WorldPoint> = indices
            .iter()
            .filter_map(|&i| field.world_current(i))
            .collect();
        debug!(
            "[Align] Solving {} selected points against {} reference points",
            source.len(),
            target.len()
        );

        let request = AlignmentRequest::new(target, &source, self.settings.solver.clone());
        let result = self.solver.solve(&request)?;
        let reconciled = self.reconciler.reconcile(&result)?;

        let transform = if self.settings.compensate_pivot {
            reconciled.about_pivot(field.frame().position)
        } else {
            reconciled.local()
        };

        let center = match self.settings.apply.center {
            FalloffCenter::SelectionCenter => selection.center(),
            FalloffCenter::SelectedCentroid => rest_centroid(field, &indices)
                .ok_or_else(|| Error::invalid("selected indices fell outside the field"))?,
        };

        let report = self
            .engine
            .apply_about(field, center, &transform, &self.settings.apply)?;
        field.write_back(device)?;

        Ok(AlignmentOutcome::Applied {
            selected: source.len(),
            target: target.len(),
            reconciled,
            transform,
            report,
        })
    }

    /// Register the whole field onto `target` and move its owner frame.
    ///
    /// Returns the new frame. Points are not modified.
    pub fn align_frame(&mut self, field: &mut PointField, target: &[WorldPoint]) -> Result<FieldFrame> {
        if field.is_empty() || target.is_empty() {
            return Ok(*field.frame());
        }
        let source: Vec<WorldPoint> = (0..field.len())
            .filter_map(|i| field.world_current(i))
            .collect();

        let request = AlignmentRequest::new(target, &source, self.settings.solver.clone());
        let result = self.solver.solve(&request)?;
        let reconciled = self.reconciler.reconcile(&result)?;

        let frame = reconciled.apply_to_frame(field.frame());
        field.set_frame(frame)?;
        info!(
            "[Align] Whole-frame alignment moved pivot to ({:.3}, {:.3}, {:.3})",
            frame.position.x, frame.position.y, frame.position.z
        );
        Ok(frame)
    }

    /// Restore the resting shape and upload it.
    pub fn reset(&self, field: &mut PointField, device: &mut dyn DeviceBuffer) -> Result<()> {
        if device.len() != field.len() {
            return Err(Error::invalid(format!(
                "device holds {} points, field holds {}",
                device.len(),
                field.len()
            )));
        }
        field.reset();
        field.write_back(device)
    }
}
