//! Seam to the external alignment solver.
//!
//! Registration itself (ICP, GICP, FGR) is an opaque collaborator. This
//! module defines what it is handed and what it must return:
//!
//! - input: two flattened `[x0, y0, z0, x1, ...]` clouds plus [`SolverParams`]
//! - output: a [`SolverResult`] (converged flag, flat 4×4 matrix, and the
//!   two pre-alignment centroids)

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::error::Result;
use crate::reconcile::SolverResult;

/// Scalar parameters passed through to the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    /// Voxel-downsample both clouds before matching.
    /// Default: true
    pub do_downsample: bool,

    /// Downsampling voxel edge (meters).
    /// Default: 0.05
    pub voxel_size: f32,

    /// Iteration cap of the fine registration.
    /// Default: 50
    pub max_iterations: u32,

    /// Convergence epsilon of the fine registration.
    /// Default: 1e-6
    pub epsilon: f32,

    /// Run a global (FGR) registration before the fine one.
    /// Default: false
    pub use_fgr: bool,

    /// Voxel edge used for global registration features (meters).
    /// Default: 0.05
    pub voxel_size_fgr: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            do_downsample: true,
            voxel_size: 0.05,
            max_iterations: 50,
            epsilon: 1e-6,
            use_fgr: false,
            voxel_size_fgr: 0.05,
        }
    }
}

impl SolverParams {
    /// Create with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set downsampling
    pub fn with_downsample(mut self, enabled: bool, voxel_size: f32) -> Self {
        self.do_downsample = enabled;
        self.voxel_size = voxel_size;
        self
    }

    /// Set iteration cap
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set convergence epsilon
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enable or disable global registration
    pub fn with_fgr(mut self, enabled: bool, voxel_size: f32) -> Self {
        self.use_fgr = enabled;
        self.voxel_size_fgr = voxel_size;
        self
    }
}

/// One solver invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignmentRequest {
    /// Reference cloud, flattened
    pub target: Vec<f32>,
    /// Moving cloud (selected field points), flattened
    pub source: Vec<f32>,
    /// Solver parameters
    pub params: SolverParams,
}

impl AlignmentRequest {
    /// Build a request from world-space point clouds.
    pub fn new(target: &[WorldPoint], source: &[WorldPoint], params: SolverParams) -> Self {
        Self {
            target: flatten_points(target),
            source: flatten_points(source),
            params,
        }
    }

    /// Number of target points
    #[inline]
    pub fn target_len(&self) -> usize {
        self.target.len() / 3
    }

    /// Number of source points
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len() / 3
    }

    /// True if either cloud is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty() || self.source.is_empty()
    }
}

/// External registration algorithm.
pub trait AlignmentSolver: Send {
    /// Register `request.source` onto `request.target`.
    ///
    /// Failure to converge is reported through `SolverResult::converged`;
    /// `Err` is reserved for a solver that could not run at all.
    fn solve(&mut self, request: &AlignmentRequest) -> Result<SolverResult>;

    /// Convenience wrapper building the request from point slices.
    fn solve_points(
        &mut self,
        target: &[WorldPoint],
        source: &[WorldPoint],
        params: &SolverParams,
    ) -> Result<SolverResult> {
        let request = AlignmentRequest::new(target, source, params.clone());
        self.solve(&request)
    }
}

/// Flatten points into `[x0, y0, z0, x1, y1, z1, ...]`.
pub fn flatten_points(points: &[WorldPoint]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(points.len() * 3);
    for p in points {
        flat.extend_from_slice(&[p.x, p.y, p.z]);
    }
    flat
}
