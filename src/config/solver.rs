//! Solver pass-through section.

use serde::{Deserialize, Serialize};

use crate::solver::SolverParams;

use super::defaults;

/// Parameters forwarded to the external solver
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverSection {
    /// Voxel-downsample both clouds
    #[serde(default = "defaults::enabled")]
    pub do_downsample: bool,

    /// Downsampling voxel edge (meters)
    #[serde(default = "defaults::voxel_size")]
    pub voxel_size: f32,

    /// Fine registration iteration cap
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: u32,

    /// Fine registration convergence epsilon
    #[serde(default = "defaults::epsilon")]
    pub epsilon: f32,

    /// Run global registration first
    #[serde(default)]
    pub use_fgr: bool,

    /// Global registration voxel edge (meters)
    #[serde(default = "defaults::voxel_size")]
    pub voxel_size_fgr: f32,
}

impl Default for SolverSection {
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

impl SolverSection {
    /// Convert to SolverParams
    pub fn to_solver_params(&self) -> SolverParams {
        SolverParams::new()
            .with_downsample(self.do_downsample, self.voxel_size)
            .with_max_iterations(self.max_iterations)
            .with_epsilon(self.epsilon)
            .with_fgr(self.use_fgr, self.voxel_size_fgr)
    }
}
