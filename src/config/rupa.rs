//! Main RupaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::AlignerSettings;
use crate::chunk::ChunkStoreConfig;
use crate::deform::ApplyParams;
use crate::reconcile::TransformReconciler;
use crate::scan::ScanConfig;
use crate::solver::SolverParams;

use super::deform::DeformSection;
use super::error::ConfigLoadError;
use super::reconcile::ReconcileSection;
use super::scan::ScanSection;
use super::solver::SolverSection;
use super::store::StoreSection;

/// Full Rupa configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct RupaConfig {
    /// Chunk store settings
    #[serde(default)]
    pub store: StoreSection,

    /// Scan ingestion settings
    #[serde(default)]
    pub scan: ScanSection,

    /// Deformation settings
    #[serde(default)]
    pub deform: DeformSection,

    /// Solver pass-through settings
    #[serde(default)]
    pub solver: SolverSection,

    /// Solver-output validation settings
    #[serde(default)]
    pub reconcile: ReconcileSection,
}

impl RupaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to ChunkStoreConfig
    pub fn to_store_config(&self) -> ChunkStoreConfig {
        self.store.to_store_config()
    }

    /// Convert to ScanConfig
    pub fn to_scan_config(&self) -> ScanConfig {
        self.scan.to_scan_config()
    }

    /// Fixed shuffle seed, if configured
    pub fn scan_seed(&self) -> Option<u64> {
        self.scan.seed
    }

    /// Convert to ApplyParams
    pub fn to_apply_params(&self) -> ApplyParams {
        self.deform.to_apply_params()
    }

    /// Convert to SolverParams
    pub fn to_solver_params(&self) -> SolverParams {
        self.solver.to_solver_params()
    }

    /// Build the transform reconciler
    pub fn reconciler(&self) -> TransformReconciler {
        self.reconcile.to_reconciler()
    }

    /// Cell size of the selection index
    pub fn index_cell_size(&self) -> f32 {
        self.deform.index_cell_size
    }

    /// Settings for a [`LocalAligner`](crate::align::LocalAligner)
    pub fn to_aligner_settings(&self) -> AlignerSettings {
        AlignerSettings {
            solver: self.to_solver_params(),
            apply: self.to_apply_params(),
            compensate_pivot: self.deform.compensate_pivot,
            index_cell_size: self.deform.index_cell_size,
            orthonormality_tolerance: self.reconcile.orthonormality_tolerance,
        }
    }
}
