//! Unified configuration loading for Rupa.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ```rust,ignore
//! use rupa::config::RupaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = RupaConfig::load_default()?;
//!
//! let store = ChunkStore::new(config.to_store_config())?;
//! let aligner = LocalAligner::new(solver, config.to_aligner_settings())?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`StoreSection`] | Cell size, FIFO capacity, reference query |
//! | [`ScanSection`] | Range cutoff, shuffle, seed |
//! | [`DeformSection`] | Falloff, blend mode, accumulation, selection index |
//! | [`SolverSection`] | Values passed through to the solver |
//! | [`ReconcileSection`] | Orthonormality check of solver rotations |
//!
//! ## Example YAML
//!
//! ```yaml
//! store:
//!   chunk_size: 1.0
//!   max_points_per_chunk: 256
//!
//! deform:
//!   falloff: smoothstep
//!   inner_radius: 0.02
//!   falloff_radius: 0.08
//!   accumulate: true
//! ```

mod defaults;
mod deform;
mod error;
mod reconcile;
mod rupa;
mod scan;
mod solver;
mod store;

pub use error::ConfigLoadError;
pub use rupa::RupaConfig;

pub use deform::{DeformSection, FalloffKind};
pub use reconcile::ReconcileSection;
pub use scan::ScanSection;
pub use solver::SolverSection;
pub use store::StoreSection;
