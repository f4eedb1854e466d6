//! # Rupa
//!
//! Bounded streaming point storage and falloff-blended local deformation of
//! large splat fields.
//!
//! ## Overview
//!
//! Rupa sits between a depth sensor, an external registration solver, and a
//! renderer that owns millions of splats:
//!
//! - **Chunk store**: streamed sensor hits bucketed into a cubic grid, each
//!   cell a bounded FIFO, with cheap and exact bounds queries
//! - **Point field**: rest/current dual buffers mirrored to a device copy
//! - **Deformation**: a rigid transform blended into the points around a
//!   selection with a distance falloff
//! - **Reconciliation**: solver matrices remapped into the field's
//!   convention before they are applied
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rupa::{ChunkStore, LocalAligner, PointField, RupaConfig, SelectionVolume};
//!
//! let config = RupaConfig::load_default()?;
//! let mut store = ChunkStore::new(config.to_store_config())?;
//! let mut ingestor = ScanIngestor::new(config.to_scan_config(), config.scan_seed());
//!
//! // Every sensor frame
//! ingestor.ingest(&mut store, sensor_origin, &hits);
//!
//! // On a user pick
//! let target = store.query_radius(pick, config.store.query_radius, config.store.max_query_chunks);
//! let mut aligner = LocalAligner::new(solver, config.to_aligner_settings())?;
//! let outcome = aligner.align_local(&mut field, &mut device, &selection, &target)?;
//! ```
//!
//! ## Coordinate System
//!
//! Store points, selections, and solver clouds are in world space (meters).
//! Field buffers are in the owner's local frame ([`FieldFrame`]); distances
//! are always measured in world space.

#![warn(missing_docs)]

// Core types
pub mod core;

// Streaming point storage
pub mod chunk;

// Point field buffers and device mirroring
pub mod field;

// Falloff-blended deformation
pub mod deform;

// Solver output reconciliation
pub mod reconcile;

// External solver seam
pub mod solver;

// Sensor frame ingestion
pub mod scan;

// Selection -> solver -> deformation pipeline
pub mod align;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use core::{Aabb, ChunkKey, FieldFrame, SelectionVolume, WorldPoint};

pub use align::{AlignerSettings, AlignmentOutcome, LocalAligner, SkipReason};
pub use chunk::{ChunkStore, ChunkStoreConfig};
pub use config::{ConfigLoadError, RupaConfig};
pub use deform::{
    AffectedCount, AffectedCountMonitor, ApplyParams, ApplyReport, BlendMode, DeformationEngine,
    Falloff, FalloffCenter,
};
pub use error::{Error, Result};
pub use field::{DeviceBuffer, FieldIndex, FieldState, HostBuffer, PointField};
pub use reconcile::{ReconciledTransform, RigidTransform, SolverResult, TransformReconciler};
pub use scan::{ScanConfig, ScanIngestor, ScanStats};
pub use solver::{AlignmentRequest, AlignmentSolver, SolverParams};
