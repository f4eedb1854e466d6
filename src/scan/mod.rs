//! Per-frame ingestion of sensor hits into a [`ChunkStore`].
//!
//! The sensor collaborator produces a batch of world-space hits each frame
//! together with its own position. Hits at or beyond the trusted range are
//! dropped, the rest are optionally shuffled and inserted one by one.
//! Shuffling spreads a frame's contribution over each cell's FIFO so a
//! single frame does not evict a cell in scanline order.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::chunk::ChunkStore;
use crate::core::WorldPoint;

/// Scan ingestion settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Hits at or beyond this distance from the sensor are dropped (meters)
    pub max_scan_distance: f32,

    /// Shuffle each frame before insertion
    pub shuffle: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_scan_distance: 5.0,
            shuffle: true,
        }
    }
}

/// Outcome of one ingested frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Hits inserted into the store
    pub accepted: usize,
    /// Hits dropped (out of range or non-finite)
    pub rejected: usize,
}

/// Filters, shuffles, and stores sensor hits.
#[derive(Debug)]
pub struct ScanIngestor {
    config: ScanConfig,
    rng: StdRng,
}

impl ScanIngestor {
    /// Create an ingestor.
    ///
    /// With a seed the shuffle order is reproducible; without one the
    /// generator is seeded from the OS.
    pub fn new(config: ScanConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Settings in use
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Ingest one frame of hits observed from `origin`.
    pub fn ingest(
        &mut self,
        store: &mut ChunkStore,
        origin: WorldPoint,
        hits: &[WorldPoint],
    ) -> ScanStats {
        let max = self.config.max_scan_distance;
        let mut accepted: Vec<WorldPoint> = hits
            .iter()
            .copied()
            .filter(|p| p.is_finite() && p.distance(&origin) < max)
            .collect();

        if self.config.shuffle {
            shuffle_points(&mut accepted, &mut self.rng);
        }

        let stats = ScanStats {
            accepted: accepted.len(),
            rejected: hits.len() - accepted.len(),
        };
        store.extend(accepted);

        debug!(
            "[Scan] Frame ingested: {} accepted, {} rejected, {} chunks",
            stats.accepted,
            stats.rejected,
            store.chunk_count()
        );
        stats
    }
}

/// Shuffle points in place with the given generator.
pub fn shuffle_points<R: rand::Rng + ?Sized>(points: &mut [WorldPoint], rng: &mut R) {
    points.shuffle(rng);
}
