//! Configuration types for the chunk store.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Chunk store configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChunkStoreConfig {
    /// Edge length of one grid cell in meters
    pub chunk_size: f32,

    /// Points kept per cell before the oldest is evicted
    pub max_points_per_chunk: usize,
}

impl Default for ChunkStoreConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1.0,            // 1m cells
            max_points_per_chunk: 256, // ~3KB per cell
        }
    }
}

impl ChunkStoreConfig {
    /// Create a configuration
    pub fn new(chunk_size: f32, max_points_per_chunk: usize) -> Self {
        Self {
            chunk_size,
            max_points_per_chunk,
        }
    }

    /// Reject cell sizes that cannot key a grid and zero capacity.
    pub fn validate(&self) -> Result<()> {
        if !(self.chunk_size > 0.0 && self.chunk_size.is_finite()) {
            return Err(Error::invalid(format!(
                "chunk_size must be positive and finite, got {}",
                self.chunk_size
            )));
        }
        if self.max_points_per_chunk == 0 {
            return Err(Error::invalid("max_points_per_chunk must be at least 1"));
        }
        Ok(())
    }

    /// Upper bound on stored points for a given number of occupied cells
    pub fn max_points(&self, chunk_count: usize) -> usize {
        chunk_count.saturating_mul(self.max_points_per_chunk)
    }
}
