//! Chunk store configuration section.

use serde::{Deserialize, Serialize};

use crate::chunk::ChunkStoreConfig;

use super::defaults;

/// Chunk store and reference-query settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Cell edge length (meters)
    #[serde(default = "defaults::chunk_size")]
    pub chunk_size: f32,

    /// FIFO capacity of each cell
    #[serde(default = "defaults::max_points_per_chunk")]
    pub max_points_per_chunk: usize,

    /// Radius of the reference query around a selection (meters)
    #[serde(default = "defaults::query_radius")]
    pub query_radius: f32,

    /// Cap on cells returned by the reference query
    #[serde(default = "defaults::max_query_chunks")]
    pub max_query_chunks: usize,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            chunk_size: 1.0,
            max_points_per_chunk: 256,
            query_radius: 10.0,
            max_query_chunks: 15,
        }
    }
}

impl StoreSection {
    /// Convert to ChunkStoreConfig
    pub fn to_store_config(&self) -> ChunkStoreConfig {
        ChunkStoreConfig::new(self.chunk_size, self.max_points_per_chunk)
    }
}
