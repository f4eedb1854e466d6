//! Bounded-memory accumulation of streamed points.
//!
//! Points are bucketed into cubic cells of `chunk_size` meters. Each cell
//! keeps at most `max_points_per_chunk` points, dropping the oldest first,
//! so memory stays bounded no matter how long a scan session runs.
//!
//! ```rust
//! use rupa::chunk::ChunkStore;
//! use rupa::core::WorldPoint;
//!
//! let mut store = ChunkStore::with_params(1.0, 2).unwrap();
//! store.insert(WorldPoint::new(0.1, 0.0, 0.0));
//! store.insert(WorldPoint::new(0.2, 0.0, 0.0));
//! store.insert(WorldPoint::new(0.9, 0.0, 0.0));
//! assert_eq!(store.point_count(), 2);
//! ```

mod buffer;
mod config;
mod store;

pub use buffer::Chunk;
pub use config::ChunkStoreConfig;
pub use store::ChunkStore;
