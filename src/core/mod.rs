//! Core geometry types shared by every module.
//!
//! - [`WorldPoint`] - 3D position in meters
//! - [`ChunkKey`] - integer cell coordinates on the store grid
//! - [`Aabb`] - center + size bounding box
//! - [`SelectionVolume`] - sphere or box picked for a local alignment
//! - [`FieldFrame`] - local-to-world pose of a point field owner

mod bounds;
mod frame;
mod point;
mod selection;

pub use bounds::Aabb;
pub use frame::FieldFrame;
pub use point::{ChunkKey, WorldPoint, centroid};
pub use selection::SelectionVolume;
