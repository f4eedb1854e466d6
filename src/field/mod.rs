//! Point field storage and device synchronization.
//!
//! - [`PointField`] - rest/current buffers with a Clean/Dirty state
//! - [`DeviceBuffer`] - seam to the renderer-owned copy, [`HostBuffer`] for headless use
//! - [`FieldIndex`] - grid-pruned selection of field indices

mod device;
mod index;
mod point_field;

pub use device::{DeviceBuffer, HostBuffer};
pub use index::FieldIndex;
pub use point_field::{FieldState, PointField};
