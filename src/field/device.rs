//! Device-side copy of a point field.
//!
//! The renderer owns the authoritative copy of splat positions. The engine
//! works on a CPU mirror and synchronizes through [`DeviceBuffer`]; both
//! directions are full, blocking copies.

use crate::core::WorldPoint;
use crate::error::{Error, Result};

/// Position buffer living on a render device.
pub trait DeviceBuffer: Send {
    /// Number of positions in the buffer
    fn len(&self) -> usize;

    /// True if the buffer holds no positions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the whole buffer into `out` (blocking).
    ///
    /// `out` must have exactly `len()` elements.
    fn download(&self, out: &mut [WorldPoint]) -> Result<()>;

    /// Overwrite the whole buffer with `data` (blocking).
    ///
    /// `data` must have exactly `len()` elements.
    fn upload(&mut self, data: &[WorldPoint]) -> Result<()>;
}

/// In-memory [`DeviceBuffer`] for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct HostBuffer {
    data: Option<Vec<WorldPoint>>,
    uploads: usize,
}

impl HostBuffer {
    /// Create a buffer holding `positions`
    pub fn new(positions: Vec<WorldPoint>) -> Self {
        Self {
            data: Some(positions),
            uploads: 0,
        }
    }

    /// Buffer that was never allocated; every transfer fails.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Current contents, if allocated
    pub fn positions(&self) -> Option<&[WorldPoint]> {
        self.data.as_deref()
    }

    /// Number of successful uploads so far
    pub fn upload_count(&self) -> usize {
        self.uploads
    }
}

impl DeviceBuffer for HostBuffer {
    fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    fn download(&self, out: &mut [WorldPoint]) -> Result<()> {
        let data = self
            .data
            .as_ref()
            .ok_or_else(|| Error::invalid("device buffer is not initialized"))?;
        if data.len() != out.len() {
            return Err(Error::invalid(format!(
                "download length mismatch: device has {}, mirror has {}",
                data.len(),
                out.len()
            )));
        }
        out.copy_from_slice(data);
        Ok(())
    }

    fn upload(&mut self, data: &[WorldPoint]) -> Result<()> {
        let target = self
            .data
            .as_mut()
            .ok_or_else(|| Error::invalid("device buffer is not initialized"))?;
        if target.len() != data.len() {
            return Err(Error::invalid(format!(
                "upload length mismatch: device has {}, mirror has {}",
                target.len(),
                data.len()
            )));
        }
        target.copy_from_slice(data);
        self.uploads += 1;
        Ok(())
    }
}
