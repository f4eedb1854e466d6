//! Rest/current dual buffer over an externally owned point set.

use serde::{Deserialize, Serialize};

use super::device::DeviceBuffer;
use crate::core::{FieldFrame, SelectionVolume, WorldPoint};
use crate::error::{Error, Result};

/// Whether the live positions match the resting shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldState {
    /// `current == rest` for every index
    #[default]
    Clean,
    /// At least one index differs from its resting position
    Dirty,
}

/// Fixed-length point field with a resting and a live buffer.
///
/// Both buffers are index-aligned with the device copy and stored in the
/// owner's local frame. `rest` is the authoritative base every deformation
/// blends from; `current` mirrors the last applied blend.
#[derive(Clone, Debug)]
pub struct PointField {
    rest: Vec<WorldPoint>,
    current: Vec<WorldPoint>,
    frame: FieldFrame,
    state: FieldState,
    revision: u64,
}

impl PointField {
    /// Create a clean field whose rest and current shapes are `positions`.
    pub fn new(positions: Vec<WorldPoint>, frame: FieldFrame) -> Result<Self> {
        check_frame(&frame)?;
        Ok(Self {
            current: positions.clone(),
            rest: positions,
            frame,
            state: FieldState::Clean,
            revision: 0,
        })
    }

    /// Create a clean field in an identity frame.
    pub fn from_positions(positions: Vec<WorldPoint>) -> Self {
        Self {
            current: positions.clone(),
            rest: positions,
            frame: FieldFrame::identity(),
            state: FieldState::Clean,
            revision: 0,
        }
    }

    /// Initialize both buffers with one read of the device copy.
    pub fn from_device(device: &dyn DeviceBuffer, frame: FieldFrame) -> Result<Self> {
        if device.is_empty() {
            return Err(Error::invalid("device buffer is empty or not initialized"));
        }
        let mut positions = vec![WorldPoint::ZERO; device.len()];
        device.download(&mut positions)?;
        Self::new(positions, frame)
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.rest.len()
    }

    /// True if the field has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Resting positions (local frame)
    #[inline]
    pub fn rest(&self) -> &[WorldPoint] {
        &self.rest
    }

    /// Live positions (local frame)
    #[inline]
    pub fn current(&self) -> &[WorldPoint] {
        &self.current
    }

    /// Owner frame
    #[inline]
    pub fn frame(&self) -> &FieldFrame {
        &self.frame
    }

    /// Replace the owner frame (after a whole-frame alignment, for example).
    pub fn set_frame(&mut self, frame: FieldFrame) -> Result<()> {
        check_frame(&frame)?;
        self.frame = frame;
        self.revision += 1;
        Ok(())
    }

    /// Clean/Dirty state
    #[inline]
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Counter bumped whenever live world positions may have changed.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Live position of index `i` in world space.
    #[inline]
    pub fn world_current(&self, i: usize) -> Option<WorldPoint> {
        self.current.get(i).map(|p| self.frame.transform_point(*p))
    }

    /// Resting position of index `i` in world space.
    #[inline]
    pub fn world_rest(&self, i: usize) -> Option<WorldPoint> {
        self.rest.get(i).map(|p| self.frame.transform_point(*p))
    }

    /// Copy `rest` into `current`, returning the field to `Clean`.
    pub fn reset(&mut self) {
        self.current.copy_from_slice(&self.rest);
        self.state = FieldState::Clean;
        self.revision += 1;
    }

    /// Refresh `current` from the device copy (blocking).
    ///
    /// On error neither buffer changes.
    pub fn read_back(&mut self, device: &dyn DeviceBuffer) -> Result<()> {
        if device.len() != self.len() {
            return Err(Error::invalid(format!(
                "device holds {} points, field holds {}",
                device.len(),
                self.len()
            )));
        }
        let mut fresh = vec![WorldPoint::ZERO; self.len()];
        device.download(&mut fresh)?;
        self.current = fresh;
        self.state = if self.current == self.rest {
            FieldState::Clean
        } else {
            FieldState::Dirty
        };
        self.revision += 1;
        Ok(())
    }

    /// Upload `current` to the device copy (blocking).
    pub fn write_back(&self, device: &mut dyn DeviceBuffer) -> Result<()> {
        if device.len() != self.len() {
            return Err(Error::invalid(format!(
                "device holds {} points, field holds {}",
                device.len(),
                self.len()
            )));
        }
        device.upload(&self.current)
    }

    /// Indices whose live world position lies inside `selection`.
    ///
    /// Linear scan over every point, ascending index order.
    pub fn select_indices(&self, selection: &SelectionVolume) -> Vec<usize> {
        if selection.is_empty() {
            return Vec::new();
        }
        self.current
            .iter()
            .enumerate()
            .filter(|(_, p)| selection.contains(self.frame.transform_point(**p)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Mutable access for the deformation engine.
    pub(crate) fn buffers_mut(&mut self) -> (&mut [WorldPoint], &mut [WorldPoint]) {
        (&mut self.rest, &mut self.current)
    }

    /// Record the outcome of a blend.
    pub(crate) fn mark_blended(&mut self, state: FieldState) {
        self.state = state;
        self.revision += 1;
    }
}

fn check_frame(frame: &FieldFrame) -> Result<()> {
    if frame.is_valid() {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "field frame must have a positive finite scale, got {}",
            frame.scale
        )))
    }
}
