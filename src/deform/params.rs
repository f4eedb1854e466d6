//! Parameters and report of one deformation pass.

use serde::{Deserialize, Serialize};

use super::falloff::Falloff;
use crate::field::FieldState;

/// How a transform is blended into each affected point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `current = rest + offset * strength` (translation only)
    #[default]
    Translation,
    /// Rotation slerped and translation lerped by strength, about the
    /// falloff center
    Rigid,
}

/// Where falloff distances are measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalloffCenter {
    /// Center of the selection volume
    #[default]
    SelectionCenter,
    /// Centroid of the selected points' resting world positions
    SelectedCentroid,
}

/// Deformation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplyParams {
    /// Distance-to-strength mapping
    pub falloff: Falloff,

    /// Commit blended positions into the resting shape.
    /// Default: true
    pub accumulate: bool,

    /// Blend mode.
    /// Default: translation only
    pub blend: BlendMode,

    /// Falloff center.
    /// Default: selection center
    pub center: FalloffCenter,
}

impl Default for ApplyParams {
    fn default() -> Self {
        Self {
            falloff: Falloff::default(),
            accumulate: true,
            blend: BlendMode::Translation,
            center: FalloffCenter::SelectionCenter,
        }
    }
}

impl ApplyParams {
    /// Linear falloff with the given radius and default options.
    pub fn linear(radius: f32) -> Self {
        Self {
            falloff: Falloff::linear(radius),
            ..Self::default()
        }
    }

    /// Set the falloff
    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Set accumulation
    pub fn with_accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }

    /// Set blend mode
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Set falloff center
    pub fn with_center(mut self, center: FalloffCenter) -> Self {
        self.center = center;
        self
    }
}

/// Outcome of one apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ApplyReport {
    /// Sequence number of this apply on its engine (0 for no-ops)
    pub sequence: u64,
    /// Points that received a positive strength
    pub affected: usize,
    /// Points in the field
    pub total: usize,
    /// Field state after the apply
    pub state: FieldState,
}

impl ApplyReport {
    /// True if the apply changed nothing.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.affected == 0
    }
}
