//! Deformation configuration section.

use serde::{Deserialize, Serialize};

use crate::deform::{ApplyParams, BlendMode, Falloff, FalloffCenter};

use super::defaults;

/// Falloff curve selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalloffKind {
    /// `1 - d / r`
    #[default]
    Linear,
    /// Full strength inside `inner_radius`, smoothstep out to `falloff_radius`
    Smoothstep,
}

/// Deformation and selection settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeformSection {
    /// Falloff curve
    #[serde(default)]
    pub falloff: FalloffKind,

    /// Outer falloff radius (meters)
    #[serde(default = "defaults::falloff_radius")]
    pub falloff_radius: f32,

    /// Full-strength radius of the smoothstep curve (meters)
    #[serde(default)]
    pub inner_radius: f32,

    /// Commit blended positions as the new rest pose
    #[serde(default = "defaults::enabled")]
    pub accumulate: bool,

    /// Translation-only or rigid blend
    #[serde(default)]
    pub blend: BlendMode,

    /// Where falloff distances are measured from
    #[serde(default)]
    pub falloff_center: FalloffCenter,

    /// Add `R⁻¹ · pivot` to local blend translations
    #[serde(default)]
    pub compensate_pivot: bool,

    /// Cell size of the selection index (meters)
    #[serde(default = "defaults::index_cell_size")]
    pub index_cell_size: f32,
}

impl Default for DeformSection {
    fn default() -> Self {
        Self {
            falloff: FalloffKind::Linear,
            falloff_radius: 0.05,
            inner_radius: 0.0,
            accumulate: true,
            blend: BlendMode::Translation,
            falloff_center: FalloffCenter::SelectionCenter,
            compensate_pivot: false,
            index_cell_size: 0.25,
        }
    }
}

impl DeformSection {
    /// Build the falloff curve
    pub fn to_falloff(&self) -> Falloff {
        match self.falloff {
            FalloffKind::Linear => Falloff::linear(self.falloff_radius),
            FalloffKind::Smoothstep => Falloff::smoothstep(self.inner_radius, self.falloff_radius),
        }
    }

    /// Convert to ApplyParams
    pub fn to_apply_params(&self) -> ApplyParams {
        ApplyParams::default()
            .with_falloff(self.to_falloff())
            .with_accumulate(self.accumulate)
            .with_blend(self.blend)
            .with_center(self.falloff_center)
    }
}
