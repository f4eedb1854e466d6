//! Falloff-blended local deformation of a point field.
//!
//! Every apply walks the whole field once. Each point's distance is
//! measured from its resting world position to the falloff center:
//!
//! - at or beyond the falloff reach: `current = rest`
//! - otherwise: `current = rest + offset * strength` (or the rigid blend)
//!
//! With accumulation, touched points also commit `rest = current`, so the
//! next apply blends from the deformed shape. Without it, `rest` never
//! changes and applying the same transform twice gives the same result.

use crossbeam_channel::Sender;
use log::debug;

use super::diagnostics::{AffectedCount, AffectedCountMonitor};
use super::params::{ApplyParams, ApplyReport, BlendMode, FalloffCenter};
use crate::core::{SelectionVolume, WorldPoint, centroid};
use crate::error::{Error, Result};
use crate::field::{FieldState, PointField};
use crate::reconcile::RigidTransform;

/// Rigid blends below this strength leave the point at rest.
pub const RIGID_MIN_STRENGTH: f32 = 1e-5;

/// Applies rigid transforms to a point field with spatial falloff.
#[derive(Debug, Default)]
pub struct DeformationEngine {
    sequence: u64,
    reporter: Option<Sender<AffectedCount>>,
}

impl DeformationEngine {
    /// Create an engine without diagnostics
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish affected counts to `monitor`.
    pub fn with_monitor(mut self, monitor: &AffectedCountMonitor) -> Self {
        self.reporter = Some(monitor.sender());
        self
    }

    /// Number of non-empty applies so far
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Blend `transform` into `field` around `selection`.
    ///
    /// An empty field or empty selection is a no-op. With
    /// [`FalloffCenter::SelectedCentroid`], the center is the centroid of the
    /// selected points' resting world positions and an empty pick is a
    /// no-op.
    pub fn apply(
        &mut self,
        field: &mut PointField,
        selection: &SelectionVolume,
        transform: &RigidTransform,
        params: &ApplyParams,
    ) -> Result<ApplyReport> {
        check_transform(transform)?;
        if field.is_empty() || selection.is_empty() {
            return Ok(noop_report(field));
        }

        let center = match params.center {
            FalloffCenter::SelectionCenter => selection.center(),
            FalloffCenter::SelectedCentroid => {
                let indices = field.select_indices(selection);
                match rest_centroid(field, &indices) {
                    Some(c) => c,
                    None => return Ok(noop_report(field)),
                }
            }
        };
        self.apply_about(field, center, transform, params)
    }

    /// Blend `transform` into `field` with falloff measured from `center`
    /// (world space).
    pub fn apply_about(
        &mut self,
        field: &mut PointField,
        center: WorldPoint,
        transform: &RigidTransform,
        params: &ApplyParams,
    ) -> Result<ApplyReport> {
        check_transform(transform)?;
        if !center.is_finite() {
            return Err(Error::invalid("falloff center is not finite"));
        }
        if field.is_empty() {
            return Ok(noop_report(field));
        }

        let frame = *field.frame();
        let offset_local = frame.inverse_transform_vector(transform.translation);
        let falloff = params.falloff;
        let accumulate = params.accumulate;
        let total = field.len();
        let mut affected = 0usize;

        let (rest, current) = field.buffers_mut();
        for (base, live) in rest.iter_mut().zip(current.iter_mut()) {
            let world = frame.transform_point(*base);
            let strength = falloff.strength(world.distance(&center));

            let blended = match params.blend {
                BlendMode::Translation if strength > 0.0 => {
                    Some(*base + offset_local * strength)
                }
                BlendMode::Rigid if strength > RIGID_MIN_STRENGTH => {
                    let rotation = transform.rotation.powf(strength);
                    let relative = (world - center).to_vector();
                    let moved = WorldPoint::from(rotation * relative)
                        + center
                        + transform.translation * strength;
                    Some(frame.inverse_transform_point(moved))
                }
                _ => None,
            };

            match blended {
                Some(position) => {
                    affected += 1;
                    *live = position;
                    if accumulate {
                        *base = position;
                    }
                }
                None => *live = *base,
            }
        }

        let state = if accumulate || affected == 0 {
            FieldState::Clean
        } else {
            FieldState::Dirty
        };
        field.mark_blended(state);

        self.sequence += 1;
        let report = ApplyReport {
            sequence: self.sequence,
            affected,
            total,
            state,
        };
        if let Some(tx) = &self.reporter {
            tx.try_send(AffectedCount {
                sequence: report.sequence,
                affected,
            })
            .ok();
        }
        debug!(
            "[Deformation] Apply #{}: {}/{} points within {:.3}m (accumulate={})",
            report.sequence,
            affected,
            total,
            falloff.reach(),
            accumulate
        );
        Ok(report)
    }
}

fn check_transform(transform: &RigidTransform) -> Result<()> {
    if transform.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid("transform contains non-finite values"))
    }
}

fn noop_report(field: &PointField) -> ApplyReport {
    ApplyReport {
        sequence: 0,
        affected: 0,
        total: field.len(),
        state: field.state(),
    }
}

/// Centroid of the resting world positions at `indices`.
pub(crate) fn rest_centroid(field: &PointField, indices: &[usize]) -> Option<WorldPoint> {
    let points: Vec<WorldPoint> = indices.iter().filter_map(|&i| field.world_rest(i)).collect();
    if points.is_empty() {
        None
    } else {
        Some(centroid(&points))
    }
}
