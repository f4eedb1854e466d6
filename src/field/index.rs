//! Chunk-pruned selection over a point field.
//!
//! Selecting the solver's source points is a full pass over the field. The
//! index buckets field indices by the grid cell of their live world
//! position, so a selection only visits the cells its bounding box
//! overlaps. The result is identical to [`PointField::select_indices`].

use std::collections::HashMap;

use log::debug;

use super::point_field::PointField;
use crate::core::{Aabb, ChunkKey, SelectionVolume};
use crate::error::{Error, Result};

/// Uniform grid hash over field indices.
#[derive(Clone, Debug)]
pub struct FieldIndex {
    cell_size: f32,
    buckets: HashMap<ChunkKey, Vec<usize>>,
    built_revision: Option<u64>,
}

impl FieldIndex {
    /// Create an empty index with cubic cells of `cell_size` meters.
    pub fn new(cell_size: f32) -> Result<Self> {
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(Error::invalid(format!(
                "index cell size must be positive and finite, got {}",
                cell_size
            )));
        }
        Ok(Self {
            cell_size,
            buckets: HashMap::new(),
            built_revision: None,
        })
    }

    /// Cell edge length
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// True if the index reflects the field's current revision.
    #[inline]
    pub fn is_current(&self, field: &PointField) -> bool {
        self.built_revision == Some(field.revision())
    }

    /// Re-bucket every point of `field`.
    pub fn rebuild(&mut self, field: &PointField) {
        self.buckets.clear();
        for i in 0..field.len() {
            if let Some(world) = field.world_current(i) {
                let key = ChunkKey::from_point(world, self.cell_size);
                self.buckets.entry(key).or_default().push(i);
            }
        }
        self.built_revision = Some(field.revision());
    }

    /// Indices whose live world position lies inside `selection`, ascending.
    ///
    /// Rebuilds first if the field changed since the last build.
    pub fn select(&mut self, field: &PointField, selection: &SelectionVolume) -> Vec<usize> {
        if selection.is_empty() || field.is_empty() {
            return Vec::new();
        }
        if !self.is_current(field) {
            self.rebuild(field);
        }

        let bounds = selection.aabb().expand(self.cell_size * 1e-4);
        let lo = ChunkKey::from_point(bounds.min(), self.cell_size);
        let hi = ChunkKey::from_point(bounds.max(), self.cell_size);

        let mut selected = Vec::new();
        let mut visit = |bucket: &Vec<usize>| {
            for &i in bucket {
                if let Some(world) = field.world_current(i) {
                    if selection.contains(world) {
                        selected.push(i);
                    }
                }
            }
        };

        if key_range_volume(&lo, &hi) <= self.buckets.len() as u64 {
            for ix in lo.ix..=hi.ix {
                for iy in lo.iy..=hi.iy {
                    for iz in lo.iz..=hi.iz {
                        if let Some(bucket) = self.buckets.get(&ChunkKey::new(ix, iy, iz)) {
                            visit(bucket);
                        }
                    }
                }
            }
        } else {
            for (key, bucket) in &self.buckets {
                let cell = Aabb::from_min_max(
                    key.min_corner(self.cell_size),
                    key.max_corner(self.cell_size),
                );
                if cell.intersects(&bounds) {
                    visit(bucket);
                }
            }
        }

        selected.sort_unstable();
        debug!(
            "[FieldIndex] Selected {} of {} points",
            selected.len(),
            field.len()
        );
        selected
    }
}

fn key_range_volume(lo: &ChunkKey, hi: &ChunkKey) -> u64 {
    let span = |a: i32, b: i32| (b as i64 - a as i64 + 1).max(0) as u64;
    span(lo.ix, hi.ix)
        .saturating_mul(span(lo.iy, hi.iy))
        .saturating_mul(span(lo.iz, hi.iz))
}
