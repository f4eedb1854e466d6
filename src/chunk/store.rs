//! Chunked, capacity-bounded spatial store.
//!
//! Every inserted point lands in the cell `floor(p / chunk_size)`. A cell
//! exists only once it has received a point, and only [`ChunkStore::clear`]
//! removes cells.
//!
//! ## Bounds strategies
//!
//! | Method | Visits | Result |
//! |--------|--------|--------|
//! | [`ChunkStore::approximate_bounds`] | cell keys | union of occupied cell volumes |
//! | [`ChunkStore::precise_bounds`] | every point | exact point extents |
//! | [`ChunkStore::precise_bounds_via_boundary_chunks`] | cells on the six boundary slabs | exact point extents |
//!
//! The boundary-slab strategy is exact because cell keys are monotonic in
//! each coordinate: the point with minimal x must sit in a cell whose x key
//! is the minimal x key, and likewise for the other five extremes.

use std::collections::HashMap;

use log::{info, trace, warn};

use super::buffer::Chunk;
use super::config::ChunkStoreConfig;
use crate::core::{Aabb, ChunkKey, WorldPoint};
use crate::error::Result;

/// Mapping from cell key to bounded point buffer.
#[derive(Clone, Debug)]
pub struct ChunkStore {
    config: ChunkStoreConfig,
    chunks: HashMap<ChunkKey, Chunk>,
}

impl ChunkStore {
    /// Create an empty store.
    ///
    /// Fails with `InvalidState` for a non-positive cell size or zero
    /// per-cell capacity.
    pub fn new(config: ChunkStoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            chunks: HashMap::new(),
        })
    }

    /// Shorthand for `new(ChunkStoreConfig::new(chunk_size, max_points_per_chunk))`
    pub fn with_params(chunk_size: f32, max_points_per_chunk: usize) -> Result<Self> {
        Self::new(ChunkStoreConfig::new(chunk_size, max_points_per_chunk))
    }

    /// Store configuration
    #[inline]
    pub fn config(&self) -> &ChunkStoreConfig {
        &self.config
    }

    /// Cell edge length
    #[inline]
    pub fn chunk_size(&self) -> f32 {
        self.config.chunk_size
    }

    /// Key of the cell a point would be stored in.
    #[inline]
    pub fn key_for(&self, point: WorldPoint) -> ChunkKey {
        ChunkKey::from_point(point, self.config.chunk_size)
    }

    /// Insert a point into its cell, evicting the cell's oldest point when
    /// the cell is full.
    ///
    /// Points that cannot be keyed (non-finite, or farther than `i32::MAX`
    /// cells from the origin) are dropped with a warning.
    pub fn insert(&mut self, point: WorldPoint) {
        let Some(key) = ChunkKey::try_from_point(point, self.config.chunk_size) else {
            warn!(
                "[ChunkStore] Dropping point ({}, {}, {}) outside the keyable grid",
                point.x, point.y, point.z
            );
            return;
        };
        let capacity = self.config.max_points_per_chunk;
        self.chunks
            .entry(key)
            .or_insert_with(|| Chunk::new(capacity))
            .push(point);
    }

    /// Insert many points in order.
    pub fn extend<I: IntoIterator<Item = WorldPoint>>(&mut self, points: I) {
        for point in points {
            self.insert(point);
        }
    }

    /// Drop every cell.
    pub fn clear(&mut self) {
        if self.chunks.is_empty() {
            return;
        }
        info!(
            "[ChunkStore] Cleared {} chunks ({} points)",
            self.chunks.len(),
            self.point_count()
        );
        self.chunks.clear();
    }

    /// Number of occupied cells
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total number of stored points
    pub fn point_count(&self) -> usize {
        self.chunks.values().map(Chunk::len).sum()
    }

    /// True if no cell holds a point
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Cell at `key`, if occupied
    #[inline]
    pub fn chunk(&self, key: &ChunkKey) -> Option<&Chunk> {
        self.chunks.get(key)
    }

    /// Iterate over occupied cells in arbitrary order
    pub fn chunks(&self) -> impl Iterator<Item = (&ChunkKey, &Chunk)> {
        self.chunks.iter()
    }

    /// Union of the occupied cell volumes, computed from keys only.
    ///
    /// Always contains the exact point extents. Zero box at the origin when
    /// empty.
    pub fn approximate_bounds(&self) -> Aabb {
        let Some((min_key, max_key)) = self.key_extremes() else {
            return Aabb::ZERO;
        };
        let size = self.config.chunk_size;
        trace!(
            "[ChunkStore] Approximate bounds over {} chunk keys",
            self.chunks.len()
        );
        Aabb::from_min_max(min_key.min_corner(size), max_key.max_corner(size))
    }

    /// Exact extents of every stored point.
    ///
    /// Flat axes are widened to [`Aabb::MIN_EXTENT`]. Zero box at the origin
    /// when empty.
    pub fn precise_bounds(&self) -> Aabb {
        trace!(
            "[ChunkStore] Precise bounds over {} points",
            self.point_count()
        );
        Self::bounds_of(self.chunks.values())
    }

    /// Exact extents computed from the cells on the six boundary slabs only.
    ///
    /// Returns the same box as [`ChunkStore::precise_bounds`].
    pub fn precise_bounds_via_boundary_chunks(&self) -> Aabb {
        let Some((min_key, max_key)) = self.key_extremes() else {
            return Aabb::ZERO;
        };

        let boundary = self.chunks.iter().filter_map(|(key, chunk)| {
            let on_boundary = key.ix == min_key.ix
                || key.ix == max_key.ix
                || key.iy == min_key.iy
                || key.iy == max_key.iy
                || key.iz == min_key.iz
                || key.iz == max_key.iz;
            on_boundary.then_some(chunk)
        });

        let boundary: Vec<&Chunk> = boundary.collect();
        trace!(
            "[ChunkStore] Boundary bounds over {}/{} chunks",
            boundary.len(),
            self.chunks.len()
        );
        Self::bounds_of(boundary.into_iter())
    }

    /// Keys of the cells whose center lies strictly within `radius` of
    /// `center`, nearest first, at most `max_chunks` of them.
    ///
    /// Equal distances are ordered by key so the result is a deterministic
    /// prefix of the same ranking for every `max_chunks`.
    pub fn query_radius_chunks(
        &self,
        center: WorldPoint,
        radius: f32,
        max_chunks: usize,
    ) -> Vec<ChunkKey> {
        if max_chunks == 0 || !(radius > 0.0) {
            return Vec::new();
        }
        let size = self.config.chunk_size;

        let mut ranked: Vec<(f32, ChunkKey)> = self
            .chunks
            .keys()
            .filter_map(|key| {
                let dist = key.center(size).distance(&center);
                (dist < radius).then_some((dist, *key))
            })
            .collect();

        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        ranked.truncate(max_chunks);
        ranked.into_iter().map(|(_, key)| key).collect()
    }

    /// Points of the nearest cells around `center`.
    ///
    /// Chunk-granular: cells are picked by their center distance, so the
    /// result can hold points farther than `radius` and miss nearer points
    /// in cells cut off by `max_chunks`. Cost scales with `max_chunks`
    /// rather than with the total point count.
    pub fn query_radius(&self, center: WorldPoint, radius: f32, max_chunks: usize) -> Vec<WorldPoint> {
        let keys = self.query_radius_chunks(center, radius, max_chunks);
        let mut points = Vec::new();
        for key in &keys {
            if let Some(chunk) = self.chunks.get(key) {
                points.extend(chunk.iter().copied());
            }
        }
        points
    }

    /// Every stored point, cell by cell.
    pub fn get_all_points(&self) -> Vec<WorldPoint> {
        let mut points = Vec::with_capacity(self.point_count());
        for chunk in self.chunks.values() {
            points.extend(chunk.iter().copied());
        }
        points
    }

    fn key_extremes(&self) -> Option<(ChunkKey, ChunkKey)> {
        let mut keys = self.chunks.keys();
        let first = *keys.next()?;
        Some(keys.fold((first, first), |(min, max), k| {
            (min.component_min(k), max.component_max(k))
        }))
    }

    fn bounds_of<'a>(chunks: impl Iterator<Item = &'a Chunk>) -> Aabb {
        let extremes = chunks
            .filter_map(Chunk::extremes)
            .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)));
        match extremes {
            Some((min, max)) => Aabb::from_extremes(min, max),
            None => Aabb::ZERO,
        }
    }
}
