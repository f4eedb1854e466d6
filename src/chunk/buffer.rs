//! Bounded FIFO point buffer owned by one grid cell.

use std::collections::VecDeque;

use crate::core::WorldPoint;

/// Ordered, capacity-bounded point buffer.
///
/// Pushing past capacity evicts the oldest point. Eviction order is pure
/// insertion order; reads never reorder the buffer.
#[derive(Clone, Debug)]
pub struct Chunk {
    points: VecDeque<WorldPoint>,
    capacity: usize,
}

impl Chunk {
    /// Create an empty chunk holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append a point, evicting from the front while over capacity.
    ///
    /// Returns the number of evicted points (0 or 1 for a capacity that
    /// never changes).
    #[inline]
    pub fn push(&mut self, point: WorldPoint) -> usize {
        self.points.push_back(point);
        let mut evicted = 0;
        while self.points.len() > self.capacity {
            self.points.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Number of stored points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the chunk holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of points
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &WorldPoint> {
        self.points.iter()
    }

    /// Component-wise min/max of the stored points.
    pub fn extremes(&self) -> Option<(WorldPoint, WorldPoint)> {
        let mut iter = self.points.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))))
    }
}
