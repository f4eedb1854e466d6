//! Axis-aligned bounding box for spatial queries.
//!
//! [`Aabb`] follows the center + size convention used by the render side
//! of the pipeline, so a box can be handed to consumers unchanged.
//!
//! # Usage
//!
//! ```rust
//! use rupa::core::{Aabb, WorldPoint};
//!
//! let aabb = Aabb::from_min_max(
//!     WorldPoint::new(0.0, 0.0, 0.0),
//!     WorldPoint::new(2.0, 4.0, 6.0),
//! );
//! assert_eq!(aabb.center, WorldPoint::new(1.0, 2.0, 3.0));
//! assert!(aabb.contains(WorldPoint::new(1.0, 1.0, 1.0)));
//! ```

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Axis-aligned bounding box stored as center and full size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Box center
    pub center: WorldPoint,
    /// Full edge lengths (not half extents)
    pub size: WorldPoint,
}

impl Aabb {
    /// Smallest edge length a measured box is given on a flat axis.
    ///
    /// Consumers normalize by box size, so a measured box never has a
    /// zero-thickness axis.
    pub const MIN_EXTENT: f32 = 1e-6;

    /// Degenerate zero-size box at the origin (returned for empty inputs).
    pub const ZERO: Aabb = Aabb {
        center: WorldPoint::ZERO,
        size: WorldPoint::ZERO,
    };

    /// Create a box from center and full size
    #[inline]
    pub const fn new(center: WorldPoint, size: WorldPoint) -> Self {
        Self { center, size }
    }

    /// Create a box spanning two corners.
    #[inline]
    pub fn from_min_max(min: WorldPoint, max: WorldPoint) -> Self {
        Self {
            center: (min + max) / 2.0,
            size: max - min,
        }
    }

    /// Create a box spanning measured point extremes.
    ///
    /// Axes thinner than [`Aabb::MIN_EXTENT`] are widened to it around the
    /// same center.
    pub fn from_extremes(min: WorldPoint, max: WorldPoint) -> Self {
        let mut aabb = Self::from_min_max(min, max);
        if aabb.size.x < Self::MIN_EXTENT {
            aabb.size.x = Self::MIN_EXTENT;
        }
        if aabb.size.y < Self::MIN_EXTENT {
            aabb.size.y = Self::MIN_EXTENT;
        }
        if aabb.size.z < Self::MIN_EXTENT {
            aabb.size.z = Self::MIN_EXTENT;
        }
        aabb
    }

    /// Half of the size on each axis
    #[inline]
    pub fn half_extents(&self) -> WorldPoint {
        self.size / 2.0
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> WorldPoint {
        self.center - self.half_extents()
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> WorldPoint {
        self.center + self.half_extents()
    }

    /// True if every axis has zero size
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size.x == 0.0 && self.size.y == 0.0 && self.size.z == 0.0
    }

    /// Check if a point is inside (edges inclusive).
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    /// Check if another box lies entirely inside this one.
    #[inline]
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        let (min, max) = (self.min(), self.max());
        let (omin, omax) = (other.min(), other.max());
        omin.x >= min.x
            && omin.y >= min.y
            && omin.z >= min.z
            && omax.x <= max.x
            && omax.y <= max.y
            && omax.z <= max.z
    }

    /// Check if this box overlaps another (touching counts).
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (min, max) = (self.min(), self.max());
        let (omin, omax) = (other.min(), other.max());
        min.x <= omax.x
            && max.x >= omin.x
            && min.y <= omax.y
            && max.y >= omin.y
            && min.z <= omax.z
            && max.z >= omin.z
    }

    /// Grow the box by `margin` on every side.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            center: self.center,
            size: self.size + WorldPoint::splat(2.0 * margin),
        }
    }
}
