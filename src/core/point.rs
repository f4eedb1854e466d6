//! Point and chunk-coordinate types.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Integer chunk coordinates (cell indices on a uniform 3D grid).
///
/// A key is `floor(p / chunk_size)` per axis, so it is a deterministic
/// function of a point and the grid's cell size. Ordering and hashing are
/// structural over `(ix, iy, iz)`; the ordering is lexicographic and only
/// breaks ties, use [`ChunkKey::component_min`] and
/// [`ChunkKey::component_max`] for per-axis extremes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ChunkKey {
    /// X cell index
    pub ix: i32,
    /// Y cell index
    pub iy: i32,
    /// Z cell index
    pub iz: i32,
}

impl ChunkKey {
    /// Create a new chunk key
    #[inline]
    pub fn new(ix: i32, iy: i32, iz: i32) -> Self {
        Self { ix, iy, iz }
    }

    /// Key of the cell containing `point` for the given cell size.
    ///
    /// Saturates at the `i32` range; see [`ChunkKey::try_from_point`] for a
    /// checked variant.
    #[inline]
    pub fn from_point(point: WorldPoint, chunk_size: f32) -> Self {
        Self {
            ix: (point.x / chunk_size).floor() as i32,
            iy: (point.y / chunk_size).floor() as i32,
            iz: (point.z / chunk_size).floor() as i32,
        }
    }

    /// Key of the cell containing `point`, or `None` if the point is not
    /// finite or its cell index does not fit in `i32`.
    pub fn try_from_point(point: WorldPoint, chunk_size: f32) -> Option<Self> {
        let index = |v: f32| {
            let cell = (v / chunk_size).floor();
            (cell.is_finite() && cell >= i32::MIN as f32 && cell < i32::MAX as f32)
                .then_some(cell as i32)
        };
        Some(Self {
            ix: index(point.x)?,
            iy: index(point.y)?,
            iz: index(point.z)?,
        })
    }

    /// World position of the cell's minimum corner.
    #[inline]
    pub fn min_corner(&self, chunk_size: f32) -> WorldPoint {
        WorldPoint::new(
            self.ix as f32 * chunk_size,
            self.iy as f32 * chunk_size,
            self.iz as f32 * chunk_size,
        )
    }

    /// World position of the cell's maximum corner.
    #[inline]
    pub fn max_corner(&self, chunk_size: f32) -> WorldPoint {
        WorldPoint::new(
            (self.ix as i64 + 1) as f32 * chunk_size,
            (self.iy as i64 + 1) as f32 * chunk_size,
            (self.iz as i64 + 1) as f32 * chunk_size,
        )
    }

    /// World position of the cell center (`key * size + size / 2` per axis).
    #[inline]
    pub fn center(&self, chunk_size: f32) -> WorldPoint {
        let half = chunk_size / 2.0;
        WorldPoint::new(
            self.ix as f32 * chunk_size + half,
            self.iy as f32 * chunk_size + half,
            self.iz as f32 * chunk_size + half,
        )
    }

    /// Component-wise minimum
    #[inline]
    pub fn component_min(&self, other: &ChunkKey) -> ChunkKey {
        ChunkKey::new(
            self.ix.min(other.ix),
            self.iy.min(other.iy),
            self.iz.min(other.iz),
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn component_max(&self, other: &ChunkKey) -> ChunkKey {
        ChunkKey::new(
            self.ix.max(other.ix),
            self.iy.max(other.iy),
            self.iz.max(other.iz),
        )
    }
}

/// World coordinates (meters, f32).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
    /// Z coordinate in meters
    pub z: f32,
}

impl WorldPoint {
    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new world point
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(&self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(&self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// True if every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Convert to an nalgebra vector for rotation math.
    #[inline]
    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f32>> for WorldPoint {
    #[inline]
    fn from(v: Vector3<f32>) -> Self {
        WorldPoint::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for WorldPoint {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        WorldPoint::new(v[0], v[1], v[2])
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        WorldPoint::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for WorldPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        WorldPoint::new(-self.x, -self.y, -self.z)
    }
}

/// Centroid of a set of points; origin for an empty set.
pub fn centroid(points: &[WorldPoint]) -> WorldPoint {
    if points.is_empty() {
        return WorldPoint::ZERO;
    }
    let sum = points.iter().fold(WorldPoint::ZERO, |acc, p| acc + *p);
    sum / points.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_key_floor() {
        let key = ChunkKey::from_point(WorldPoint::new(0.5, -0.5, 2.0), 1.0);
        assert_eq!(key, ChunkKey::new(0, -1, 2));

        let key = ChunkKey::from_point(WorldPoint::new(-0.01, 3.99, -4.0), 2.0);
        assert_eq!(key, ChunkKey::new(-1, 1, -2));
    }

    #[test]
    fn test_chunk_key_corners_and_center() {
        let key = ChunkKey::new(1, -2, 0);
        assert_eq!(key.min_corner(0.5), WorldPoint::new(0.5, -1.0, 0.0));
        assert_eq!(key.max_corner(0.5), WorldPoint::new(1.0, -0.5, 0.5));
        assert_eq!(key.center(0.5), WorldPoint::new(0.75, -0.75, 0.25));
    }

    #[test]
    fn test_component_extremes_are_per_axis() {
        let a = ChunkKey::new(0, 5, 0);
        let b = ChunkKey::new(1, 0, 2);
        assert_eq!(a.component_min(&b), ChunkKey::new(0, 0, 0));
        assert_eq!(a.component_max(&b), ChunkKey::new(1, 5, 2));
        // Lexicographic order would pick `a` as the minimum
        assert_eq!(a.min(b), a);
    }

    #[test]
    fn test_checked_key() {
        assert_eq!(
            ChunkKey::try_from_point(WorldPoint::new(0.5, -0.5, 2.0), 1.0),
            Some(ChunkKey::new(0, -1, 2))
        );
        assert_eq!(ChunkKey::try_from_point(WorldPoint::new(3.0e9, 0.0, 0.0), 1.0), None);
        assert_eq!(ChunkKey::try_from_point(WorldPoint::new(0.0, f32::NAN, 0.0), 1.0), None);
        assert_eq!(ChunkKey::try_from_point(WorldPoint::new(0.0, 0.0, f32::INFINITY), 1.0), None);
    }

    #[test]
    fn test_max_corner_of_saturated_key() {
        let key = ChunkKey::new(i32::MAX, 0, 0);
        let corner = key.max_corner(1.0);
        assert!(corner.x > 2.0e9);
        assert_eq!(corner.y, 1.0);
    }

    #[test]
    fn test_distance() {
        let a = WorldPoint::new(1.0, 2.0, 2.0);
        assert!((a.length() - 3.0).abs() < 1e-6);
        assert!((a.distance(&WorldPoint::ZERO) - 3.0).abs() < 1e-6);
        assert!((a.distance_squared(&WorldPoint::ZERO) - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_centroid() {
        assert_eq!(centroid(&[]), WorldPoint::ZERO);
        let c = centroid(&[WorldPoint::new(0.0, 0.0, 0.0), WorldPoint::new(2.0, 4.0, -2.0)]);
        assert_eq!(c, WorldPoint::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn test_vector_roundtrip() {
        let p = WorldPoint::new(0.1, -0.2, 0.3);
        assert_eq!(WorldPoint::from(p.to_vector()), p);
    }
}
