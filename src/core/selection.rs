//! Caller-supplied selection volumes in world space.

use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::point::WorldPoint;

/// A sphere or box picked by the user for a local alignment.
///
/// Used to choose the solver's source points and as the default falloff
/// center. A volume with a non-positive radius or half extent selects
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SelectionVolume {
    /// Ball of `radius` around `center` (surface inclusive)
    Sphere {
        /// Sphere center
        center: WorldPoint,
        /// Sphere radius in meters
        radius: f32,
    },
    /// Axis-aligned box (faces inclusive)
    Box {
        /// Box center
        center: WorldPoint,
        /// Half of the edge length on each axis
        half_extents: WorldPoint,
    },
}

impl SelectionVolume {
    /// Sphere selection
    #[inline]
    pub fn sphere(center: WorldPoint, radius: f32) -> Self {
        SelectionVolume::Sphere { center, radius }
    }

    /// Box selection from center and half extents
    #[inline]
    pub fn cuboid(center: WorldPoint, half_extents: WorldPoint) -> Self {
        SelectionVolume::Box {
            center,
            half_extents,
        }
    }

    /// Center of the volume
    #[inline]
    pub fn center(&self) -> WorldPoint {
        match self {
            SelectionVolume::Sphere { center, .. } | SelectionVolume::Box { center, .. } => *center,
        }
    }

    /// True if the volume cannot contain any point.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionVolume::Sphere { center, radius } => {
                !(*radius > 0.0 && radius.is_finite() && center.is_finite())
            }
            SelectionVolume::Box {
                center,
                half_extents,
            } => {
                !(half_extents.x > 0.0
                    && half_extents.y > 0.0
                    && half_extents.z > 0.0
                    && half_extents.is_finite()
                    && center.is_finite())
            }
        }
    }

    /// Check whether a world point lies inside the volume.
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        if self.is_empty() {
            return false;
        }
        match self {
            SelectionVolume::Sphere { center, radius } => {
                point.distance_squared(center) <= radius * radius
            }
            SelectionVolume::Box { .. } => self.aabb().contains(point),
        }
    }

    /// Tight axis-aligned box around the volume.
    pub fn aabb(&self) -> Aabb {
        match self {
            SelectionVolume::Sphere { center, radius } => {
                Aabb::new(*center, WorldPoint::splat(2.0 * radius))
            }
            SelectionVolume::Box {
                center,
                half_extents,
            } => Aabb::new(*center, *half_extents * 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contains_surface() {
        let s = SelectionVolume::sphere(WorldPoint::ZERO, 1.0);
        assert!(s.contains(WorldPoint::new(1.0, 0.0, 0.0)));
        assert!(s.contains(WorldPoint::new(0.0, 0.5, 0.5)));
        assert!(!s.contains(WorldPoint::new(0.8, 0.8, 0.0)));
    }

    #[test]
    fn test_box_contains_faces() {
        let b = SelectionVolume::cuboid(WorldPoint::new(1.0, 1.0, 1.0), WorldPoint::new(0.5, 1.0, 2.0));
        assert!(b.contains(WorldPoint::new(1.5, 2.0, 3.0)));
        assert!(b.contains(WorldPoint::new(0.5, 0.0, -1.0)));
        assert!(!b.contains(WorldPoint::new(1.6, 1.0, 1.0)));
        assert_eq!(b.aabb().size, WorldPoint::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_degenerate_volumes_are_empty() {
        assert!(SelectionVolume::sphere(WorldPoint::ZERO, 0.0).is_empty());
        assert!(SelectionVolume::sphere(WorldPoint::ZERO, -1.0).is_empty());
        assert!(SelectionVolume::cuboid(WorldPoint::ZERO, WorldPoint::new(1.0, 0.0, 1.0)).is_empty());
        assert!(!SelectionVolume::sphere(WorldPoint::ZERO, 0.1).is_empty());

        let empty = SelectionVolume::sphere(WorldPoint::ZERO, 0.0);
        assert!(!empty.contains(WorldPoint::ZERO));
    }

    #[test]
    fn test_yaml_tagged_shape() {
        let s: SelectionVolume =
            serde_yaml::from_str("shape: sphere\ncenter: {x: 1.0, y: 0.0, z: 0.0}\nradius: 0.5\n")
                .unwrap();
        assert_eq!(s, SelectionVolume::sphere(WorldPoint::new(1.0, 0.0, 0.0), 0.5));
    }
}
