//! Distance-to-strength falloff functions.
//!
//! | Kind | Strength at distance `d` |
//! |------|--------------------------|
//! | Linear | `1 - d / r` for `d < r`, else 0 |
//! | Smoothstep | 1 inside `inner`, `1 - smoothstep` to 0 at `outer` |
//!
//! A non-positive reach affects nothing.

use serde::{Deserialize, Serialize};

/// Smallest transition band of the smoothstep falloff (meters).
pub const MIN_TRANSITION: f32 = 1e-5;

/// Maps distance from the falloff center to blend strength in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Falloff {
    /// Linear decay to zero at `radius`
    Linear {
        /// Influence radius in meters
        radius: f32,
    },
    /// Full strength inside `inner_radius`, cubic decay to zero at `outer_radius`
    Smoothstep {
        /// Radius of the full-strength core
        inner_radius: f32,
        /// Influence radius in meters
        outer_radius: f32,
    },
}

impl Default for Falloff {
    fn default() -> Self {
        Falloff::Linear { radius: 0.05 }
    }
}

impl Falloff {
    /// Linear falloff
    #[inline]
    pub fn linear(radius: f32) -> Self {
        Falloff::Linear { radius }
    }

    /// Smoothstep falloff
    #[inline]
    pub fn smoothstep(inner_radius: f32, outer_radius: f32) -> Self {
        Falloff::Smoothstep {
            inner_radius,
            outer_radius,
        }
    }

    /// Distance at and beyond which strength is zero.
    pub fn reach(&self) -> f32 {
        match *self {
            Falloff::Linear { radius } => radius,
            Falloff::Smoothstep { outer_radius, .. } => outer_radius,
        }
    }

    /// True if no distance gets a positive strength.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.reach() > 0.0)
    }

    /// Blend strength for a point `dist` meters from the center.
    pub fn strength(&self, dist: f32) -> f32 {
        if self.is_degenerate() || dist.is_nan() {
            return 0.0;
        }
        match *self {
            Falloff::Linear { radius } => {
                if dist >= radius {
                    0.0
                } else {
                    1.0 - dist / radius
                }
            }
            Falloff::Smoothstep {
                inner_radius,
                outer_radius,
            } => {
                let inner = inner_radius.min(outer_radius).max(0.0);
                let outer = outer_radius.max(inner);
                if dist >= outer {
                    return 0.0;
                }
                if dist <= inner {
                    return 1.0;
                }
                let transition = (outer - inner).max(MIN_TRANSITION);
                let t = (dist - inner) / transition;
                (1.0 - t * t * (3.0 - 2.0 * t)).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_profile() {
        let f = Falloff::linear(1.0);
        assert_eq!(f.strength(0.0), 1.0);
        assert_eq!(f.strength(0.5), 0.5);
        assert_eq!(f.strength(1.0), 0.0); // Boundary is outside
        assert_eq!(f.strength(2.0), 0.0);
    }

    #[test]
    fn test_degenerate_radius() {
        assert_eq!(Falloff::linear(0.0).strength(0.0), 0.0);
        assert_eq!(Falloff::linear(-1.0).strength(0.0), 0.0);
        assert_eq!(Falloff::linear(f32::NAN).strength(0.0), 0.0);
        assert!(Falloff::smoothstep(0.0, 0.0).is_degenerate());
    }

    #[test]
    fn test_smoothstep_profile() {
        let f = Falloff::smoothstep(0.5, 1.5);
        assert_eq!(f.strength(0.0), 1.0);
        assert_eq!(f.strength(0.5), 1.0);
        assert!((f.strength(1.0) - 0.5).abs() < 1e-6);
        assert_eq!(f.strength(1.5), 0.0);

        // Monotonically non-increasing across the band
        let mut prev = 1.0;
        for i in 0..=30 {
            let s = f.strength(0.5 + i as f32 / 30.0);
            assert!(s <= prev + 1e-6);
            prev = s;
        }
    }

    #[test]
    fn test_smoothstep_inner_clamped_to_outer() {
        let f = Falloff::smoothstep(2.0, 1.0);
        assert_eq!(f.reach(), 1.0);
        assert_eq!(f.strength(0.9), 1.0);
        assert_eq!(f.strength(1.0), 0.0);
    }

    #[test]
    fn test_serde_kind_tag() {
        let f: Falloff = serde_yaml::from_str("kind: smoothstep\ninner_radius: 0.1\nouter_radius: 0.4\n").unwrap();
        assert_eq!(f, Falloff::smoothstep(0.1, 0.4));
    }
}
