//! Local deformation of a point field.
//!
//! [`DeformationEngine::apply`] blends a [`RigidTransform`](crate::reconcile::RigidTransform)
//! into the points around a selection, weighted by a [`Falloff`]. Affected
//! counts can be observed through an [`AffectedCountMonitor`] without
//! blocking the apply.
//!
//! ```rust
//! use rupa::core::{SelectionVolume, WorldPoint};
//! use rupa::deform::{ApplyParams, DeformationEngine};
//! use rupa::field::PointField;
//! use rupa::reconcile::RigidTransform;
//!
//! let mut field = PointField::from_positions(vec![
//!     WorldPoint::new(0.0, 0.0, 0.0),
//!     WorldPoint::new(0.5, 0.0, 0.0),
//!     WorldPoint::new(2.0, 0.0, 0.0),
//! ]);
//! let selection = SelectionVolume::sphere(WorldPoint::ZERO, 1.0);
//! let lift = RigidTransform::from_translation(WorldPoint::new(0.0, 0.0, 1.0));
//!
//! let mut engine = DeformationEngine::new();
//! let params = ApplyParams::linear(1.0).with_accumulate(false);
//! let report = engine.apply(&mut field, &selection, &lift, &params).unwrap();
//!
//! assert_eq!(report.affected, 2);
//! assert_eq!(field.current()[1], WorldPoint::new(0.5, 0.0, 0.5));
//! ```

mod diagnostics;
mod engine;
mod falloff;
mod params;

pub use diagnostics::{AffectedCount, AffectedCountMonitor};
pub use engine::{DeformationEngine, RIGID_MIN_STRENGTH};
pub(crate) use engine::rest_centroid;
pub use falloff::{Falloff, MIN_TRANSITION};
pub use params::{ApplyParams, ApplyReport, BlendMode, FalloffCenter};
