//! Deformation properties: falloff boundary, no drift, reset, selection.

mod common;

use common::{assert_close, init_logger, random_points};
use rupa::{
    AffectedCountMonitor, ApplyParams, DeformationEngine, FieldIndex, FieldState, PointField,
    RigidTransform, SelectionVolume, WorldPoint,
};

fn lift(dz: f32) -> RigidTransform {
    RigidTransform::from_translation(WorldPoint::new(0.0, 0.0, dz))
}

#[test]
fn test_deformation_example() {
    init_logger();
    let center = WorldPoint::new(1.0, 2.0, 3.0);
    let rest = vec![
        center,
        center + WorldPoint::new(0.0, 0.5, 0.0),
        center + WorldPoint::new(-2.0, 0.0, 0.0),
    ];
    let mut field = PointField::from_positions(rest.clone());
    let selection = SelectionVolume::sphere(center, 1.0);

    let report = DeformationEngine::new()
        .apply(&mut field, &selection, &lift(1.0), &ApplyParams::linear(1.0).with_accumulate(false))
        .unwrap();

    assert_eq!(report.affected, 2);
    assert_eq!(field.current()[0], rest[0] + WorldPoint::new(0.0, 0.0, 1.0));
    assert_eq!(field.current()[1], rest[1] + WorldPoint::new(0.0, 0.0, 0.5));
    assert_eq!(field.current()[2], rest[2]);
    assert_eq!(field.rest(), &rest[..]);
}

#[test]
fn test_falloff_boundary_and_center() {
    let mut field = PointField::from_positions(vec![
        WorldPoint::new(0.0, 2.0, 0.0),
        WorldPoint::ZERO,
    ]);
    let selection = SelectionVolume::sphere(WorldPoint::ZERO, 3.0);
    let params = ApplyParams::linear(2.0).with_accumulate(false);

    DeformationEngine::new()
        .apply(&mut field, &selection, &lift(0.25), &params)
        .unwrap();

    assert_eq!(field.current()[0], field.rest()[0]);
    assert_eq!(field.current()[1], WorldPoint::new(0.0, 0.0, 0.25));
}

#[test]
fn test_no_drift_without_accumulation() {
    let mut field = PointField::from_positions(random_points(5, 500, 1.0));
    let selection = SelectionVolume::sphere(WorldPoint::new(0.2, 0.1, 0.0), 0.5);
    let tf = RigidTransform::from_axis_angle(nalgebra::Vector3::y(), 0.3);
    let tf = RigidTransform::new(tf.rotation, WorldPoint::new(0.05, 0.0, -0.1));
    let params = ApplyParams::linear(0.8).with_accumulate(false);
    let rest_before = field.rest().to_vec();

    let mut engine = DeformationEngine::new();
    engine.apply(&mut field, &selection, &tf, &params).unwrap();
    let first = field.current().to_vec();
    engine.apply(&mut field, &selection, &tf, &params).unwrap();

    assert_eq!(field.current(), &first[..]);
    assert_eq!(field.rest(), &rest_before[..]);
    assert_eq!(field.state(), FieldState::Dirty);

    field.reset();
    assert_eq!(field.current(), field.rest());
    assert_eq!(field.state(), FieldState::Clean);
}

#[test]
fn test_accumulated_edits_stack() {
    let mut field = PointField::from_positions(vec![WorldPoint::ZERO]);
    let selection = SelectionVolume::sphere(WorldPoint::ZERO, 1.0);
    let params = ApplyParams::linear(10.0);
    let mut engine = DeformationEngine::new();

    engine.apply(&mut field, &selection, &lift(0.1), &params).unwrap();
    let after_one = field.rest()[0].z;
    engine.apply(&mut field, &selection, &lift(0.1), &params).unwrap();

    assert!(field.rest()[0].z > after_one);
    assert_eq!(field.current(), field.rest());
    field.reset();
    assert!(field.current()[0].z > after_one);
}

#[test]
fn test_index_matches_linear_scan() {
    let mut field = PointField::from_positions(random_points(21, 3000, 2.0));
    let mut index = FieldIndex::new(0.3).unwrap();

    let selections = [
        SelectionVolume::sphere(WorldPoint::ZERO, 0.7),
        SelectionVolume::sphere(WorldPoint::new(1.5, -1.5, 0.5), 1.1),
        SelectionVolume::cuboid(WorldPoint::new(-0.5, 0.2, 0.0), WorldPoint::new(0.4, 0.9, 0.2)),
        SelectionVolume::sphere(WorldPoint::new(9.0, 9.0, 9.0), 1.0),
        SelectionVolume::sphere(WorldPoint::ZERO, 50.0),
    ];
    for selection in &selections {
        assert_eq!(index.select(&field, selection), field.select_indices(selection));
    }

    // Deform, then the index must follow the moved points
    DeformationEngine::new()
        .apply(&mut field, &selections[0], &lift(0.5), &ApplyParams::linear(1.0).with_accumulate(false))
        .unwrap();
    assert!(!index.is_current(&field));
    for selection in &selections {
        assert_eq!(index.select(&field, selection), field.select_indices(selection));
    }
}

#[test]
fn test_monitor_sees_latest_apply() {
    let mut monitor = AffectedCountMonitor::new();
    let mut engine = DeformationEngine::new().with_monitor(&monitor);
    let mut field = PointField::from_positions(random_points(8, 200, 1.0));
    let selection = SelectionVolume::sphere(WorldPoint::ZERO, 0.5);
    let params = ApplyParams::linear(0.5).with_accumulate(false);

    let mut last = None;
    for _ in 0..3 {
        last = Some(engine.apply(&mut field, &selection, &lift(0.1), &params).unwrap());
    }
    let last = last.unwrap();

    let seen = monitor.latest().unwrap();
    assert_eq!(seen.sequence, last.sequence);
    assert_eq!(seen.affected, last.affected);
    assert_eq!(monitor.pending(), 0);
}

#[test]
fn test_rigid_blend_keeps_far_points() {
    let mut field = PointField::from_positions(vec![
        WorldPoint::new(0.5, 0.0, 0.0),
        WorldPoint::new(3.0, 0.0, 0.0),
    ]);
    let selection = SelectionVolume::sphere(WorldPoint::ZERO, 1.0);
    let tf = RigidTransform::from_axis_angle(nalgebra::Vector3::z(), std::f32::consts::FRAC_PI_2);
    let params = ApplyParams::linear(1.0)
        .with_blend(rupa::BlendMode::Rigid)
        .with_accumulate(false);

    DeformationEngine::new()
        .apply(&mut field, &selection, &tf, &params)
        .unwrap();

    // Strength 0.5: an eighth turn of (0.5, 0, 0)
    let h = 0.5 * std::f32::consts::FRAC_1_SQRT_2;
    assert_close(field.current()[0], WorldPoint::new(h, h, 0.0), 1e-5);
    assert_eq!(field.current()[1], WorldPoint::new(3.0, 0.0, 0.0));
}
