//! Chunk store properties: capacity, bounds agreement, radius queries.

mod common;

use common::{init_logger, random_points};
use rupa::{Aabb, ChunkKey, ChunkStore, ScanConfig, ScanIngestor, WorldPoint};

#[test]
fn test_capacity_holds_after_any_insert_sequence() {
    init_logger();
    let mut store = ChunkStore::with_params(0.5, 8).unwrap();
    store.extend(random_points(1, 5000, 2.0));

    for (_, chunk) in store.chunks() {
        assert!(chunk.len() <= 8);
    }
    assert!(store.point_count() <= store.config().max_points(store.chunk_count()));
}

#[test]
fn test_overflow_keeps_last_points() {
    let mut store = ChunkStore::with_params(1.0, 4).unwrap();
    let points: Vec<WorldPoint> = (0..7)
        .map(|i| WorldPoint::new(0.1 * i as f32 + 0.05, 0.5, 0.5))
        .collect();
    store.extend(points.iter().copied());

    let chunk = store.chunk(&ChunkKey::new(0, 0, 0)).unwrap();
    let kept: Vec<WorldPoint> = chunk.iter().copied().collect();
    assert_eq!(kept, points[3..].to_vec());
}

#[test]
fn test_round_trip_example() {
    let mut store = ChunkStore::with_params(1.0, 2).unwrap();
    store.insert(WorldPoint::new(0.1, 0.0, 0.0));
    store.insert(WorldPoint::new(0.2, 0.0, 0.0));
    store.insert(WorldPoint::new(0.9, 0.0, 0.0));

    assert_eq!(
        store.get_all_points(),
        vec![WorldPoint::new(0.2, 0.0, 0.0), WorldPoint::new(0.9, 0.0, 0.0)]
    );

    let bounds = store.precise_bounds();
    assert!((bounds.center.x - 0.55).abs() < 1e-6);
    assert!((bounds.size.x - 0.7).abs() < 1e-6);
    assert_eq!(bounds.center.y, 0.0);
    assert_eq!(bounds.size.y, Aabb::MIN_EXTENT);
    assert_eq!(bounds.size.z, Aabb::MIN_EXTENT);
}

#[test]
fn test_boundary_bounds_equal_precise() {
    for seed in 0..20u64 {
        for &(size, capacity) in &[(0.25, 4), (1.0, 16), (3.0, 64)] {
            let mut store = ChunkStore::with_params(size, capacity).unwrap();
            store.extend(random_points(seed, 300, 4.0));
            assert_eq!(
                store.precise_bounds_via_boundary_chunks(),
                store.precise_bounds(),
                "seed {} size {}",
                seed,
                size
            );
        }
    }
}

#[test]
fn test_boundary_bounds_single_point_and_single_chunk() {
    let mut store = ChunkStore::with_params(1.0, 16).unwrap();
    store.insert(WorldPoint::new(-3.2, 7.5, 0.25));
    assert_eq!(store.precise_bounds_via_boundary_chunks(), store.precise_bounds());

    store.insert(WorldPoint::new(-3.9, 7.1, 0.75));
    assert_eq!(store.chunk_count(), 1);
    assert_eq!(store.precise_bounds_via_boundary_chunks(), store.precise_bounds());
}

#[test]
fn test_approximate_contains_precise() {
    for seed in 0..20u64 {
        let mut store = ChunkStore::with_params(0.7, 32).unwrap();
        store.extend(random_points(seed, 200, 3.0));

        let approx = store.approximate_bounds();
        let precise = store.precise_bounds();
        assert!(approx.expand(Aabb::MIN_EXTENT).contains_aabb(&precise));
    }

    // Single point inside a cell
    let mut store = ChunkStore::with_params(1.0, 4).unwrap();
    store.insert(WorldPoint::new(2.5, -0.5, 0.3));
    assert!(store.approximate_bounds().contains_aabb(&store.precise_bounds()));
}

#[test]
fn test_empty_store_bounds() {
    let store = ChunkStore::with_params(1.0, 4).unwrap();
    assert_eq!(store.approximate_bounds(), Aabb::ZERO);
    assert_eq!(store.precise_bounds(), Aabb::ZERO);
    assert_eq!(store.precise_bounds_via_boundary_chunks(), Aabb::ZERO);
    assert!(store.query_radius(WorldPoint::ZERO, 10.0, 10).is_empty());
    assert!(store.get_all_points().is_empty());
}

#[test]
fn test_radius_query_monotonic_in_max_chunks() {
    let mut store = ChunkStore::with_params(0.5, 8).unwrap();
    store.extend(random_points(9, 2000, 3.0));
    let center = WorldPoint::new(0.3, -0.2, 0.1);
    let radius = 2.0;

    let mut previous: Vec<ChunkKey> = Vec::new();
    for max_chunks in 0..40 {
        let keys = store.query_radius_chunks(center, radius, max_chunks);
        assert!(keys.len() <= max_chunks);
        assert_eq!(&keys[..previous.len()], &previous[..]);
        for key in &keys {
            assert!(key.center(store.chunk_size()).distance(&center) < radius);
        }

        let points = store.query_radius(center, radius, max_chunks);
        let expected: usize = keys.iter().map(|k| store.chunk(k).map_or(0, |c| c.len())).sum();
        assert_eq!(points.len(), expected);
        previous = keys;
    }
}

#[test]
fn test_radius_query_degenerate_inputs() {
    let mut store = ChunkStore::with_params(1.0, 8).unwrap();
    store.extend(random_points(3, 100, 2.0));
    assert!(store.query_radius(WorldPoint::ZERO, 0.0, 10).is_empty());
    assert!(store.query_radius(WorldPoint::ZERO, -1.0, 10).is_empty());
    assert!(store.query_radius(WorldPoint::ZERO, 10.0, 0).is_empty());
}

#[test]
fn test_clear_empties_store() {
    let mut store = ChunkStore::with_params(1.0, 8).unwrap();
    store.extend(random_points(4, 100, 2.0));
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.chunk_count(), 0);
}

#[test]
fn test_scan_frames_respect_capacity() {
    init_logger();
    let mut store = ChunkStore::with_params(0.5, 4).unwrap();
    let mut ingestor = ScanIngestor::new(ScanConfig::default(), Some(11));

    for frame in 0..10u64 {
        let hits = random_points(100 + frame, 500, 6.0);
        let stats = ingestor.ingest(&mut store, WorldPoint::ZERO, &hits);
        assert_eq!(stats.accepted + stats.rejected, hits.len());
    }
    for (_, chunk) in store.chunks() {
        assert!(chunk.len() <= 4);
    }
    for p in store.get_all_points() {
        assert!(p.length() < 5.0);
    }
}
