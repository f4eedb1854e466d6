//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rupa::{AlignmentRequest, AlignmentSolver, Result, SolverResult, WorldPoint};

/// Install a logger once; later calls are ignored.
pub fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Solver double that returns a scripted result and records every request.
pub struct FixedSolver {
    pub result: SolverResult,
    pub requests: Vec<AlignmentRequest>,
}

impl FixedSolver {
    pub fn new(result: SolverResult) -> Self {
        Self {
            result,
            requests: Vec::new(),
        }
    }

    /// Converged pure translation
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = SolverResult::IDENTITY_MATRIX;
        m[3] = x;
        m[7] = y;
        m[11] = z;
        Self::new(SolverResult::converged(m))
    }

    pub fn calls(&self) -> usize {
        self.requests.len()
    }
}

impl AlignmentSolver for FixedSolver {
    fn solve(&mut self, request: &AlignmentRequest) -> Result<SolverResult> {
        self.requests.push(request.clone());
        Ok(self.result.clone())
    }
}

/// Uniform points in `[-extent, extent)³`.
pub fn random_points(seed: u64, count: usize, extent: f32) -> Vec<WorldPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            WorldPoint::new(
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            )
        })
        .collect()
}

pub fn assert_close(a: WorldPoint, b: WorldPoint, tol: f32) {
    assert!(a.distance(&b) < tol, "{:?} is not within {} of {:?}", a, tol, b);
}
