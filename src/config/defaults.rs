//! Default value functions for serde deserialization.

pub fn chunk_size() -> f32 {
    1.0
}

pub fn max_points_per_chunk() -> usize {
    256
}

pub fn query_radius() -> f32 {
    10.0
}

pub fn max_query_chunks() -> usize {
    15
}

pub fn max_scan_distance() -> f32 {
    5.0
}

pub fn enabled() -> bool {
    true
}

pub fn falloff_radius() -> f32 {
    0.05
}

pub fn index_cell_size() -> f32 {
    0.25
}

pub fn voxel_size() -> f32 {
    0.05
}

pub fn max_iterations() -> u32 {
    50
}

pub fn epsilon() -> f32 {
    1e-6
}

pub fn orthonormality_tolerance() -> Option<f32> {
    Some(1e-3)
}
