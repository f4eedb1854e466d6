//! Scan ingestion configuration section.

use serde::{Deserialize, Serialize};

use crate::scan::ScanConfig;

use super::defaults;

/// Scan ingestion settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanSection {
    /// Hits at or beyond this distance are dropped (meters)
    #[serde(default = "defaults::max_scan_distance")]
    pub max_scan_distance: f32,

    /// Shuffle each frame before insertion
    #[serde(default = "defaults::enabled")]
    pub shuffle: bool,

    /// Fixed shuffle seed (OS entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            max_scan_distance: 5.0,
            shuffle: true,
            seed: None,
        }
    }
}

impl ScanSection {
    /// Convert to ScanConfig
    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig {
            max_scan_distance: self.max_scan_distance,
            shuffle: self.shuffle,
        }
    }
}
