//! Tunable engine constants.
//!
//! All distances are in kilometers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, check_threshold};

/// Minimum spacing between kept points when simplifying a path (5 m).
pub const DEFAULT_SIMPLIFY_RESOLUTION_KM: f64 = 0.005;

/// Paths shorter than this are never simplified.
pub const DEFAULT_SIMPLIFY_SIZE_THRESHOLD: usize = 100;

/// Projected sub-path endpoints closer than this are the same point (1 m).
pub const DEFAULT_MIN_SEPARATION_KM: f64 = 0.001;

/// Default search radius around a path for nearby stops and vehicles.
pub const DEFAULT_PROXIMITY_THRESHOLD_KM: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub simplify_resolution_km: f64,
    pub simplify_size_threshold: usize,
    pub min_separation_km: f64,
    pub proximity_threshold_km: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            simplify_resolution_km: DEFAULT_SIMPLIFY_RESOLUTION_KM,
            simplify_size_threshold: DEFAULT_SIMPLIFY_SIZE_THRESHOLD,
            min_separation_km: DEFAULT_MIN_SEPARATION_KM,
            proximity_threshold_km: DEFAULT_PROXIMITY_THRESHOLD_KM,
        }
    }
}

impl EngineConfig {
    /// Checks that every distance is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_threshold("simplify_resolution_km", self.simplify_resolution_km)?;
        check_threshold("min_separation_km", self.min_separation_km)?;
        check_threshold("proximity_threshold_km", self.proximity_threshold_km)?;
        Ok(())
    }
}
