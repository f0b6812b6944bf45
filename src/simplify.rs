//! Greedy single-pass polyline simplification.
//!
//! Walks the path once and drops every point closer than `resolution_km` to
//! the last kept point. This is O(n) and ignores curvature, so tight bends
//! lose detail that Douglas-Peucker would keep. The first and last points are
//! always preserved exactly.

use crate::config::EngineConfig;
use crate::error::{Result, check_threshold};
use crate::haversine;
use crate::polyline::Polyline;

/// Simplify `path` so that consecutive kept points are at least
/// `resolution_km` apart.
///
/// Paths with fewer than `max(size_threshold, 2)` points are returned
/// unchanged. The original last point is always kept, even when it lies
/// within `resolution_km` of the previous kept point.
pub fn simplify(path: &Polyline, resolution_km: f64, size_threshold: usize) -> Result<Polyline> {
    check_threshold("resolution_km", resolution_km)?;
    Ok(simplify_unchecked(path, resolution_km, size_threshold))
}

/// [`simplify`] for a resolution the caller has already validated.
pub(crate) fn simplify_unchecked(path: &Polyline, resolution_km: f64, size_threshold: usize) -> Polyline {
    let points = path.points();
    if points.len() < size_threshold.max(2) {
        return path.clone();
    }

    let mut kept = Vec::with_capacity(points.len());
    let mut last_kept = points[0];
    kept.push(last_kept);

    let last_index = points.len() - 1;
    for &point in &points[1..last_index] {
        if haversine::distance_km(last_kept, point) >= resolution_km {
            kept.push(point);
            last_kept = point;
        }
    }
    kept.push(points[last_index]);

    tracing::debug!(
        input = points.len(),
        output = kept.len(),
        resolution_km,
        "simplified path"
    );

    Polyline::new(kept)
}

/// Simplify `path` with the resolution and size threshold from `config`.
pub fn simplify_with(path: &Polyline, config: &EngineConfig) -> Result<Polyline> {
    simplify(
        path,
        config.simplify_resolution_km,
        config.simplify_size_threshold,
    )
}
