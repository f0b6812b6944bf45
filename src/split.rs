//! Split one path into legs aligned to an ordered list of reference points.
//!
//! The reference points (normally a route's stops) must run in the same
//! direction as the path. The scan only moves forward, so each leg picks up
//! where the previous one ended and consecutive legs share exactly one point.

use crate::error::{GeometryError, Result};
use crate::haversine;
use crate::point::Point;
use crate::polyline::{Polyline, TieBreak};

/// Partition `path` into `reference_points.len() - 1` legs.
///
/// Leg `i` ends at whichever endpoint of the path segment closest to
/// `reference_points[i + 1]` lies nearer to that reference point, the
/// segment's start vertex on a tie. Leg `i + 1` starts from that same vertex. Path
/// vertices past the last reference point are appended to the final leg.
/// Every leg has at least two points: a leg that would collapse to its seed
/// point gets that point repeated.
pub fn split_by_closest_points(path: &Polyline, reference_points: &[Point]) -> Result<Vec<Polyline>> {
    if reference_points.len() < 2 {
        return Err(GeometryError::TooFewReferencePoints {
            count: reference_points.len(),
        });
    }
    let points = path.points();
    let Some(&first) = points.first() else {
        return Err(GeometryError::EmptyPath);
    };

    let leg_count = reference_points.len() - 1;
    let mut legs = Vec::with_capacity(leg_count);
    // Index of the next vertex not yet emitted into any leg.
    let mut cursor = 1;
    let mut last_position = first;

    for (leg_index, &target) in reference_points[1..].iter().enumerate() {
        let mut leg = vec![last_position];

        // The segment starting at the last emitted vertex may still hold the target.
        if let Some(projection) = path.closest_projection(target, cursor - 1, TieBreak::Earliest) {
            let end = boundary_vertex(points, projection.segment_index, target);
            if end >= cursor {
                leg.extend_from_slice(&points[cursor..=end]);
                cursor = end + 1;
            }
            tracing::trace!(
                leg = leg_index,
                segment = projection.segment_index,
                vertex = end,
                distance_km = projection.distance_km,
                "matched reference point"
            );
        }

        if leg_index == leg_count - 1 && cursor < points.len() {
            leg.extend_from_slice(&points[cursor..]);
            cursor = points.len();
        }

        if leg.len() <= 1 {
            leg.push(last_position);
        }
        last_position = leg[leg.len() - 1];
        legs.push(Polyline::new(leg));
    }

    tracing::debug!(
        path_len = points.len(),
        legs = legs.len(),
        "split path by reference points"
    );

    Ok(legs)
}

/// The endpoint of segment `segment_index` nearest to `target`.
fn boundary_vertex(points: &[Point], segment_index: usize, target: Point) -> usize {
    let end_index = (segment_index + 1).min(points.len() - 1);
    let to_start = haversine::distance_km(target, points[segment_index]);
    let to_end = haversine::distance_km(target, points[end_index]);
    if to_end < to_start { end_index } else { segment_index }
}
