//! Find items near a path, ordered by where they occur along the path.
//!
//! The result order is path order: segment by segment, and within a segment
//! by distance from the segment start. Two items at the same straight-line
//! distance from the path origin can come out in either order depending on
//! how the path bends.

use crate::error::{Result, check_threshold};
use crate::haversine;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::traits::Located;

/// An item found within the search threshold of a path.
#[derive(Debug, Clone)]
pub struct ProximityMatch<'a, T> {
    pub item: &'a T,
    /// Segment the item was matched on.
    pub segment_index: usize,
    /// Distance from the segment start to the item's projection.
    pub distance_along_segment_km: f64,
    /// Distance from the path start to the item's projection, measured along the path.
    pub distance_along_path_km: f64,
    /// Perpendicular distance from the item to the path.
    pub distance_from_path_km: f64,
}

/// Items of `items` lying within `threshold_km` of `path`, in path order.
pub fn find_points_within_distance_ordered<'a, T: Located>(
    path: &Polyline,
    items: &'a [T],
    threshold_km: f64,
) -> Result<Vec<&'a T>> {
    find_points_within_distance_ordered_by(path, items, T::location, threshold_km)
}

/// Like [`find_points_within_distance_ordered`], reading each item's location
/// through `location_of`.
pub fn find_points_within_distance_ordered_by<'a, T, F>(
    path: &Polyline,
    items: &'a [T],
    location_of: F,
    threshold_km: f64,
) -> Result<Vec<&'a T>>
where
    F: Fn(&T) -> Point,
{
    let matches = find_matches_within_distance_ordered_by(path, items, location_of, threshold_km)?;
    Ok(matches.into_iter().map(|m| m.item).collect())
}

/// Path-ordered matches with their along-path and off-path distances.
pub fn find_matches_within_distance_ordered<'a, T: Located>(
    path: &Polyline,
    items: &'a [T],
    threshold_km: f64,
) -> Result<Vec<ProximityMatch<'a, T>>> {
    find_matches_within_distance_ordered_by(path, items, T::location, threshold_km)
}

/// Path-ordered matches, reading each item's location through `location_of`.
///
/// Each item matches at most once, on the first segment (in path order) that
/// passes within `threshold_km` of it, and is not tested again afterwards.
/// Items at equal distance along a segment keep their input order. An empty
/// path matches nothing.
pub fn find_matches_within_distance_ordered_by<'a, T, F>(
    path: &Polyline,
    items: &'a [T],
    location_of: F,
    threshold_km: f64,
) -> Result<Vec<ProximityMatch<'a, T>>>
where
    F: Fn(&T) -> Point,
{
    check_threshold("threshold_km", threshold_km)?;

    let mut remaining: Vec<(&'a T, Point)> =
        items.iter().map(|item| (item, location_of(item))).collect();
    let mut matches = Vec::new();
    let mut path_offset_km = 0.0;

    for (segment_index, start, end) in path.segments() {
        if remaining.is_empty() {
            break;
        }

        let segment_matches_from = matches.len();
        remaining.retain(|&(item, location)| {
            let projected = haversine::closest_point_on_segment(location, start, end);
            let distance_from_path_km = haversine::distance_km(location, projected);
            // Written so that a NaN distance never counts as a match.
            if !(distance_from_path_km <= threshold_km) {
                return true;
            }
            let distance_along_segment_km = haversine::distance_km(start, projected);
            matches.push(ProximityMatch {
                item,
                segment_index,
                distance_along_segment_km,
                distance_along_path_km: path_offset_km + distance_along_segment_km,
                distance_from_path_km,
            });
            false
        });
        matches[segment_matches_from..].sort_by(|a, b| {
            a.distance_along_segment_km
                .total_cmp(&b.distance_along_segment_km)
        });

        path_offset_km += haversine::distance_km(start, end);
    }

    tracing::debug!(
        items = items.len(),
        matched = matches.len(),
        threshold_km,
        "proximity search along path"
    );

    Ok(matches)
}
