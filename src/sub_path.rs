//! Extract the portion of a path between two arbitrary points.

use crate::error::{GeometryError, Result, check_threshold};
use crate::haversine;
use crate::point::Point;
use crate::polyline::{Polyline, TieBreak};

/// Extract the part of `path` running from the projection of `start` to the
/// projection of `end`.
///
/// The start projection is searched over the whole path and keeps the
/// earliest of equally close segments. The end projection is only searched
/// from the start segment onward and keeps the latest of equally close
/// segments, which pushes it forward when both points land on the same
/// vertex region.
///
/// Returns `Ok(None)` when the two projections are closer than
/// `min_separation_km`: the points coincide and there is no sub-path.
/// Points beyond either end of the path project onto that end.
pub fn sub_path_by_closest(
    path: &Polyline,
    start: Point,
    end: Point,
    min_separation_km: f64,
) -> Result<Option<Polyline>> {
    check_threshold("min_separation_km", min_separation_km)?;

    let Some(from) = path.closest_projection(start, 0, TieBreak::Earliest) else {
        return Err(GeometryError::EmptyPath);
    };
    let Some(to) = path.closest_projection(end, from.segment_index, TieBreak::Latest) else {
        return Err(GeometryError::EmptyPath);
    };

    let separation_km = haversine::distance_km(from.point, to.point);
    if separation_km < min_separation_km {
        tracing::debug!(
            start_segment = from.segment_index,
            end_segment = to.segment_index,
            separation_km,
            "sub-path endpoints coincide"
        );
        return Ok(None);
    }

    let points = path.points();
    let mut sub_path = Vec::with_capacity(to.segment_index - from.segment_index + 2);
    sub_path.push(from.point);
    // Vertices after the start segment's first vertex, up to the end segment's first vertex.
    if to.segment_index > from.segment_index {
        let interior = &points[from.segment_index + 1..=to.segment_index];
        let interior = match interior.split_first() {
            Some((first, rest)) if *first == from.point => rest,
            _ => interior,
        };
        sub_path.extend_from_slice(interior);
    }
    if sub_path.len() < 2 || sub_path.last() != Some(&to.point) {
        sub_path.push(to.point);
    }

    tracing::debug!(
        start_segment = from.segment_index,
        end_segment = to.segment_index,
        points = sub_path.len(),
        "extracted sub-path"
    );

    Ok(Some(Polyline::new(sub_path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MIN_SEPARATION_KM;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::from(points.to_vec())
    }

    fn straight_path() -> Polyline {
        line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.0, 4.0)])
    }

    #[test]
    fn test_sub_path_between_vertices() {
        let path = straight_path();
        for i in 0..path.len() {
            for j in i + 1..path.len() {
                let sub = sub_path_by_closest(
                    &path,
                    path.points()[i],
                    path.points()[j],
                    DEFAULT_MIN_SEPARATION_KM,
                )
                .unwrap()
                .unwrap();
                assert_eq!(sub.points(), &path.points()[i..=j], "slice {}..={}", i, j);
            }
        }
    }

    #[test]
    fn test_sub_path_between_off_path_points() {
        let path = straight_path();
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.2, 0.5),
            Point::new(-0.3, 2.5),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sub, line(&[(0.0, 0.5), (0.0, 1.0), (0.0, 2.0), (0.0, 2.5)]));
    }

    #[test]
    fn test_sub_path_within_one_segment() {
        let path = straight_path();
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.0, 1.25),
            Point::new(0.0, 1.75),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sub, line(&[(0.0, 1.25), (0.0, 1.75)]));
    }

    #[test]
    fn test_sub_path_same_point_is_none() {
        let path = straight_path();
        for p in [Point::new(0.0, 2.0), Point::new(0.0, 2.6), Point::new(0.001, 0.3)] {
            let sub = sub_path_by_closest(&path, p, p, DEFAULT_MIN_SEPARATION_KM).unwrap();
            assert!(sub.is_none(), "expected no sub-path for {:?}", p);
        }
    }

    #[test]
    fn test_sub_path_nearly_coincident_is_none() {
        let path = straight_path();
        // ~0.1 m apart
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.0, 2.0),
            Point::new(0.0, 2.000001),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap();
        assert!(sub.is_none());
    }

    #[test]
    fn test_sub_path_beyond_extent_clamps() {
        let path = straight_path();
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.0, -10.0),
            Point::new(0.0, 50.0),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sub, path);
    }

    #[test]
    fn test_end_search_never_goes_backwards() {
        let path = straight_path();
        // The end lies before the start; the end search begins at the start segment.
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.0, 3.5),
            Point::new(0.0, 0.5),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sub, line(&[(0.0, 3.5), (0.0, 3.0)]));
    }

    #[test]
    fn test_loop_route_uses_forward_occurrence() {
        // Out along the equator and back on a parallel just north of it.
        let path = line(&[(0.0, 0.0), (0.0, 2.0), (0.001, 2.0), (0.001, 0.0)]);
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.0, 1.0),
            Point::new(0.001, 1.0),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            sub,
            line(&[(0.0, 1.0), (0.0, 2.0), (0.001, 2.0), (0.001, 1.0)])
        );
    }

    #[test]
    fn test_duplicate_vertices_tolerated() {
        let path = line(&[(0.0, 0.0), (0.0, 1.0), (0.0, 1.0), (0.0, 2.0)]);
        let sub = sub_path_by_closest(
            &path,
            Point::new(0.0, 0.5),
            Point::new(0.0, 1.5),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sub.first(), Some(Point::new(0.0, 0.5)));
        assert_eq!(sub.last(), Some(Point::new(0.0, 1.5)));
        assert!(sub.points().iter().all(Point::is_finite));
    }

    #[test]
    fn test_empty_path_is_error() {
        let result = sub_path_by_closest(
            &Polyline::default(),
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            DEFAULT_MIN_SEPARATION_KM,
        );
        assert_eq!(result, Err(GeometryError::EmptyPath));
    }

    #[test]
    fn test_single_point_path_is_none() {
        let path = line(&[(22.3, 114.17)]);
        let sub = sub_path_by_closest(
            &path,
            Point::new(22.2, 114.1),
            Point::new(22.4, 114.2),
            DEFAULT_MIN_SEPARATION_KM,
        )
        .unwrap();
        assert!(sub.is_none());
    }
}
