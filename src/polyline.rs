//! Polyline representation for route geometries.
//!
//! A polyline is an ordered sequence of decoded coordinates. Consecutive
//! duplicate points are allowed and show up as zero-length segments.

use serde::{Deserialize, Serialize};

use crate::haversine;
use crate::point::Point;

/// Which segment wins when two segments are equally close to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the first segment found in path order.
    Earliest,
    /// Keep the last segment found in path order.
    Latest,
}

/// The closest point on a polyline to some target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Index of the segment holding the projected point.
    pub segment_index: usize,
    /// The projected point, clamped to the segment.
    pub point: Point,
    /// Distance from the target to `point` in kilometers.
    pub distance_km: f64,
}

/// A polyline representing a physical path as decoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iterates over `(segment_index, start, end)` in path order.
    ///
    /// Segment `i` runs from vertex `i` to vertex `i + 1`. A single-point
    /// polyline yields one zero-length segment so that projection queries
    /// still resolve to that point; an empty polyline yields nothing.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        let single = match self.points.as_slice() {
            [only] => Some((0, *only, *only)),
            _ => None,
        };
        self.points
            .windows(2)
            .enumerate()
            .map(|(index, pair)| (index, pair[0], pair[1]))
            .chain(single)
    }

    /// Number of segments yielded by [`Polyline::segments`].
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 => 0,
            1 => 1,
            n => n - 1,
        }
    }

    /// Finds the segment whose projection is closest to `target`, scanning
    /// segments from `from_segment` to the end of the path.
    ///
    /// Returns `None` when there is no segment at or after `from_segment`.
    pub fn closest_projection(
        &self,
        target: Point,
        from_segment: usize,
        tie_break: TieBreak,
    ) -> Option<Projection> {
        let mut best: Option<Projection> = None;
        for (segment_index, start, end) in self.segments().skip(from_segment) {
            let point = haversine::closest_point_on_segment(target, start, end);
            let distance_km = haversine::distance_km(target, point);
            let better = match (&best, tie_break) {
                (None, _) => true,
                (Some(current), TieBreak::Earliest) => distance_km < current.distance_km,
                (Some(current), TieBreak::Latest) => distance_km <= current.distance_km,
            };
            if better {
                best = Some(Projection {
                    segment_index,
                    point,
                    distance_km,
                });
            }
        }
        best
    }

    /// Total great-circle length of the path in kilometers.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine::distance_km(pair[0], pair[1]))
            .sum()
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    /// Builds a polyline from `(lat, lng)` tuples.
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Point::from).collect())
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
