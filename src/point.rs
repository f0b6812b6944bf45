//! Geographic point value type.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
///
/// Equality is exact field equality. Two points that differ by a rounding
/// error are different points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Point) -> f64 {
        crate::haversine::distance_km(*self, *other)
    }
}

impl From<(f64, f64)> for Point {
    /// Builds a point from a `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.lat, point.lng)
    }
}
