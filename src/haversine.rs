//! Geo primitives: great-circle distance, bearing and segment projection.
//!
//! Distances are in kilometers everywhere in the crate. Projection works in
//! plain (lat, lng) degree space, which is accurate enough at the scale of a
//! single path segment and keeps tie-breaking between segments exact.

use crate::point::Point;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn distance_km(from: Point, to: Point) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Initial compass bearing from `from` to `to`, in degrees within `[0, 360)`.
///
/// Identical points have a bearing of `0.0`.
pub fn bearing_deg(from: Point, to: Point) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Position of the projection of `p` along segment `a`-`b`, clamped to `[0, 1]`.
///
/// A zero-length segment has no direction, so the parameter is `0.0`.
pub fn projection_parameter(p: Point, a: Point, b: Point) -> f64 {
    let d_lat = b.lat - a.lat;
    let d_lng = b.lng - a.lng;
    let len_sq = d_lat * d_lat + d_lng * d_lng;
    if len_sq == 0.0 {
        return 0.0;
    }

    let t = ((p.lat - a.lat) * d_lat + (p.lng - a.lng) * d_lng) / len_sq;
    if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
}

/// Closest point to `p` on the segment `a`-`b` (never on its extension).
///
/// Clamped projections return the segment endpoint itself, so callers can
/// compare the result against path vertices with exact equality.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let t = projection_parameter(p, a, b);
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        Point::new(a.lat + t * (b.lat - a.lat), a.lng + t * (b.lng - a.lng))
    }
}

/// Distance in kilometers from `p` to its projection on segment `a`-`b`.
pub fn distance_to_segment_km(p: Point, a: Point, b: Point) -> f64 {
    distance_km(p, closest_point_on_segment(p, a, b))
}
