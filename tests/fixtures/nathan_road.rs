//! Bus stops along Nathan Road, Kowloon, from the Star Ferry northwards.
//!
//! The traced path is synthesized from the stop coordinates: dense
//! interpolation between stops with a small deterministic sideways wobble,
//! so stops sit near the path but never exactly on a vertex.

#![allow(dead_code)]

use route_geometry::{Located, Point, Polyline};

/// A named stop with coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lng: f64) -> Self {
        Self { id, name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

impl Located for Stop {
    fn location(&self) -> Point {
        self.point()
    }
}

pub const NATHAN_ROAD_STOPS: &[Stop] = &[
    Stop::new("STAR_FERRY", "Star Ferry", 22.29395, 114.16880),
    Stop::new("MIDDLE_ROAD", "Middle Road", 22.29650, 114.17215),
    Stop::new("CAMERON_ROAD", "Cameron Road", 22.29905, 114.17208),
    Stop::new("AUSTIN_ROAD", "Austin Road", 22.30420, 114.17145),
    Stop::new("JORDAN", "Jordan", 22.30490, 114.17120),
    Stop::new("YAU_MA_TEI", "Yau Ma Tei", 22.31175, 114.17060),
    Stop::new("MONG_KOK", "Mong Kok", 22.31870, 114.16940),
    Stop::new("PRINCE_EDWARD", "Prince Edward", 22.32450, 114.16830),
];

/// A stop near Nathan Road that the route does not serve.
pub const OFF_ROUTE_STOP: Stop = Stop::new("TST_EAST", "Tsim Sha Tsui East", 22.29780, 114.17760);

/// Interpolated vertices per leg of the traced path.
pub const POINTS_PER_LEG: usize = 40;

/// Vertices traced beyond the last stop.
pub const TAIL_POINTS: usize = 3;

pub fn stop_points() -> Vec<Point> {
    NATHAN_ROAD_STOPS.iter().map(Stop::point).collect()
}

pub fn stop_ids() -> Vec<String> {
    NATHAN_ROAD_STOPS.iter().map(|s| s.id.to_string()).collect()
}

/// Sideways GPS wobble, at most ~2 m.
fn wobble(k: usize) -> f64 {
    (k as f64 * 0.7).sin() * 0.00002
}

/// Dense traced path from the first stop to a little beyond the last.
pub fn nathan_road_path() -> Polyline {
    let stops = stop_points();
    let mut points = Vec::new();
    let mut k = 0;

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        for step in 0..POINTS_PER_LEG {
            let t = step as f64 / POINTS_PER_LEG as f64;
            points.push(Point::new(
                from.lat + (to.lat - from.lat) * t,
                from.lng + (to.lng - from.lng) * t + wobble(k),
            ));
            k += 1;
        }
    }

    // Keep heading the same way past the last stop.
    let before_last = stops[stops.len() - 2];
    let last = stops[stops.len() - 1];
    for step in 0..=TAIL_POINTS {
        let t = step as f64 / POINTS_PER_LEG as f64;
        points.push(Point::new(
            last.lat + (last.lat - before_last.lat) * t,
            last.lng + (last.lng - before_last.lng) * t + wobble(k),
        ));
        k += 1;
    }

    Polyline::new(points)
}

/// A traced path on a different road, north of every Nathan Road stop.
pub fn unrelated_path() -> Polyline {
    Polyline::from(vec![(22.3400, 114.1900), (22.3450, 114.1905), (22.3500, 114.1910)])
}
