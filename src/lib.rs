//! route-geometry core
//!
//! Turns a transit route's raw path geometry and ordered stop list into
//! render-ready polylines: simplified paths, per-leg paths between
//! consecutive stops, sub-paths between two stops, and path-ordered searches
//! for stops or vehicles near a path.
//!
//! All distances are in kilometers. Every operation is a pure function of its
//! inputs and safe to call from any thread.

pub mod config;
pub mod error;
pub mod haversine;
pub mod operator;
pub mod point;
pub mod polyline;
pub mod proximity;
pub mod simplify;
pub mod split;
pub mod sub_path;
pub mod traits;
pub mod waypoints;

pub use config::EngineConfig;
pub use error::{GeometryError, Result};
pub use operator::Operator;
pub use point::Point;
pub use polyline::{Polyline, Projection, TieBreak};
pub use proximity::{
    ProximityMatch, find_matches_within_distance_ordered, find_matches_within_distance_ordered_by,
    find_points_within_distance_ordered, find_points_within_distance_ordered_by,
};
pub use simplify::simplify;
pub use split::split_by_closest_points;
pub use sub_path::sub_path_by_closest;
pub use traits::Located;
pub use waypoints::{PathLayout, RouteWaypoints};
