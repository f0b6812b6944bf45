//! Route waypoints: a route's stop sequence together with its path geometry.
//!
//! Paths come in one of two layouts. When there is exactly one path per pair
//! of consecutive stops, each path already is the leg between those stops.
//! Otherwise every path is a full raw polyline for the whole route (one per
//! operator branch of a joint route) and legs or slices are computed from it
//! on demand.

use std::sync::OnceLock;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{GeometryError, Result};
use crate::operator::Operator;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::simplify::simplify_unchecked;
use crate::split::split_by_closest_points;
use crate::sub_path::sub_path_by_closest;

/// How the paths of a [`RouteWaypoints`] relate to its stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathLayout {
    /// `paths[i]` is the leg from stop `i` to stop `i + 1`.
    PreSegmented,
    /// Each path spans the whole route.
    Raw,
}

impl PathLayout {
    /// Layout implied by the number of stops and paths.
    pub fn infer(stop_count: usize, path_count: usize) -> Self {
        if stop_count > 0 && path_count == stop_count - 1 {
            PathLayout::PreSegmented
        } else {
            PathLayout::Raw
        }
    }
}

/// A route's stops and path geometry, immutable once built.
///
/// Stop indices are 0-based. The user-facing stop number of local index `i`
/// is `first_stop_index_offset + i`; a whole route starts at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RouteWaypointsData", into = "RouteWaypointsData")]
pub struct RouteWaypoints {
    route_number: String,
    operator: Operator,
    is_joint_route: bool,
    stop_ids: Vec<String>,
    stops: Vec<Point>,
    paths: Vec<Polyline>,
    is_high_res: bool,
    first_stop_index_offset: usize,
    layout: PathLayout,
    config: EngineConfig,
    simplified_paths: OnceLock<Vec<Polyline>>,
}

impl RouteWaypoints {
    /// Build waypoints for a whole route.
    ///
    /// Fails when there are no stops, when stop ids and locations differ in
    /// count, when a path is empty, or when any coordinate is not finite.
    pub fn new(
        route_number: impl Into<String>,
        operator: Operator,
        is_joint_route: bool,
        stop_ids: Vec<String>,
        stops: Vec<Point>,
        paths: Vec<Polyline>,
        is_high_res: bool,
    ) -> Result<Self> {
        let layout = PathLayout::infer(stops.len(), paths.len());
        Self::build(RouteWaypointsData {
            route_number: route_number.into(),
            operator,
            is_joint_route,
            stop_ids,
            stops,
            paths,
            is_high_res,
            first_stop_index_offset: 1,
            layout: Some(layout),
            config: EngineConfig::default(),
        })
    }

    fn build(data: RouteWaypointsData) -> Result<Self> {
        if data.stops.is_empty() {
            return Err(GeometryError::NoStops);
        }
        if data.stop_ids.len() != data.stops.len() {
            return Err(GeometryError::StopCountMismatch {
                stop_ids: data.stop_ids.len(),
                stops: data.stops.len(),
            });
        }
        let inferred = PathLayout::infer(data.stops.len(), data.paths.len());
        let layout = match data.layout {
            // A raw slice may end up with a path count that looks pre-segmented.
            Some(PathLayout::Raw) => PathLayout::Raw,
            _ => inferred,
        };
        if data.paths.iter().any(Polyline::is_empty) {
            return Err(GeometryError::EmptyPath);
        }
        let mut all_points = data
            .stops
            .iter()
            .chain(data.paths.iter().flat_map(|path| path.points()));
        if let Some(bad) = all_points.find(|p| !p.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate {
                lat: bad.lat,
                lng: bad.lng,
            });
        }
        data.config.validate()?;

        Ok(Self {
            route_number: data.route_number,
            operator: data.operator,
            is_joint_route: data.is_joint_route,
            stop_ids: data.stop_ids,
            stops: data.stops,
            paths: data.paths,
            is_high_res: data.is_high_res,
            first_stop_index_offset: data.first_stop_index_offset,
            layout,
            config: data.config,
            simplified_paths: OnceLock::new(),
        })
    }

    /// Replace the engine constants used by this route.
    pub fn with_config(mut self, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        self.simplified_paths = OnceLock::new();
        Ok(self)
    }

    pub fn with_first_stop_index_offset(mut self, offset: usize) -> Self {
        self.first_stop_index_offset = offset;
        self
    }

    pub fn route_number(&self) -> &str {
        &self.route_number
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn is_joint_route(&self) -> bool {
        self.is_joint_route
    }

    pub fn stop_ids(&self) -> &[String] {
        &self.stop_ids
    }

    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    pub fn paths(&self) -> &[Polyline] {
        &self.paths
    }

    /// Whether the paths are traced GPS geometry rather than straight
    /// stop-to-stop lines.
    pub fn is_high_res(&self) -> bool {
        self.is_high_res
    }

    pub fn first_stop_index_offset(&self) -> usize {
        self.first_stop_index_offset
    }

    pub fn layout(&self) -> PathLayout {
        self.layout
    }

    pub fn is_pre_segmented(&self) -> bool {
        self.layout == PathLayout::PreSegmented
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// User-facing number of the stop at `local_index`.
    pub fn stop_number(&self, local_index: usize) -> usize {
        self.first_stop_index_offset + local_index
    }

    /// Paths simplified for rendering, computed on first use.
    pub fn simplified_paths(&self) -> &[Polyline] {
        self.simplified_paths.get_or_init(|| {
            let resolution_km = self.config.simplify_resolution_km;
            let size_threshold = self.config.simplify_size_threshold;
            self.paths
                .par_iter()
                .map(|path| simplify_unchecked(path, resolution_km, size_threshold))
                .collect()
        })
    }

    /// Per-path legs between consecutive stops.
    ///
    /// Pre-segmented paths already are the legs and come back as a single
    /// list. Raw paths are each split at the stops, giving one list of
    /// `stops.len() - 1` legs per path.
    pub fn legs(&self) -> Result<Vec<Vec<Polyline>>> {
        match self.layout {
            PathLayout::PreSegmented => Ok(vec![self.paths.clone()]),
            PathLayout::Raw => self
                .paths
                .par_iter()
                .map(|path| split_by_closest_points(path, &self.stops))
                .collect(),
        }
    }

    /// The part of this route from stop `start_stop_index` to stop
    /// `end_stop_index`, both inclusive.
    ///
    /// Raw paths are cut between the projections of the new first and last
    /// stop. A raw path that yields no sub-path there (for example when both
    /// stops sit at the same place) contributes no geometry to the slice.
    pub fn sub_route(
        &self,
        start_stop_index: usize,
        end_stop_index: usize,
        new_first_stop_index_offset: usize,
    ) -> Result<RouteWaypoints> {
        if start_stop_index > end_stop_index || end_stop_index >= self.stops.len() {
            return Err(GeometryError::InvalidStopRange {
                start: start_stop_index,
                end: end_stop_index,
                len: self.stops.len(),
            });
        }

        let stop_ids = self.stop_ids[start_stop_index..=end_stop_index].to_vec();
        let stops = self.stops[start_stop_index..=end_stop_index].to_vec();

        let paths = match self.layout {
            PathLayout::PreSegmented => self.paths[start_stop_index..end_stop_index].to_vec(),
            PathLayout::Raw => {
                let first = self.stops[start_stop_index];
                let last = self.stops[end_stop_index];
                let min_separation_km = self.config.min_separation_km;
                let extracted = self
                    .paths
                    .par_iter()
                    .map(|path| sub_path_by_closest(path, first, last, min_separation_km))
                    .collect::<Result<Vec<_>>>()?;

                let mut paths = Vec::with_capacity(extracted.len());
                for (path_index, sub_path) in extracted.into_iter().enumerate() {
                    match sub_path {
                        Some(sub_path) => paths.push(sub_path),
                        None if start_stop_index != end_stop_index => {
                            tracing::warn!(
                                route = %self.route_number,
                                path_index,
                                start_stop_index,
                                end_stop_index,
                                "path has no geometry between stops, dropping it from the slice"
                            );
                        }
                        None => {}
                    }
                }
                paths
            }
        };

        tracing::debug!(
            route = %self.route_number,
            start_stop_index,
            end_stop_index,
            paths = paths.len(),
            "built sub-route"
        );

        Ok(RouteWaypoints {
            route_number: self.route_number.clone(),
            operator: self.operator.clone(),
            is_joint_route: self.is_joint_route,
            stop_ids,
            stops,
            paths,
            is_high_res: self.is_high_res,
            first_stop_index_offset: new_first_stop_index_offset,
            layout: self.layout,
            config: self.config,
            simplified_paths: OnceLock::new(),
        })
    }
}

impl PartialEq for RouteWaypoints {
    /// Compares route data; the simplification cache is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.route_number == other.route_number
            && self.operator == other.operator
            && self.is_joint_route == other.is_joint_route
            && self.stop_ids == other.stop_ids
            && self.stops == other.stops
            && self.paths == other.paths
            && self.is_high_res == other.is_high_res
            && self.first_stop_index_offset == other.first_stop_index_offset
            && self.layout == other.layout
            && self.config == other.config
    }
}

/// Serialized form of [`RouteWaypoints`], validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RouteWaypointsData {
    route_number: String,
    operator: Operator,
    #[serde(default)]
    is_joint_route: bool,
    stop_ids: Vec<String>,
    stops: Vec<Point>,
    paths: Vec<Polyline>,
    #[serde(default)]
    is_high_res: bool,
    #[serde(default = "default_first_stop_index_offset")]
    first_stop_index_offset: usize,
    #[serde(default)]
    layout: Option<PathLayout>,
    #[serde(default)]
    config: EngineConfig,
}

fn default_first_stop_index_offset() -> usize {
    1
}

impl TryFrom<RouteWaypointsData> for RouteWaypoints {
    type Error = GeometryError;

    fn try_from(data: RouteWaypointsData) -> Result<Self> {
        Self::build(data)
    }
}

impl From<RouteWaypoints> for RouteWaypointsData {
    fn from(waypoints: RouteWaypoints) -> Self {
        Self {
            route_number: waypoints.route_number,
            operator: waypoints.operator,
            is_joint_route: waypoints.is_joint_route,
            stop_ids: waypoints.stop_ids,
            stops: waypoints.stops,
            paths: waypoints.paths,
            is_high_res: waypoints.is_high_res,
            first_stop_index_offset: waypoints.first_stop_index_offset,
            layout: Some(waypoints.layout),
            config: waypoints.config,
        }
    }
}
