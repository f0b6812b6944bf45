//! Test fixtures for route-geometry.
//!
//! Provides realistic test data:
//! - Stops along Nathan Road, Kowloon (coordinates from OpenStreetMap)
//! - A dense, slightly noisy traced path running past them

pub mod nathan_road;

pub use nathan_road::*;
