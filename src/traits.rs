//! Core domain traits for the geometry engine.
//!
//! Intentionally minimal. The data layer implements them for its own stop
//! and vehicle types.

use crate::point::Point;

/// Anything with a single geographic location: a stop, a vehicle, a landmark.
pub trait Located {
    fn location(&self) -> Point;
}

impl Located for Point {
    fn location(&self) -> Point {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Point {
        (**self).location()
    }
}
