//! Error types for the geometry engine.
//!
//! Only precondition violations are errors. Degenerate geometry (zero-length
//! segments, coincident sub-path endpoints) resolves to defined values instead.

/// Errors returned when an operation is called with malformed input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("path is empty")]
    EmptyPath,

    #[error("at least 2 reference points are required, got {count}")]
    TooFewReferencePoints { count: usize },

    #[error("route has no stops")]
    NoStops,

    #[error("stop id count ({stop_ids}) does not match stop location count ({stops})")]
    StopCountMismatch { stop_ids: usize, stops: usize },

    #[error("invalid stop range {start}..={end} for a route with {len} stops")]
    InvalidStopRange { start: usize, end: usize, len: usize },

    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("non-finite coordinate ({lat}, {lng})")]
    NonFiniteCoordinate { lat: f64, lng: f64 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Reject negative, NaN or infinite distance thresholds.
pub(crate) fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_threshold_accepts_zero() {
        assert!(check_threshold("resolution", 0.0).is_ok());
        assert!(check_threshold("resolution", 0.25).is_ok());
    }

    #[test]
    fn test_check_threshold_rejects_bad_values() {
        assert!(check_threshold("resolution", -1.0).is_err());
        assert!(check_threshold("resolution", f64::NAN).is_err());
        assert!(check_threshold("resolution", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = GeometryError::TooFewReferencePoints { count: 1 };
        assert_eq!(
            err.to_string(),
            "at least 2 reference points are required, got 1"
        );

        let err = GeometryError::InvalidStopRange {
            start: 3,
            end: 1,
            len: 5,
        };
        assert!(err.to_string().contains("3..=1"));
    }
}
