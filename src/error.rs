//! Error types for lane construction and queries.

use thiserror::Error;

/// Errors that can occur when building or querying lanes.
#[derive(Debug, Error)]
pub enum LaneError {
    /// The support points cannot define a closed periodic curve.
    #[error("Degenerate support points: {0}")]
    DegenerateInput(#[from] Degeneracy),

    /// A search bracket which is empty or inverted.
    #[error("Invalid search range: [{min}, {max}]")]
    InvalidRange {
        /// Lower end of the requested bracket
        min: f64,
        /// Upper end of the requested bracket
        max: f64,
    },

    /// A search precision or sample spacing which is not a positive finite number.
    #[error("Invalid precision: {0}")]
    InvalidPrecision(f64),

    /// No lane exists with the requested index.
    #[error("Unknown lane {index}: only {count} lanes exist")]
    UnknownLane {
        /// The requested lane index
        index: usize,
        /// The number of lanes in the set
        count: usize,
    },

    /// Support points could not be parsed from JSON.
    #[cfg(feature = "serde")]
    #[error("Malformed support point data: {0}")]
    Json(#[from] serde_json::Error),
}

/// The reason a set of support points was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Degeneracy {
    /// Not enough points to fit a periodic cubic.
    #[error("required at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum number of points
        required: usize,
        /// Number of points provided
        actual: usize,
    },

    /// The arc-length at `index` is not greater than the one before it.
    #[error("arc-length does not increase at point {index}")]
    NonIncreasingArcLength { index: usize },

    /// The point at `index` has a NaN or infinite component.
    #[error("point {index} is not finite")]
    NonFinite { index: usize },

    /// The closing point's arc-length, and so the lane length, is not positive.
    #[error("lane length {length} is not positive")]
    NonPositiveLength { length: f64 },

    /// The first and last points are `gap` units apart.
    #[error("first and last points are {gap} apart, loop is not closed")]
    Unclosed { gap: f64 },

    /// A row index passed to a selection is out of range or out of order.
    #[error("row {index} cannot be selected from {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
}

impl LaneError {
    /// Create an InvalidRange error.
    pub fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Create an UnknownLane error.
    pub fn unknown_lane(index: usize, count: usize) -> Self {
        Self::UnknownLane { index, count }
    }
}
