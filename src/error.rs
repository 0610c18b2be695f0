//! Error taxonomy for histogram operations
//!
//! Every failure is a caller-input validation error reported synchronously.
//! Nothing here is transient, so there is nothing to retry.

use thiserror::Error;

/// Error returned by [`Interval`](crate::binning::Interval) and
/// [`Histogram`](crate::binning::Histogram) operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistogramError {
    /// Bin count is zero, or would refine an already populated layout
    #[error("invalid bin count {requested}: {reason}")]
    InvalidBinCount {
        requested: usize,
        reason: &'static str,
    },

    /// Interval floor is not strictly below its ceil
    #[error("invalid interval bounds: floor {floor} must be below ceil {ceil}")]
    InvalidBounds { floor: f64, ceil: f64 },

    /// Value delivered to an interval that does not contain it
    #[error("value {value} is outside interval ({floor}; {ceil}]")]
    ElementOutOfRange { value: f64, floor: f64, ceil: f64 },

    /// Range mutation attempted after observations were recorded
    #[error("cannot redefine histogram range after {observations} observations were recorded")]
    BoundaryRedefinitionDenied { observations: u64 },

    /// Bin index past the end of the layout
    #[error("bin index {index} out of range for {bins} bins")]
    IndexOutOfRange { index: usize, bins: usize },
}
