//! Fixed-interval binning
//!
//! A [`Histogram`] owns an ordered run of [`Interval`]s of equal width. Values
//! are routed to the bin containing them. Values outside the range are
//! handled according to an [`AppendPolicy`].
//!
//! # Example
//!
//! ```
//! use binstats::binning::{AppendPolicy, Histogram};
//! use binstats::traits::Moments;
//!
//! let mut hist = Histogram::new(0.0, 10.0, 10).unwrap();
//!
//! for value in [1.2, 3.4, 3.6, 5.0, 7.7, 12.5] {
//!     hist.add_number(value, AppendPolicy::Expand).unwrap();
//! }
//!
//! assert_eq!(hist.bins(), 13);
//! println!("{}", hist);
//! println!("Mean: {}", hist.mean());
//! println!("{}", hist.describe());
//! ```

mod histogram;
mod interval;
mod stats;

pub use histogram::{AppendPolicy, Histogram};
pub use interval::{BoundaryMode, Interval};
pub use stats::Summary;
