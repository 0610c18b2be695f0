//! # Binstats
//!
//! Fixed-interval, exact-count histograms with descriptive statistics
//! computed from the binned representation.
//!
//! Observations are counted into contiguous equal-width bins. Raw values are
//! not kept. Mean, root-mean-square `std`, skewness, kurtosis, median and median
//! absolute deviation are computed over the *variational series*, a
//! synthetic ordered sample in which every bin contributes its midpoint once
//! per observation.
//!
//! ## Features
//!
//! - **Boundary rule**: the first bin is `[floor, ceil]`, every other bin is
//!   `(floor, ceil]`, so each value in range lands in exactly one bin
//! - **Out-of-range policies**: clamp to the edge, grow by whole bins, or drop
//! - **Rebinning**: coarsen a populated histogram without losing counts
//!
//! ## Quick Start
//!
//! ```rust
//! use binstats::prelude::*;
//!
//! let mut hist = Histogram::new(0.0, 6.0, 6).unwrap();
//! hist.add_batch([1.0, 1.0, 2.0, 3.0, 5.0], AppendPolicy::IntervalOnly)
//!     .unwrap();
//!
//! hist.set_bin_count(3).unwrap();
//! assert_eq!(hist.count(), 5);
//! assert_eq!(hist.count_at(0).unwrap(), 3);
//!
//! println!("mean = {}, median = {}", hist.mean(), hist.median());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library math and text ingestion ([`io`])
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod binning;
pub mod error;
mod math;
pub mod traits;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod io;

pub mod prelude {
    pub use crate::binning::{AppendPolicy, BoundaryMode, Histogram, Interval, Summary};
    pub use crate::error::HistogramError;
    pub use crate::traits::Moments;
}

pub use binning::{AppendPolicy, BoundaryMode, Histogram, Interval, Summary};
pub use error::HistogramError;
pub use traits::Moments;
