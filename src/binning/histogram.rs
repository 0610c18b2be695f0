//! Equal-width histogram with dynamic growth and rebinning
//!
//! Bins are kept in a `VecDeque` so growth on either end is O(1) per bin.
//! The layout always satisfies:
//!
//! - bins are sorted by floor and contiguous (each ceil is the next floor)
//! - `intervals[0]` is the only first bin
//! - `min == intervals[0].floor()` and `max == intervals[last].ceil()`
//! - the sum of bin counts equals the number of recorded observations

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use log::{debug, trace};

use super::interval::Interval;
use crate::error::HistogramError;

/// What to do with a value that falls outside `[min, max]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AppendPolicy {
    /// Credit it to the nearest edge: the first bin's floor or the last bin's ceil
    AddToEdge,
    /// Append bins of the current width until the value is covered
    Expand,
    /// Drop it
    #[default]
    IntervalOnly,
}

/// Fixed-interval exact-count histogram
///
/// # Example
///
/// ```
/// use binstats::{AppendPolicy, Histogram};
///
/// let mut hist = Histogram::new(0.0, 5.0, 5).unwrap();
/// hist.add_batch([0.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0], AppendPolicy::AddToEdge)
///     .unwrap();
///
/// assert_eq!(hist.count(), 7);
/// assert_eq!(hist.count_at(2).unwrap(), 2); // (2; 3]
///
/// // growing keeps the bin width
/// hist.add_number(-1.5, AppendPolicy::Expand).unwrap();
/// assert_eq!(hist.min(), -2.0);
/// assert_eq!(hist.bins(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    /// Lower boundary, floor of the first bin
    min: f64,
    /// Upper boundary, ceil of the last bin
    max: f64,
    intervals: VecDeque<Interval>,
}

impl Histogram {
    /// Create a histogram of `bins` equal-width bins spanning `[min, max]`
    ///
    /// # Errors
    ///
    /// - [`HistogramError::InvalidBinCount`] if `bins == 0`
    /// - [`HistogramError::InvalidBounds`] unless `min < max` and the bins
    ///   have a representable non-zero width
    pub fn new(min: f64, max: f64, bins: usize) -> Result<Self, HistogramError> {
        let intervals = generate_intervals(min, max, bins)?;
        Ok(Self {
            min,
            max,
            intervals,
        })
    }

    /// Lower boundary of the histogram
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper boundary of the histogram
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.intervals.len()
    }

    /// Width of the first bin, which is also the growth step
    pub fn bin_width(&self) -> f64 {
        self.intervals[0].width()
    }

    /// Bins in ascending order
    pub fn intervals(&self) -> impl DoubleEndedIterator<Item = &Interval> + ExactSizeIterator {
        self.intervals.iter()
    }

    /// Bin at `index`, if any
    pub fn interval(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    /// Total number of recorded observations
    pub fn count(&self) -> u64 {
        self.intervals.iter().map(Interval::count).sum()
    }

    /// Number of observations in bin `index`
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError::IndexOutOfRange`] if `index >= bins()`.
    pub fn count_at(&self, index: usize) -> Result<u64, HistogramError> {
        self.intervals
            .get(index)
            .map(Interval::count)
            .ok_or(HistogramError::IndexOutOfRange {
                index,
                bins: self.bins(),
            })
    }

    /// Whether no observation has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.intervals.iter().all(|bin| bin.count() == 0)
    }

    /// Record a single value
    ///
    /// NaN is dropped under every policy. Under [`AppendPolicy::Expand`] an
    /// infinite value is dropped as well, since no number of bins covers it.
    pub fn add_number(&mut self, value: f64, policy: AppendPolicy) -> Result<(), HistogramError> {
        match policy {
            AppendPolicy::AddToEdge if value < self.min => {
                let first = &mut self.intervals[0];
                let floor = first.floor();
                return first.add_element(floor);
            }
            AppendPolicy::AddToEdge if value > self.max => {
                let last = self.intervals.len() - 1;
                let bin = &mut self.intervals[last];
                let ceil = bin.ceil();
                return bin.add_element(ceil);
            }
            AppendPolicy::Expand if value.is_infinite() => {
                trace!("dropping {} that cannot be covered by expansion", value);
                return Ok(());
            }
            AppendPolicy::Expand if value < self.min => self.grow_left(value)?,
            AppendPolicy::Expand if value > self.max => self.grow_right(value)?,
            _ => {}
        }
        self.route(value)
    }

    /// Record every value of `values` with the same policy
    ///
    /// Stops at the first error; values before it stay recorded.
    pub fn add_batch<I>(&mut self, values: I, policy: AppendPolicy) -> Result<(), HistogramError>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        for value in values {
            self.add_number(value.into(), policy)?;
        }
        Ok(())
    }

    /// Deliver `value` to the first bin that contains it
    fn route(&mut self, value: f64) -> Result<(), HistogramError> {
        if value.is_nan() || value < self.min || value > self.max {
            trace!("dropping {} outside [{}, {}]", value, self.min, self.max);
            return Ok(());
        }
        match self.intervals.iter_mut().find(|bin| bin.contains(value)) {
            Some(bin) => bin.add_element(value),
            None => Ok(()),
        }
    }

    /// Prepend first-bin-width bins until one contains `value`
    fn grow_left(&mut self, value: f64) -> Result<(), HistogramError> {
        let step = self.bin_width();
        let before = self.bins();
        loop {
            let head = &mut self.intervals[0];
            let ceil = head.floor();
            let mut bin = Interval::new(ceil - step, ceil)?;
            bin.promote_to_first();
            // values sitting on the old minimum now fall on this bin's ceil
            bin.add_elements(head.left_boundary_count());
            head.demote_from_first();

            let reached = bin.contains(value);
            self.min = bin.floor();
            self.intervals.push_front(bin);
            if reached {
                break;
            }
        }
        debug!(
            "expanded left by {} bins, range now [{}, {}]",
            self.bins() - before,
            self.min,
            self.max
        );
        Ok(())
    }

    /// Append first-bin-width bins until one contains `value`
    fn grow_right(&mut self, value: f64) -> Result<(), HistogramError> {
        let step = self.bin_width();
        let before = self.bins();
        loop {
            let floor = self.max;
            let bin = Interval::new(floor, floor + step)?;
            let reached = bin.contains(value);
            self.max = bin.ceil();
            self.intervals.push_back(bin);
            if reached {
                break;
            }
        }
        debug!(
            "expanded right by {} bins, range now [{}, {}]",
            self.bins() - before,
            self.min,
            self.max
        );
        Ok(())
    }

    /// Change the lower boundary of an empty histogram
    ///
    /// # Errors
    ///
    /// - [`HistogramError::BoundaryRedefinitionDenied`] once anything was recorded
    /// - [`HistogramError::InvalidBounds`] if the new range is empty; the
    ///   histogram is left unchanged
    pub fn set_range_min(&mut self, min: f64) -> Result<(), HistogramError> {
        self.set_range(min, self.max)
    }

    /// Change the upper boundary of an empty histogram
    ///
    /// Same errors as [`set_range_min`](Self::set_range_min).
    pub fn set_range_max(&mut self, max: f64) -> Result<(), HistogramError> {
        self.set_range(self.min, max)
    }

    /// Change both boundaries of an empty histogram, keeping the bin count
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), HistogramError> {
        let observations = self.count();
        if observations > 0 {
            return Err(HistogramError::BoundaryRedefinitionDenied { observations });
        }
        self.intervals = generate_intervals(min, max, self.bins())?;
        debug!(
            "range redefined from [{}, {}] to [{}, {}]",
            self.min, self.max, min, max
        );
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Regenerate the layout with `bins` equal-width bins over `[min, max]`
    ///
    /// An empty histogram accepts any positive count. Once observations are
    /// recorded the count may only stay the same or shrink: each old bin's
    /// count moves into the new bin containing the old bin's ceil. Asking for
    /// more bins than a populated histogram has is refused, since a recorded
    /// count cannot be split across finer boundaries.
    ///
    /// ```
    /// use binstats::prelude::*;
    ///
    /// let mut hist = Histogram::new(0.0, 6.0, 6).unwrap();
    /// hist.add_batch([1.0, 1.0, 2.0, 3.0, 5.0], AppendPolicy::IntervalOnly)
    ///     .unwrap();
    ///
    /// assert!(matches!(
    ///     hist.set_bin_count(12),
    ///     Err(HistogramError::InvalidBinCount { requested: 12, .. })
    /// ));
    /// hist.set_bin_count(3).unwrap();
    /// assert_eq!(hist.count(), 5);
    /// ```
    ///
    /// When the old boundaries are not a subset of the new ones, an old bin
    /// straddling a new boundary lands wholly on the side of its ceil. Counts
    /// are preserved, positions are approximate.
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError::InvalidBinCount`] if `bins == 0`, or if
    /// `bins` exceeds the current count after ingestion. The histogram is left
    /// unchanged.
    pub fn set_bin_count(&mut self, bins: usize) -> Result<(), HistogramError> {
        let current = self.bins();
        if self.is_empty() {
            self.intervals = generate_intervals(self.min, self.max, bins)?;
            debug!("bin count changed from {} to {}", current, bins);
            return Ok(());
        }
        if bins > current {
            return Err(HistogramError::InvalidBinCount {
                requested: bins,
                reason: "recorded counts cannot be split into finer bins",
            });
        }

        let mut fresh = generate_intervals(self.min, self.max, bins)?;
        transplant(&self.intervals, &mut fresh);
        self.intervals = fresh;
        debug!("rebinned {} bins into {}", current, bins);
        Ok(())
    }
}

/// Split `[min, max]` into `bins` equal-width bins with the first one closed
fn generate_intervals(
    min: f64,
    max: f64,
    bins: usize,
) -> Result<VecDeque<Interval>, HistogramError> {
    if bins == 0 {
        return Err(HistogramError::InvalidBinCount {
            requested: bins,
            reason: "a histogram needs at least one bin",
        });
    }
    if min.is_nan() || max.is_nan() || min >= max {
        return Err(HistogramError::InvalidBounds {
            floor: min,
            ceil: max,
        });
    }

    let span = max - min;
    let boundary = |i: usize| {
        if i == bins {
            max
        } else {
            min + span * i as f64 / bins as f64
        }
    };

    let mut intervals = VecDeque::with_capacity(bins);
    for i in 0..bins {
        intervals.push_back(Interval::new(boundary(i), boundary(i + 1))?);
    }
    intervals[0].promote_to_first();
    Ok(intervals)
}

/// Greedy two-pointer merge of `previous` counts into the `fresh` layout
fn transplant(previous: &VecDeque<Interval>, fresh: &mut VecDeque<Interval>) {
    let last = fresh.len() - 1;
    let mut old = 0;
    for (i, bin) in fresh.iter_mut().enumerate() {
        while old < previous.len() {
            let prior = &previous[old];
            // a ceil left just below this bin by float drift still belongs here
            let take =
                i == last || bin.contains_ceil_of(prior) || prior.ceil() <= bin.floor();
            if !take {
                break;
            }
            bin.absorb(prior);
            old += 1;
        }
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram:")?;
        for bin in &self.intervals {
            writeln!(f, " {}", bin)?;
        }
        Ok(())
    }
}
