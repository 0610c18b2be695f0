//! Statistics over the variational series
//!
//! Every statistic treats the histogram as a synthetic sample in which each
//! bin contributes its median `count` times. Raw values are never stored, so
//! results are exact for that sample and approximate for the original data.
//! Nothing is cached: each query walks the bins again.

use core::{fmt, iter};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use super::histogram::Histogram;
use super::interval::Interval;
use crate::math;
use crate::traits::Moments;

/// Descriptive statistics of a histogram at one point in time
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub count: u64,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    /// Coefficient of variation
    pub variance: f64,
    pub skewness: f64,
    pub excess: f64,
    pub kurtosis: f64,
    pub mad: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Describe histogram:")?;
        writeln!(f, "Count = {}", self.count)?;
        writeln!(f, "Range = {}", self.range)?;
        writeln!(f, "Mean = {}", self.mean)?;
        writeln!(f, "Median = {}", self.median)?;
        writeln!(f, "STD = {}", self.std)?;
        writeln!(f, "Variance coef = {}", self.variance)?;
        writeln!(f, "Skewness = {}", self.skewness)?;
        writeln!(f, "Excess = {}", self.excess)?;
        writeln!(f, "Kurtosis = {}", self.kurtosis)?;
        write!(f, "Median absolute deviation = {}", self.mad)
    }
}

impl Histogram {
    /// Lazily yield the variational series in ascending order
    pub fn series(&self) -> impl Iterator<Item = f64> + '_ {
        self.intervals()
            .flat_map(|bin| iter::repeat(bin.median()).take(bin.count() as usize))
    }

    /// The variational series as an owned sample of `count()` values
    pub fn variational_series(&self) -> Vec<f64> {
        self.series().collect()
    }

    /// Median of the variational series, `NaN` when empty
    pub fn median(&self) -> f64 {
        let weighted: Vec<(f64, u64)> = self
            .intervals()
            .map(|bin| (bin.median(), bin.count()))
            .collect();
        weighted_median(&weighted, self.count())
    }

    /// Median absolute deviation from the median, `NaN` when empty
    pub fn mad(&self) -> f64 {
        let median = self.median();
        let mut deviations: Vec<(f64, u64)> = self
            .intervals()
            .filter(|bin| bin.count() > 0)
            .map(|bin| (math::abs(bin.median() - median), bin.count()))
            .collect();
        deviations.sort_by(|a, b| a.0.total_cmp(&b.0));
        weighted_median(&deviations, self.count())
    }

    /// Distance from the first non-empty floor to the last non-empty ceil
    ///
    /// Empty bins at either end do not count. `NaN` when empty.
    pub fn range(&self) -> f64 {
        let occupied = |bin: &&Interval| bin.count() > 0;
        match (
            self.intervals().find(occupied),
            self.intervals().rev().find(occupied),
        ) {
            (Some(first), Some(last)) => last.ceil() - first.floor(),
            _ => f64::NAN,
        }
    }

    /// Snapshot of every statistic
    pub fn describe(&self) -> Summary {
        Summary {
            count: self.count(),
            range: self.range(),
            mean: self.mean(),
            median: self.median(),
            std: self.std(),
            variance: self.variance(),
            skewness: self.skewness(),
            excess: self.excess(),
            kurtosis: self.kurtosis(),
            mad: self.mad(),
        }
    }
}

impl Moments for Histogram {
    fn observations(&self) -> u64 {
        self.count()
    }

    fn raw_moment(&self, n: i32) -> f64 {
        let sum: f64 = self.series().map(|x| math::powi(x, n)).sum();
        sum / self.count() as f64
    }

    fn central_moment(&self, n: i32) -> f64 {
        let mean = self.mean();
        let sum: f64 = self.series().map(|x| math::powi(x - mean, n)).sum();
        sum / self.count() as f64
    }
}

/// Median of a sample given as ascending `(value, multiplicity)` runs
fn weighted_median(sorted: &[(f64, u64)], total: u64) -> f64 {
    if total == 0 {
        return f64::NAN;
    }
    let nth = |rank: u64| {
        let mut seen = 0;
        for &(value, weight) in sorted {
            seen += weight;
            if rank < seen {
                return value;
            }
        }
        f64::NAN
    };
    if total % 2 == 1 {
        nth(total / 2)
    } else {
        (nth(total / 2 - 1) + nth(total / 2)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::AppendPolicy;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample() -> Histogram {
        let mut hist = Histogram::new(0.0, 4.0, 4).unwrap();
        hist.add_batch([0.5, 1.5, 1.5, 2.5], AppendPolicy::IntervalOnly)
            .unwrap();
        hist
    }

    #[test]
    fn test_variational_series() {
        let mut hist = Histogram::new(0.0, 4.0, 4).unwrap();
        hist.add_batch([0.1, 0.9, 3.2, 1.7], AppendPolicy::IntervalOnly)
            .unwrap();
        assert_eq!(hist.variational_series(), vec![0.5, 0.5, 1.5, 3.5]);
        assert_eq!(hist.series().count() as u64, hist.count());
    }

    #[test]
    fn test_moments() {
        let hist = sample();
        assert!(close(hist.mean(), 1.5));
        assert!(close(hist.raw_moment(2), 2.75));
        assert!(close(hist.central_moment(2), 0.5));
        assert!(close(hist.std(), 2.75f64.sqrt()));
        assert!(close(hist.variance(), 2.75f64.sqrt() / 1.5));
        assert!(close(hist.skewness(), 0.0));
        assert!(close(hist.kurtosis(), 0.5 / (2.75 * 2.75)));
        assert!(close(hist.excess(), 0.5 / (2.75 * 2.75) - 3.0));
    }

    #[test]
    fn test_median_even() {
        assert!(close(sample().median(), 1.5));
    }

    #[test]
    fn test_median_odd() {
        let mut hist = Histogram::new(0.0, 4.0, 4).unwrap();
        hist.add_batch([0.2, 0.7, 3.9], AppendPolicy::IntervalOnly)
            .unwrap();
        assert!(close(hist.median(), 0.5));
        assert!(close(hist.mad(), 0.0));
        assert!(close(hist.range(), 4.0));
    }

    #[test]
    fn test_median_between_bins() {
        let mut hist = Histogram::new(0.0, 4.0, 4).unwrap();
        hist.add_batch([0.5, 3.5], AppendPolicy::IntervalOnly).unwrap();
        assert!(close(hist.median(), 2.0));
        assert!(close(hist.mad(), 1.5));
    }

    #[test]
    fn test_mad() {
        // deviations from 1.5 are [1, 0, 0, 1]
        assert!(close(sample().mad(), 0.5));
    }

    #[test]
    fn test_range_skips_empty_edges() {
        let mut hist = Histogram::new(0.0, 10.0, 10).unwrap();
        hist.add_batch([4.5, 6.5], AppendPolicy::IntervalOnly).unwrap();
        assert!(close(hist.range(), 3.0));

        assert!(close(sample().range(), 3.0));
    }

    #[test]
    fn test_empty_is_nan() {
        let hist = Histogram::new(0.0, 4.0, 4).unwrap();
        let summary = hist.describe();
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.median.is_nan());
        assert!(summary.mad.is_nan());
        assert!(summary.range.is_nan());
        assert!(hist.variational_series().is_empty());
    }

    #[test]
    fn test_describe() {
        let summary = sample().describe();
        assert_eq!(summary.count, 4);
        assert!(close(summary.mean, 1.5));
        assert!(close(summary.median, 1.5));
        assert!(close(summary.excess, -1.0));
        assert!(close(summary.range, 3.0));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_summary_display() {
        let report = sample().describe().to_string();
        assert!(report.starts_with("Describe histogram:\nCount = 4\nRange = 3\nMean = 1.5\n"));
        assert!(report.ends_with("Median absolute deviation = 0.5"));
    }

    #[test]
    fn test_weighted_median_skips_empty_runs() {
        let runs = [(1.0, 0), (2.0, 2), (3.0, 0), (4.0, 1)];
        assert_eq!(weighted_median(&runs, 3), 2.0);
        assert!(weighted_median(&runs, 0).is_nan());
    }
}
