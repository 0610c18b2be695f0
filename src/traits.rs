//! Core traits for binned statistics
//!
//! A type that can produce raw and central moments over its sample gets the
//! usual shape statistics for free through [`Moments`].

use crate::math;

/// Moment-based descriptive statistics
///
/// Implementors supply the sample size and the two moment families; the
/// remaining statistics are derived from them. All methods return `NaN` for
/// an empty sample.
pub trait Moments {
    /// Number of observations in the sample
    fn observations(&self) -> u64;

    /// Raw moment of degree `n`: `(1/N) * sum(x_i^n)`
    fn raw_moment(&self, n: i32) -> f64;

    /// Central moment of degree `n`: `(1/N) * sum((x_i - mean)^n)`
    fn central_moment(&self, n: i32) -> f64;

    /// Arithmetic mean
    fn mean(&self) -> f64 {
        self.raw_moment(1)
    }

    /// Root mean square of the sample, `sqrt(raw_moment(2))`
    ///
    /// Measured from zero, not from the mean.
    fn std(&self) -> f64 {
        math::sqrt(self.raw_moment(2))
    }

    /// Coefficient of variation, `std / mean`
    ///
    /// Not the textbook variance. The name is kept for compatibility with
    /// existing reports that label this value "variance".
    fn variance(&self) -> f64 {
        self.std() / self.mean()
    }

    /// Skewness, `m3 / std^3`
    fn skewness(&self) -> f64 {
        self.central_moment(3) / math::powi(self.std(), 3)
    }

    /// Kurtosis, `m4 / std^4`
    fn kurtosis(&self) -> f64 {
        self.central_moment(4) / math::powi(self.std(), 4)
    }

    /// Excess kurtosis, `kurtosis - 3`
    fn excess(&self) -> f64 {
        self.kurtosis() - 3.0
    }
}
