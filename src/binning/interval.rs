//! Single histogram bin
//!
//! An [`Interval`] has fixed bounds and a mutable count. The leftmost bin of a
//! histogram is closed on both ends, `[floor, ceil]`; every other bin is
//! right-inclusive, `(floor, ceil]`. That asymmetry puts every value of the
//! histogram's range into exactly one bin.

use core::fmt;

use crate::error::HistogramError;

/// Boundary-inclusion state of a bin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BoundaryMode {
    /// Leftmost bin, `[floor, ceil]`
    ///
    /// `on_left` counts observations equal to `floor`. They belong to this
    /// bin only while it stays leftmost.
    First { on_left: u64 },
    /// Any other bin, `(floor, ceil]`
    Interior,
}

/// A bin `[floor, ceil]` or `(floor, ceil]` holding an observation count
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    floor: f64,
    ceil: f64,
    count: u64,
    mode: BoundaryMode,
}

impl Interval {
    /// Create an empty interior bin
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError::InvalidBounds`] unless `floor < ceil`
    /// (NaN bounds included).
    pub fn new(floor: f64, ceil: f64) -> Result<Self, HistogramError> {
        if floor.is_nan() || ceil.is_nan() || floor >= ceil {
            return Err(HistogramError::InvalidBounds { floor, ceil });
        }
        Ok(Self {
            floor,
            ceil,
            count: 0,
            mode: BoundaryMode::Interior,
        })
    }

    /// Lower boundary
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Upper boundary
    pub fn ceil(&self) -> f64 {
        self.ceil
    }

    /// Number of observations assigned to this bin
    pub fn count(&self) -> u64 {
        self.count
    }

    /// `ceil - floor`
    pub fn width(&self) -> f64 {
        self.ceil - self.floor
    }

    /// Midpoint, the value this bin contributes to statistics
    pub fn median(&self) -> f64 {
        (self.floor + self.ceil) / 2.0
    }

    /// Boundary-inclusion state
    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Whether this is the closed leftmost bin
    pub fn is_first(&self) -> bool {
        matches!(self.mode, BoundaryMode::First { .. })
    }

    /// Observations recorded exactly on `floor`; always 0 for interior bins
    pub fn left_boundary_count(&self) -> u64 {
        match self.mode {
            BoundaryMode::First { on_left } => on_left,
            BoundaryMode::Interior => 0,
        }
    }

    /// Containment test honoring the boundary mode
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        match self.mode {
            BoundaryMode::First { .. } => self.floor <= value && value <= self.ceil,
            BoundaryMode::Interior => self.floor < value && value <= self.ceil,
        }
    }

    /// Whether `other`'s ceil falls inside this bin
    pub fn contains_ceil_of(&self, other: &Interval) -> bool {
        self.contains(other.ceil)
    }

    /// Record one observation
    pub(crate) fn add_element(&mut self, value: f64) -> Result<(), HistogramError> {
        if !self.contains(value) {
            return Err(HistogramError::ElementOutOfRange {
                value,
                floor: self.floor,
                ceil: self.ceil,
            });
        }
        self.count += 1;
        if value == self.floor {
            // only reachable for the first bin
            if let BoundaryMode::First { on_left } = &mut self.mode {
                *on_left += 1;
            }
        }
        Ok(())
    }

    /// Add `n` observations without a containment check
    pub(crate) fn add_elements(&mut self, n: u64) {
        self.count += n;
    }

    /// Move all observations of `other` into this bin
    ///
    /// Left-boundary observations follow along when both bins are leftmost.
    pub(crate) fn absorb(&mut self, other: &Interval) {
        self.count += other.count;
        if let (BoundaryMode::First { on_left }, BoundaryMode::First { on_left: theirs }) =
            (&mut self.mode, other.mode)
        {
            *on_left += theirs;
        }
    }

    pub(crate) fn promote_to_first(&mut self) {
        if !self.is_first() {
            self.mode = BoundaryMode::First { on_left: 0 };
        }
    }

    /// Make this an interior bin
    ///
    /// Observations sitting exactly on `floor` now belong to the bin on the
    /// left, so they leave this bin's count.
    pub(crate) fn demote_from_first(&mut self) {
        if let BoundaryMode::First { on_left } = self.mode {
            self.count -= on_left;
            self.mode = BoundaryMode::Interior;
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.is_first() { '[' } else { '(' };
        write!(f, "Interval{}{}; {}]: {}", open, self.floor, self.ceil, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds() {
        assert_eq!(
            Interval::new(2.0, 1.0),
            Err(HistogramError::InvalidBounds {
                floor: 2.0,
                ceil: 1.0
            })
        );
        assert!(matches!(
            Interval::new(1.0, 1.0),
            Err(HistogramError::InvalidBounds { .. })
        ));
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_add_out_of_range() {
        let mut interval = Interval::new(1.0, 2.0).unwrap();
        assert_eq!(
            interval.add_element(5.0),
            Err(HistogramError::ElementOutOfRange {
                value: 5.0,
                floor: 1.0,
                ceil: 2.0
            })
        );
        assert_eq!(interval.count(), 0);
    }

    #[test]
    fn test_interior_is_right_inclusive() {
        let interval = Interval::new(1.0, 2.0).unwrap();
        assert!(!interval.contains(1.0));
        assert!(interval.contains(1.5));
        assert!(interval.contains(2.0));
        assert!(!interval.contains(2.5));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_first_is_closed() {
        let mut interval = Interval::new(1.0, 2.0).unwrap();
        interval.promote_to_first();
        assert!(interval.is_first());
        assert!(interval.contains(1.0));
        assert!(interval.contains(2.0));
        assert!(!interval.contains(0.999));
    }

    #[test]
    fn test_left_boundary_tracking() {
        let mut interval = Interval::new(0.0, 1.0).unwrap();
        interval.promote_to_first();
        interval.add_element(0.0).unwrap();
        interval.add_element(0.0).unwrap();
        interval.add_element(0.5).unwrap();
        interval.add_element(1.0).unwrap();

        assert_eq!(interval.count(), 4);
        assert_eq!(interval.left_boundary_count(), 2);

        interval.demote_from_first();
        assert!(!interval.is_first());
        assert_eq!(interval.count(), 2);
        assert_eq!(interval.left_boundary_count(), 0);

        // demoting twice is a no-op
        interval.demote_from_first();
        assert_eq!(interval.count(), 2);
    }

    #[test]
    fn test_add_elements_skips_containment() {
        let mut interval = Interval::new(0.0, 1.0).unwrap();
        interval.add_elements(7);
        assert_eq!(interval.count(), 7);
        assert_eq!(interval.left_boundary_count(), 0);
    }

    #[test]
    fn test_absorb_carries_left_boundary() {
        let mut narrow = Interval::new(0.0, 1.0).unwrap();
        narrow.promote_to_first();
        narrow.add_element(0.0).unwrap();
        narrow.add_element(1.0).unwrap();

        let mut wide = Interval::new(0.0, 2.0).unwrap();
        wide.promote_to_first();
        wide.absorb(&narrow);
        assert_eq!(wide.count(), 2);
        assert_eq!(wide.left_boundary_count(), 1);

        let mut interior = Interval::new(2.0, 4.0).unwrap();
        interior.absorb(&narrow);
        assert_eq!(interior.count(), 2);
        assert_eq!(interior.left_boundary_count(), 0);
    }

    #[test]
    fn test_median_and_width() {
        let interval = Interval::new(2.0, 6.0).unwrap();
        assert_eq!(interval.median(), 4.0);
        assert_eq!(interval.width(), 4.0);
    }

    #[test]
    fn test_contains_ceil_of() {
        let wide = Interval::new(0.0, 2.0).unwrap();
        let left = Interval::new(0.0, 1.0).unwrap();
        let right = Interval::new(1.0, 2.0).unwrap();
        let outside = Interval::new(2.0, 3.0).unwrap();
        assert!(wide.contains_ceil_of(&left));
        assert!(wide.contains_ceil_of(&right));
        assert!(!wide.contains_ceil_of(&outside));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        let mut interval = Interval::new(0.0, 1.5).unwrap();
        interval.add_element(1.0).unwrap();
        assert_eq!(interval.to_string(), "Interval(0; 1.5]: 1");
        interval.promote_to_first();
        assert_eq!(interval.to_string(), "Interval[0; 1.5]: 1");
    }
}
