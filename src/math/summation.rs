//! Compensated floating point accumulation

/// Running sum with Neumaier compensation
///
/// Keeps the rounding error of every addition in a separate term so that
/// long windows of similar values do not drift. Accumulation order is the
/// order of `add` calls, which callers keep deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSum {
    sum: f64,
    compensation: f64,
    count: usize,
}

impl RealSum {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
            count: 0,
        }
    }

    /// Add one value
    pub fn add(&mut self, value: f64) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - total) + value;
        } else {
            self.compensation += (value - total) + self.sum;
        }
        self.sum = total;
        self.count += 1;
    }

    /// Compensated total of all added values
    pub fn sum(&self) -> f64 {
        self.sum + self.compensation
    }

    /// Number of values added
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean, or `None` when nothing was added
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum() / self.count as f64)
    }
}

impl Extend<f64> for RealSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for RealSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut total = Self::new();
        total.extend(iter);
        total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/math/summation.rs"]
mod unit_tests;
