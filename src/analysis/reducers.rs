//! Local statistics over one neighborhood's values
//!
//! Reducers consume values in the neighborhood's row-major offset order, so
//! results are reproducible run to run.

use crate::io::error::{GridError, Result};
use crate::math::scalar::Scalar;
use crate::math::summation::RealSum;
use crate::spatial::neighborhood::RectangleShape;

/// Smallest and largest value seen in a window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax<T> {
    /// Minimum under the scalar's natural ordering
    pub min: T,
    /// Maximum under the scalar's natural ordering
    pub max: T,
}

/// Mean of the values with compensated summation
///
/// # Errors
///
/// Returns `EmptyWindow` if `values` is empty; `shape` only labels the error
pub fn mean<T, I>(values: I, shape: &RectangleShape) -> Result<f64>
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let total: RealSum = values.into_iter().map(Scalar::to_real).collect();
    total.mean().ok_or_else(|| empty_window(shape))
}

/// Minimum and maximum in a single pass
///
/// Values incomparable with the running extremes (NaN) are skipped unless
/// they come first.
///
/// # Errors
///
/// Returns `EmptyWindow` if `values` is empty; `shape` only labels the error
pub fn min_max<T, I>(values: I, shape: &RectangleShape) -> Result<MinMax<T>>
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter();
    let first = values.next().ok_or_else(|| empty_window(shape))?;

    let mut extremes = MinMax {
        min: first,
        max: first,
    };
    for value in values {
        if value < extremes.min {
            extremes.min = value;
        }
        if value > extremes.max {
            extremes.max = value;
        }
    }
    Ok(extremes)
}

/// Biased midpoint of a window's range: `(min + max) / 2 - bias`
///
/// The halved sum is real-valued for every scalar type. Integer grids are
/// not truncated, so an odd `min + max` keeps its `.5`: with min 12, max 247
/// and bias 20 the midpoint is 109.5, not 109, and under the 0.11 scale a raw
/// 12 lands at or below the cutoff (12.045) rather than above it (11.99).
pub fn midpoint_threshold<T: Scalar>(extremes: &MinMax<T>, bias: f64) -> f64 {
    (extremes.min.to_real() + extremes.max.to_real()) / 2.0 - bias
}

const fn empty_window(shape: &RectangleShape) -> GridError {
    GridError::EmptyWindow {
        radius: shape.radius(),
        skip_center: shape.skip_center(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/reducers.rs"]
mod unit_tests;
