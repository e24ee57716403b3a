//! Fixed global threshold

use tracing::debug;

use crate::io::error::{Result, invalid_parameter};
use crate::math::scalar::Scalar;
use crate::spatial::grid::Grid;

/// Binarize against one cutoff for the whole grid
///
/// Elements strictly above `threshold` become `bright`, all others `dark`.
/// The source is left untouched.
///
/// # Errors
///
/// Returns `InvalidParameter` if `threshold` is NaN
pub fn global_threshold<T: Scalar>(
    source: &Grid<T>,
    threshold: f64,
    bright: T,
    dark: T,
) -> Result<Grid<T>> {
    if threshold.is_nan() {
        return Err(invalid_parameter("threshold", &threshold, &"must be a number"));
    }

    let output = source.map(|value| {
        if value.to_real() > threshold {
            bright
        } else {
            dark
        }
    });
    debug!(threshold, elements = output.len(), "global threshold applied");
    Ok(output)
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/threshold.rs"]
mod unit_tests;
