//! Whole-grid statistics: average intensity and extreme value locations

use crate::io::error::{Result, computation_error};
use crate::math::scalar::Scalar;
use crate::math::summation::RealSum;
use crate::spatial::grid::Grid;

/// Global extremes with the coordinate of their first occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct Extrema<T> {
    /// Smallest value
    pub min: T,
    /// Row-major first coordinate holding `min`
    pub min_location: Vec<i64>,
    /// Largest value
    pub max: T,
    /// Row-major first coordinate holding `max`
    pub max_location: Vec<i64>,
}

/// Average over every element using compensated summation
///
/// # Errors
///
/// Returns a computation error if the grid holds no elements
pub fn average<T: Scalar>(grid: &Grid<T>) -> Result<f64> {
    let total: RealSum = grid.values().map(|v| v.to_real()).collect();
    total
        .mean()
        .ok_or_else(|| computation_error("average", &"grid has no elements"))
}

/// Locate the global minimum and maximum
///
/// Ties keep the earliest coordinate in row-major order.
///
/// # Errors
///
/// Returns a computation error if the grid holds no elements
pub fn min_max_location<T: Scalar>(grid: &Grid<T>) -> Result<Extrema<T>> {
    let mut cells = grid.indexed_iter();
    let (first_location, &first) = cells
        .next()
        .ok_or_else(|| computation_error("min_max_location", &"grid has no elements"))?;

    let mut extrema = Extrema {
        min: first,
        min_location: first_location.clone(),
        max: first,
        max_location: first_location,
    };

    for (location, &value) in cells {
        if value < extrema.min {
            extrema.min = value;
            extrema.min_location = location;
        } else if value > extrema.max {
            extrema.max = value;
            extrema.max_location = location;
        }
    }

    Ok(extrema)
}

/// Locate the global maximum
///
/// # Errors
///
/// Returns a computation error if the grid holds no elements
pub fn find_max<T: Scalar>(grid: &Grid<T>) -> Result<(Vec<i64>, T)> {
    let extrema = min_max_location(grid)?;
    Ok((extrema.max_location, extrema.max))
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/statistics.rs"]
mod unit_tests;
