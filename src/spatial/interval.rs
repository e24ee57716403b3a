//! Axis-aligned inclusive coordinate boxes and their row-major enumeration

use crate::io::error::{GridError, Result, invalid_parameter};

/// Axis-aligned box with inclusive `min`/`max` per axis
///
/// Always non-empty: construction and [`Interval::shrink`] reject any axis
/// where `min > max`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    min: Vec<i64>,
    max: Vec<i64>,
}

impl Interval {
    /// Create an interval from inclusive corners
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the corners differ in length,
    /// `InvalidParameter` if they are zero-dimensional, and `InvalidInterval`
    /// if any axis is empty
    pub fn new(min: Vec<i64>, max: Vec<i64>) -> Result<Self> {
        if min.len() != max.len() {
            return Err(GridError::DimensionMismatch {
                expected: min.len(),
                actual: max.len(),
            });
        }
        if min.is_empty() {
            return Err(invalid_parameter(
                "dimensions",
                &0,
                &"an interval needs at least one axis",
            ));
        }
        for (axis, (lo, hi)) in min.iter().zip(&max).enumerate() {
            if lo > hi {
                return Err(GridError::InvalidInterval {
                    axis,
                    extent: 0,
                    required: 1,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Zero-based interval covering an array shape
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is empty or has a zero-length axis
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        let min = vec![0; shape.len()];
        let max = shape.iter().map(|&len| len as i64 - 1).collect();
        Self::new(min, max)
    }

    /// Number of axes
    pub fn dimensions(&self) -> usize {
        self.min.len()
    }

    /// Inclusive lower corner
    pub fn min(&self) -> &[i64] {
        &self.min
    }

    /// Inclusive upper corner
    pub fn max(&self) -> &[i64] {
        &self.max
    }

    /// Number of positions along each axis
    pub fn extent(&self) -> Vec<u64> {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(lo, hi)| axis_extent(*lo, *hi))
            .collect()
    }

    /// Total number of positions in the interval
    pub fn size(&self) -> u64 {
        self.extent().iter().product()
    }

    /// Test whether a coordinate lies inside the interval
    pub fn contains(&self, coordinate: &[i64]) -> bool {
        coordinate.len() == self.dimensions()
            && coordinate
                .iter()
                .zip(self.min.iter().zip(&self.max))
                .all(|(c, (lo, hi))| c >= lo && c <= hi)
    }

    /// Contract every axis by `amount` on both sides
    ///
    /// Used with `amount = radius` to derive the search interval, inside
    /// which every neighborhood read stays in bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` for the first axis whose extent is smaller
    /// than `2 * amount + 1`
    pub fn shrink(&self, amount: usize) -> Result<Self> {
        let required = (amount as u64).saturating_mul(2).saturating_add(1);
        let mut min = Vec::with_capacity(self.dimensions());
        let mut max = Vec::with_capacity(self.dimensions());

        for (axis, (lo, hi)) in self.min.iter().zip(&self.max).enumerate() {
            let extent = axis_extent(*lo, *hi);
            let too_small = || GridError::InvalidInterval {
                axis,
                extent,
                required,
            };
            if extent < required {
                return Err(too_small());
            }
            let step = i64::try_from(amount).ok().ok_or_else(too_small)?;
            match (lo.checked_add(step), hi.checked_sub(step)) {
                (Some(new_lo), Some(new_hi)) if new_lo <= new_hi => {
                    min.push(new_lo);
                    max.push(new_hi);
                }
                _ => return Err(too_small()),
            }
        }

        Ok(Self { min, max })
    }

    /// Grow every axis by `amount` on both sides, saturating at the `i64` range
    #[must_use]
    pub fn expand(&self, amount: usize) -> Self {
        let step = i64::try_from(amount).unwrap_or(i64::MAX);
        Self {
            min: self.min.iter().map(|lo| lo.saturating_sub(step)).collect(),
            max: self.max.iter().map(|hi| hi.saturating_add(step)).collect(),
        }
    }

    /// Intersection with another interval, if non-empty
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the intervals differ in dimensionality
    pub fn intersect(&self, other: &Self) -> Result<Option<Self>> {
        if other.dimensions() != self.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let min: Vec<i64> = self
            .min
            .iter()
            .zip(&other.min)
            .map(|(a, b)| *a.max(b))
            .collect();
        let max: Vec<i64> = self
            .max
            .iter()
            .zip(&other.max)
            .map(|(a, b)| *a.min(b))
            .collect();

        let empty = min.iter().zip(&max).any(|(lo, hi)| lo > hi);
        Ok((!empty).then_some(Self { min, max }))
    }

    /// Enumerate every coordinate in row-major order
    ///
    /// The last axis varies fastest. This order is the traversal contract of
    /// every scan in the crate: overlapping writes resolve to the last window
    /// visited in this sequence.
    pub fn positions(&self) -> Positions {
        Positions {
            min: self.min.clone(),
            max: self.max.clone(),
            next: Some(self.min.clone()),
        }
    }
}

/// Lazy row-major iterator over the coordinates of an [`Interval`]
#[derive(Debug, Clone)]
pub struct Positions {
    min: Vec<i64>,
    max: Vec<i64>,
    next: Option<Vec<i64>>,
}

impl Iterator for Positions {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        // Odometer increment: bump the last axis, carry into earlier ones
        let mut following = current.clone();
        let mut carried_out = true;
        for ((value, lo), hi) in following
            .iter_mut()
            .zip(&self.min)
            .zip(&self.max)
            .rev()
        {
            if *value < *hi {
                *value += 1;
                carried_out = false;
                break;
            }
            *value = *lo;
        }
        if !carried_out {
            self.next = Some(following);
        }

        Some(current)
    }
}

// Saturates for an interval spanning the whole i64 range
const fn axis_extent(lo: i64, hi: i64) -> u64 {
    hi.abs_diff(lo).saturating_add(1)
}

/// Translate a coordinate by an offset
pub fn translate(coordinate: &[i64], offset: &[i64]) -> Vec<i64> {
    coordinate.iter().zip(offset).map(|(c, o)| c + o).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/interval.rs"]
mod unit_tests;
