//! Dense N-dimensional grid with absolute, possibly non-zero-based coordinates
//!
//! Storage is an `ndarray::ArrayD` in standard (row-major) layout. Callers
//! address elements with signed coordinates; the grid maps them onto array
//! indices through its origin.

use ndarray::{ArrayD, Dimension, IxDyn, Slice};

use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::interval::Interval;

/// Dense N-dimensional array with per-axis inclusive bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: ArrayD<T>,
    bounds: Interval,
}

impl<T: Clone> Grid<T> {
    /// Create a zero-based grid of the given shape filled with one value
    ///
    /// # Errors
    ///
    /// Returns an error if the shape has no axes or a zero-length axis
    pub fn new(shape: &[usize], fill: T) -> Result<Self> {
        Self::from_array(ArrayD::from_elem(IxDyn(shape), fill))
    }

    /// Wrap an existing array as a zero-based grid
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no axes or a zero-length axis
    pub fn from_array(data: ArrayD<T>) -> Result<Self> {
        let bounds = Interval::from_shape(data.shape())?;
        // Normalize to standard layout so logical and memory order agree
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data, bounds })
    }

    /// Build a zero-based grid from row-major values
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value count does not match the shape
    pub fn from_shape_vec(shape: &[usize], values: Vec<T>) -> Result<Self> {
        let count = values.len();
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|error| {
            invalid_parameter("values", &count, &format!("shape {shape:?}: {error}"))
        })?;
        Self::from_array(data)
    }

    /// Move the grid so its first element sits at `origin`
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `origin` has the wrong length
    pub fn with_origin(self, origin: Vec<i64>) -> Result<Self> {
        if origin.len() != self.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: self.dimensions(),
                actual: origin.len(),
            });
        }
        let max = origin
            .iter()
            .zip(self.data.shape())
            .map(|(lo, &len)| lo + len as i64 - 1)
            .collect();
        let bounds = Interval::new(origin, max)?;
        Ok(Self {
            data: self.data,
            bounds,
        })
    }

    /// Same-shaped grid with identical bounds, filled with `value`
    pub fn filled_like<U: Clone>(&self, value: U) -> Grid<U> {
        Grid {
            data: ArrayD::from_elem(self.data.raw_dim(), value),
            bounds: self.bounds.clone(),
        }
    }

    /// Apply a function to every element, keeping shape and bounds
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.map(f),
            bounds: self.bounds.clone(),
        }
    }

    /// Number of axes
    pub fn dimensions(&self) -> usize {
        self.data.ndim()
    }

    /// Number of elements along each axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Per-axis inclusive bounds
    pub const fn bounds(&self) -> &Interval {
        &self.bounds
    }

    /// Coordinate of the first element
    pub fn origin(&self) -> &[i64] {
        self.bounds.min()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a grid holds at least one element
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at a coordinate, or `None` outside the bounds
    pub fn get(&self, coordinate: &[i64]) -> Option<T> {
        let index = self.index_of(coordinate)?;
        self.data.get(index.as_slice()).cloned()
    }

    /// Mutable access to the value at a coordinate
    pub fn get_mut(&mut self, coordinate: &[i64]) -> Option<&mut T> {
        let index = self.index_of(coordinate)?;
        self.data.get_mut(index.as_slice())
    }

    /// Overwrite the value at a coordinate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the grid
    pub fn set(&mut self, coordinate: &[i64], value: T) -> Result<()> {
        let slot = self
            .get_mut(coordinate)
            .ok_or_else(|| GridError::OutOfBounds {
                coordinate: coordinate.to_vec(),
            })?;
        *slot = value;
        Ok(())
    }

    /// Copy of a sub-interval, keeping absolute coordinates
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for an interval of the wrong dimensionality
    /// and `InvalidInterval` if it does not overlap the grid
    pub fn crop(&self, interval: &Interval) -> Result<Self> {
        let overlap = self
            .bounds
            .intersect(interval)?
            .ok_or(GridError::InvalidInterval {
                axis: 0,
                extent: 0,
                required: 1,
            })?;

        let ranges: Vec<(usize, usize)> = overlap
            .min()
            .iter()
            .zip(overlap.max())
            .zip(self.origin())
            .map(|((lo, hi), origin)| ((lo - origin) as usize, (hi - origin + 1) as usize))
            .collect();

        let data = self
            .data
            .slice_each_axis(|axis| {
                let (start, end) = ranges
                    .get(axis.axis.index())
                    .copied()
                    .unwrap_or((0, axis.len));
                Slice::from(start..end)
            })
            .to_owned();

        Ok(Self {
            data,
            bounds: overlap,
        })
    }

    /// Iterate `(coordinate, value)` pairs in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Vec<i64>, &T)> + '_ {
        let origin = self.origin();
        self.data.indexed_iter().map(move |(index, value)| {
            let coordinate = index
                .slice()
                .iter()
                .zip(origin)
                .map(|(&i, o)| i as i64 + o)
                .collect();
            (coordinate, value)
        })
    }

    /// Iterate values in row-major order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    /// Borrow the backing array
    pub const fn as_array(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Release the backing array
    pub fn into_array(self) -> ArrayD<T> {
        self.data
    }

    fn index_of(&self, coordinate: &[i64]) -> Option<Vec<usize>> {
        if coordinate.len() != self.dimensions() {
            return None;
        }
        coordinate
            .iter()
            .zip(self.origin())
            .zip(self.data.shape())
            .map(|((c, o), &len)| {
                let index = usize::try_from(c - o).ok()?;
                (index < len).then_some(index)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/grid.rs"]
mod unit_tests;
