//! Rectangular neighborhoods and the sliding-window traversal over a grid
//!
//! A [`RectangleShape`] describes the window; [`RectangleShape::neighborhoods`]
//! walks every center of the search interval (the grid bounds shrunk by the
//! radius) in row-major order and hands out one fresh [`Neighborhood`] per
//! center. Because centers never leave the search interval, every offset of a
//! neighborhood lands inside the grid.

use std::rc::Rc;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::interval::{Interval, Positions, translate};

/// Hyper-rectangular window of radius `r` around a center
///
/// Covers every offset in `[-r, r]^n`, optionally without the center itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectangleShape {
    radius: usize,
    skip_center: bool,
}

impl RectangleShape {
    /// Create a shape
    pub const fn new(radius: usize, skip_center: bool) -> Self {
        Self {
            radius,
            skip_center,
        }
    }

    /// Window radius
    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Whether the zero offset is excluded
    pub const fn skip_center(&self) -> bool {
        self.skip_center
    }

    /// Number of offsets in an `n`-dimensional window
    ///
    /// `(2r+1)^n`, minus one when the center is skipped. Saturates at
    /// `usize::MAX` for windows too large to address.
    pub fn window_size(&self, dimensions: usize) -> usize {
        let side = self.radius.saturating_mul(2).saturating_add(1);
        let full = (0..dimensions).fold(1usize, |acc, _| acc.saturating_mul(side));
        if self.skip_center {
            full.saturating_sub(1)
        } else {
            full
        }
    }

    /// Offsets of an `n`-dimensional window in row-major order
    ///
    /// Empty if the radius does not fit a signed coordinate; such a window
    /// never fits a grid, so [`RectangleShape::search_interval`] rejects it first.
    pub fn offsets(&self, dimensions: usize) -> Vec<Vec<i64>> {
        let Ok(r) = i64::try_from(self.radius) else {
            return Vec::new();
        };
        let Ok(block) = Interval::new(vec![-r; dimensions], vec![r; dimensions]) else {
            return Vec::new();
        };
        block
            .positions()
            .filter(|offset| !(self.skip_center && offset.iter().all(|&o| o == 0)))
            .collect()
    }

    /// Centers whose whole window lies inside the grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if the grid is smaller than `2r+1` along any axis
    pub fn search_interval<T: Clone>(&self, grid: &Grid<T>) -> Result<Interval> {
        grid.bounds().shrink(self.radius)
    }

    /// Iterate the neighborhoods of every center in the search interval
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if the grid is smaller than `2r+1` along any axis
    pub fn neighborhoods<'a, T: Clone>(&self, grid: &'a Grid<T>) -> Result<Neighborhoods<'a, T>> {
        let search = self.search_interval(grid)?;
        Ok(Neighborhoods {
            grid,
            offsets: self.shared_offsets(grid.dimensions()),
            centers: search.positions(),
        })
    }

    /// Offset table shared by every neighborhood of one traversal
    pub fn shared_offsets(&self, dimensions: usize) -> Rc<[Vec<i64>]> {
        Rc::from(self.offsets(dimensions))
    }

    /// Neighborhood around a single center
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if the grid is too small for the radius and
    /// `OutOfBounds` if the window around `center` would leave the grid
    pub fn neighborhood_at<'a, T: Clone>(
        &self,
        grid: &'a Grid<T>,
        center: &[i64],
    ) -> Result<Neighborhood<'a, T>> {
        let search = self.search_interval(grid)?;
        if !search.contains(center) {
            return Err(GridError::OutOfBounds {
                coordinate: center.to_vec(),
            });
        }
        Ok(Neighborhood::with_offsets(
            grid,
            center.to_vec(),
            self.shared_offsets(grid.dimensions()),
        ))
    }
}

/// Row-major sequence of neighborhoods over a grid's search interval
#[derive(Debug, Clone)]
pub struct Neighborhoods<'a, T> {
    grid: &'a Grid<T>,
    offsets: Rc<[Vec<i64>]>,
    centers: Positions,
}

impl<'a, T: Clone> Iterator for Neighborhoods<'a, T> {
    type Item = Neighborhood<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let center = self.centers.next()?;
        Some(Neighborhood {
            grid: self.grid,
            center,
            offsets: Rc::clone(&self.offsets),
        })
    }
}

/// Window around one center
///
/// Iteration is lazy and can be restarted any number of times; each pass
/// yields exactly [`Neighborhood::len`] pairs.
#[derive(Debug, Clone)]
pub struct Neighborhood<'a, T> {
    grid: &'a Grid<T>,
    center: Vec<i64>,
    offsets: Rc<[Vec<i64>]>,
}

impl<'a, T: Clone> Neighborhood<'a, T> {
    /// Assemble a neighborhood from a precomputed offset table
    ///
    /// The caller guarantees that `center` lies in the search interval of the
    /// shape that produced `offsets`; otherwise iteration stops early at the
    /// first offset that leaves the grid.
    pub const fn with_offsets(grid: &'a Grid<T>, center: Vec<i64>, offsets: Rc<[Vec<i64>]>) -> Self {
        Self {
            grid,
            center,
            offsets,
        }
    }

    /// Coordinate of the center
    pub fn center(&self) -> &[i64] {
        &self.center
    }

    /// Value at the center, whether or not the window includes it
    pub fn center_value(&self) -> Option<T> {
        self.grid.get(&self.center)
    }

    /// Window size
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True only for radius 0 with the center skipped
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate `(offset, value)` pairs in row-major offset order
    pub fn iter(&self) -> NeighborhoodIter<'_, T> {
        NeighborhoodIter {
            grid: self.grid,
            center: &self.center,
            offsets: self.offsets.iter(),
        }
    }

    /// Iterate values only
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Absolute coordinates covered by the window
    pub fn positions(&self) -> impl Iterator<Item = Vec<i64>> + '_ {
        self.offsets
            .iter()
            .map(|offset| translate(&self.center, offset))
    }
}

/// Lazy `(offset, value)` iterator of a [`Neighborhood`]
#[derive(Debug, Clone)]
pub struct NeighborhoodIter<'n, T> {
    grid: &'n Grid<T>,
    center: &'n [i64],
    offsets: std::slice::Iter<'n, Vec<i64>>,
}

impl<'n, T: Clone> Iterator for NeighborhoodIter<'n, T> {
    type Item = (&'n [i64], T);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offsets.next()?;
        // In bounds by construction of the search interval
        let value = self.grid.get(&translate(self.center, offset))?;
        Some((offset.as_slice(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/neighborhood.rs"]
mod unit_tests;
