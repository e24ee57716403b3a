//! Discrete hyperspheres used to stamp markers into output grids

use crate::spatial::grid::Grid;
use crate::spatial::interval::{Interval, translate};

/// Set of integer offsets within Euclidean distance `radius` of the origin
///
/// Radius 1 gives the 4-neighborhood cross plus center in 2D and the
/// 7-point star in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HyperSphere {
    radius: usize,
}

impl HyperSphere {
    /// Create a sphere of the given radius
    pub const fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Sphere radius
    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Offsets inside the sphere, row-major
    pub fn offsets(&self, dimensions: usize) -> Vec<Vec<i64>> {
        self.offsets_within(dimensions, self.radius)
    }

    /// Sphere offsets whose every component is at most `reach` in magnitude
    ///
    /// Stamping into a grid only needs `reach` equal to its largest extent
    /// minus one; farther points can never land, so large radii stay cheap.
    pub fn offsets_within(&self, dimensions: usize, reach: usize) -> Vec<Vec<i64>> {
        let Ok(r) = i64::try_from(self.radius.min(reach)) else {
            return Vec::new();
        };
        let Ok(block) = Interval::new(vec![-r; dimensions], vec![r; dimensions]) else {
            return Vec::new();
        };
        let limit = (self.radius as u128).saturating_mul(self.radius as u128);
        block
            .positions()
            .filter(|offset| {
                offset
                    .iter()
                    .map(|&o| u128::from(o.unsigned_abs()).pow(2))
                    .fold(0u128, u128::saturating_add)
                    <= limit
            })
            .collect()
    }

    /// Write `value` at every sphere point around `center` that lies in the grid
    ///
    /// Points outside the grid are clipped. Returns the number of writes.
    pub fn stamp<U: Clone>(&self, grid: &mut Grid<U>, center: &[i64], value: &U) -> usize {
        let reach = grid.shape().iter().max().map_or(0, |len| len - 1);
        let offsets = self.offsets_within(grid.dimensions(), reach);
        self.stamp_offsets(&offsets, grid, center, value)
    }

    /// Like [`HyperSphere::stamp`] with offsets precomputed by [`HyperSphere::offsets`]
    pub fn stamp_offsets<U: Clone>(
        &self,
        offsets: &[Vec<i64>],
        grid: &mut Grid<U>,
        center: &[i64],
        value: &U,
    ) -> usize {
        let mut written = 0;
        for offset in offsets {
            if let Some(slot) = grid.get_mut(&translate(center, offset)) {
                *slot = value.clone();
                written += 1;
            }
        }
        written
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/sphere.rs"]
mod unit_tests;
