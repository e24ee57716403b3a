//! Strict local extremum detection with hypersphere marking
//!
//! Each center of the search interval is compared against its radius-`r`
//! neighbors (center excluded). A center that is strictly below (or above,
//! for [`Extremum::Maximum`]) every neighbor is recorded and a hypersphere of
//! marker values is stamped around it into a separate output grid.

use std::cmp::Ordering;
use std::rc::Rc;

use tracing::debug;

use crate::algorithm::scan::{ScanState, ScanSummary, run_scan};
use crate::io::configuration::{DEFAULT_MARKER_RADIUS, DEFAULT_RADIUS};
use crate::io::error::{GridError, Result};
use crate::math::scalar::Scalar;
use crate::spatial::grid::Grid;
use crate::spatial::neighborhood::{Neighborhood, RectangleShape};
use crate::spatial::sphere::HyperSphere;

/// Which kind of extremum to detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extremum {
    /// Center strictly less than every neighbor
    #[default]
    Minimum,
    /// Center strictly greater than every neighbor
    Maximum,
}

impl Extremum {
    const fn required(self) -> Ordering {
        match self {
            Self::Minimum => Ordering::Less,
            Self::Maximum => Ordering::Greater,
        }
    }
}

/// Parameters of an extremum marking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerConfig {
    /// Radius of the comparison neighborhood
    pub radius: usize,
    /// Radius of the hypersphere stamped around each detection
    pub marker_radius: usize,
    /// Minimum or maximum detection
    pub extremum: Extremum,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            marker_radius: DEFAULT_MARKER_RADIUS,
            extremum: Extremum::default(),
        }
    }
}

/// Result of [`ExtremumMarker::find_and_mark`]
#[derive(Debug, Clone, PartialEq)]
pub struct Marked<U> {
    /// Zero grid with a sphere of ones around every detection
    pub output: Grid<U>,
    /// Detected centers in row-major order
    pub detections: Vec<Vec<i64>>,
    /// Scan counters
    pub summary: ScanSummary,
}

/// Local extremum detector
#[derive(Debug, Clone)]
pub struct ExtremumMarker {
    config: MarkerConfig,
    shape: RectangleShape,
    sphere: HyperSphere,
    state: ScanState,
}

impl Default for ExtremumMarker {
    fn default() -> Self {
        Self::new(MarkerConfig::default())
    }
}

impl ExtremumMarker {
    /// Create a marker
    pub const fn new(config: MarkerConfig) -> Self {
        Self {
            shape: RectangleShape::new(config.radius, true),
            sphere: HyperSphere::new(config.marker_radius),
            config,
            state: ScanState::Init,
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &MarkerConfig {
        &self.config
    }

    /// Lifecycle state after the most recent call
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Detect extrema of `source` and mark them in a fresh grid
    ///
    /// The output has the source's shape and origin, starts at `U::zero()`
    /// and receives `U::one()` at every sphere point of every detection.
    /// The source is never modified.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if the grid is smaller than `2r+1` along any
    /// axis and `EmptyWindow` for radius 0
    pub fn find_and_mark<T: Scalar, U: Scalar>(&mut self, source: &Grid<T>) -> Result<Marked<U>> {
        let mut state = self.state;
        let result = run_scan(&mut state, || self.scan(source));
        self.state = state;

        if let Ok(marked) = &result {
            debug!(
                extremum = ?self.config.extremum,
                centers = marked.summary.centers_visited,
                detections = marked.summary.detections,
                "extremum marking finished"
            );
        }
        result
    }

    /// Whether the center beats every value of its neighborhood
    ///
    /// Stops at the first neighbor that ties, wins, or cannot be compared.
    pub fn is_extremum<T: Scalar>(&self, neighborhood: &Neighborhood<'_, T>) -> bool {
        let Some(center) = neighborhood.center_value() else {
            return false;
        };
        let required = self.config.extremum.required();
        neighborhood
            .values()
            .all(|neighbor| center.partial_cmp(&neighbor) == Some(required))
    }

    fn scan<T: Scalar, U: Scalar>(&self, source: &Grid<T>) -> Result<Marked<U>> {
        let dimensions = source.dimensions();
        let search = self.shape.search_interval(source)?;
        if self.shape.window_size(dimensions) == 0 {
            return Err(GridError::EmptyWindow {
                radius: self.shape.radius(),
                skip_center: self.shape.skip_center(),
            });
        }

        let offsets = self.shape.shared_offsets(dimensions);
        let reach = source.shape().iter().max().map_or(0, |len| len - 1);
        let stamp = self.sphere.offsets_within(dimensions, reach);
        let mark = U::one();

        let mut output = source.filled_like(U::zero());
        let mut detections = Vec::new();
        let mut summary = ScanSummary::default();

        for center in search.positions() {
            summary.centers_visited += 1;
            let neighborhood = Neighborhood::with_offsets(source, center, Rc::clone(&offsets));
            if !self.is_extremum(&neighborhood) {
                continue;
            }
            summary.pixels_written +=
                self.sphere
                    .stamp_offsets(&stamp, &mut output, neighborhood.center(), &mark);
            summary.detections += 1;
            detections.push(neighborhood.center().to_vec());
        }

        Ok(Marked {
            output,
            detections,
            summary,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/marker.rs"]
mod unit_tests;
