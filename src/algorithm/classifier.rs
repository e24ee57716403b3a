//! Local adaptive binarization
//!
//! Every center of the search interval gets a threshold from its own
//! neighborhood statistic. Depending on [`WriteMode`] the threshold is applied
//! to the whole window (the default, where later windows overwrite
//! earlier ones) or only to the center.
//!
//! Two update semantics are offered. [`AdaptiveClassifier::classify`] reads
//! the untouched source and writes a fresh grid, so overlapping windows only
//! conflict on writes. [`AdaptiveClassifier::classify_in_place`] reads and
//! writes one buffer, so statistics of later windows see values already
//! binarized by earlier ones. Both visit centers in row-major order.

use std::cmp::Ordering;
use std::rc::Rc;

use tracing::debug;

use crate::algorithm::scan::{ScanState, ScanSummary, run_scan};
use crate::analysis::reducers::{mean, midpoint_threshold, min_max};
use crate::io::configuration::{
    DEFAULT_BIAS, DEFAULT_BRIGHT, DEFAULT_DARK, DEFAULT_RADIUS, DEFAULT_SCALE,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::math::scalar::Scalar;
use crate::spatial::grid::Grid;
use crate::spatial::interval::translate;
use crate::spatial::neighborhood::{Neighborhood, RectangleShape};

/// Statistic that turns a neighborhood into a threshold
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThresholdPolicy {
    /// Bright iff the value is strictly greater than the window mean
    #[default]
    Mean,
    /// Dark iff the value is at most `((min + max) / 2 - bias) * scale`
    MinMax {
        /// Offset subtracted from the midpoint
        bias: f64,
        /// Factor applied to the biased midpoint
        scale: f64,
    },
}

impl ThresholdPolicy {
    /// Min/max policy with bias 20 and scale 0.11
    pub const fn min_max() -> Self {
        Self::MinMax {
            bias: DEFAULT_BIAS,
            scale: DEFAULT_SCALE,
        }
    }
}

/// Which elements a center's threshold is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Rewrite the full `(2r+1)^n` window; the last window covering an element wins
    #[default]
    Window,
    /// Write the center only; elements outside the search interval stay dark
    Center,
}

/// Parameters of an adaptive classification run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig<T> {
    /// Neighborhood radius
    pub radius: usize,
    /// Exclude the center from the statistic (writes still cover it)
    pub skip_center: bool,
    /// Threshold statistic
    pub policy: ThresholdPolicy,
    /// Window or center writes
    pub write_mode: WriteMode,
    /// Value for elements above the threshold
    pub bright: T,
    /// Value for elements at or below the threshold
    pub dark: T,
}

impl<T: Scalar> ClassifierConfig<T> {
    /// Default configuration for a policy, with 255/0 output values
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if 255 or 0 is not representable in `T`
    pub fn with_policy(policy: ThresholdPolicy) -> Result<Self> {
        Ok(Self {
            radius: DEFAULT_RADIUS,
            skip_center: false,
            policy,
            write_mode: WriteMode::default(),
            bright: T::from_real("bright", f64::from(DEFAULT_BRIGHT))?,
            dark: T::from_real("dark", f64::from(DEFAULT_DARK))?,
        })
    }
}

/// Sliding-window binarizer
#[derive(Debug, Clone)]
pub struct AdaptiveClassifier<T> {
    config: ClassifierConfig<T>,
    shape: RectangleShape,
    state: ScanState,
}

impl<T: Scalar> AdaptiveClassifier<T> {
    /// Create a classifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the min/max bias or scale is not finite
    pub fn new(config: ClassifierConfig<T>) -> Result<Self> {
        if let ThresholdPolicy::MinMax { bias, scale } = config.policy {
            if !bias.is_finite() {
                return Err(invalid_parameter("bias", &bias, &"must be finite"));
            }
            if !scale.is_finite() {
                return Err(invalid_parameter("scale", &scale, &"must be finite"));
            }
        }

        Ok(Self {
            shape: RectangleShape::new(config.radius, config.skip_center),
            config,
            state: ScanState::Init,
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &ClassifierConfig<T> {
        &self.config
    }

    /// Lifecycle state after the most recent call
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Binarize into a new grid, reading only the untouched source
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if the grid is smaller than `2r+1` along any
    /// axis and `EmptyWindow` for radius 0 with the center skipped
    pub fn classify(&mut self, source: &Grid<T>) -> Result<Grid<T>> {
        let mut output = source.filled_like(self.config.dark);
        let summary = self.run(Some(source), &mut output)?;
        debug!(
            centers = summary.centers_visited,
            writes = summary.pixels_written,
            "adaptive classification finished"
        );
        Ok(output)
    }

    /// Binarize a grid in place
    ///
    /// Statistics and comparisons read the grid as it is being rewritten, so
    /// the result depends on the row-major visiting order.
    ///
    /// # Errors
    ///
    /// Same as [`AdaptiveClassifier::classify`]; on error the grid is untouched
    pub fn classify_in_place(&mut self, grid: &mut Grid<T>) -> Result<ScanSummary> {
        let summary = self.run(None, grid)?;
        debug!(
            centers = summary.centers_visited,
            writes = summary.pixels_written,
            "in-place adaptive classification finished"
        );
        Ok(summary)
    }

    fn run(&mut self, source: Option<&Grid<T>>, target: &mut Grid<T>) -> Result<ScanSummary> {
        let mut state = self.state;
        let result = run_scan(&mut state, || self.scan(source, target));
        self.state = state;
        result
    }

    fn scan(&self, source: Option<&Grid<T>>, target: &mut Grid<T>) -> Result<ScanSummary> {
        let dimensions = target.dimensions();
        let search = self.shape.search_interval(source.unwrap_or(&*target))?;
        if self.shape.window_size(dimensions) == 0 {
            return Err(GridError::EmptyWindow {
                radius: self.shape.radius(),
                skip_center: self.shape.skip_center(),
            });
        }

        let offsets = self.shape.shared_offsets(dimensions);
        let write_offsets = match self.config.write_mode {
            WriteMode::Window => RectangleShape::new(self.shape.radius(), false).offsets(dimensions),
            WriteMode::Center => vec![vec![0; dimensions]],
        };

        let mut summary = ScanSummary::default();
        for center in search.positions() {
            let level = {
                let reader = source.unwrap_or(&*target);
                let neighborhood =
                    Neighborhood::with_offsets(reader, center.clone(), Rc::clone(&offsets));
                self.level(&neighborhood)?
            };

            for offset in &write_offsets {
                let coordinate = translate(&center, offset);
                let raw = source
                    .unwrap_or(&*target)
                    .get(&coordinate)
                    .ok_or_else(|| GridError::OutOfBounds {
                        coordinate: coordinate.clone(),
                    })?;
                target.set(&coordinate, self.label(raw, level))?;
                summary.pixels_written += 1;
            }
            summary.centers_visited += 1;
        }

        Ok(summary)
    }

    fn level(&self, neighborhood: &Neighborhood<'_, T>) -> Result<f64> {
        match self.config.policy {
            ThresholdPolicy::Mean => mean(neighborhood.values(), &self.shape),
            ThresholdPolicy::MinMax { bias, scale } => {
                let extremes = min_max(neighborhood.values(), &self.shape)?;
                Ok(midpoint_threshold(&extremes, bias) * scale)
            }
        }
    }

    fn label(&self, raw: T, level: f64) -> T {
        let ordering = raw.to_real().partial_cmp(&level);
        let bright = match self.config.policy {
            ThresholdPolicy::Mean => ordering == Some(Ordering::Greater),
            ThresholdPolicy::MinMax { .. } => {
                !matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            }
        };
        if bright {
            self.config.bright
        } else {
            self.config.dark
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithm/classifier.rs"]
mod unit_tests;
