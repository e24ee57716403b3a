//! Error types for grid traversal, neighborhood statistics and image exchange

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Grid is too small along an axis for the requested neighborhood radius
    ///
    /// Raised before any traversal begins. Shrinking the interval further would
    /// leave no position to visit, which must not be mistaken for success.
    InvalidInterval {
        /// Axis on which the contraction failed
        axis: usize,
        /// Extent of the interval along that axis
        extent: u64,
        /// Minimum extent the radius requires (`2r + 1`)
        required: u64,
    },

    /// A neighborhood produced no values to reduce
    ///
    /// Only reachable with a degenerate shape such as radius 0 with the center skipped.
    EmptyWindow {
        /// Radius of the offending shape
        radius: usize,
        /// Whether the shape excludes its center
        skip_center: bool,
    },

    /// Coordinate lies outside the grid bounds
    OutOfBounds {
        /// The rejected coordinate
        coordinate: Vec<i64>,
    },

    /// Coordinate or interval dimensionality disagrees with the grid
    DimensionMismatch {
        /// Dimensionality of the grid
        expected: usize,
        /// Dimensionality that was supplied
        actual: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a result image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval {
                axis,
                extent,
                required,
            } => {
                write!(
                    f,
                    "Invalid interval: axis {axis} has extent {extent}, neighborhood needs at least {required}"
                )
            }
            Self::EmptyWindow {
                radius,
                skip_center,
            } => {
                write!(
                    f,
                    "Empty neighborhood window (radius {radius}, skip_center {skip_center})"
                )
            }
            Self::OutOfBounds { coordinate } => {
                write!(f, "Coordinate {coordinate:?} is outside the grid bounds")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Dimension mismatch: grid has {expected} axes, got {actual}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> GridError {
    GridError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/error.rs"]
mod unit_tests;
