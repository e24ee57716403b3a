//! Sliding-window neighborhood scans over N-dimensional grids
//!
//! Rectangular neighborhoods of a configurable radius are swept over every
//! interior position of a grid. The local statistics they produce drive an
//! adaptive binarizer and a strict local-extremum detector that stamps
//! hyperspheres around its findings.

#![forbid(unsafe_code)]

/// Adaptive classification, extremum marking and global thresholding
pub mod algorithm;
/// Local reducers and whole-grid statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Scalar abstraction and compensated summation
pub mod math;
/// Grids, intervals, neighborhoods and hyperspheres
pub mod spatial;

pub use io::error::{GridError, Result};
