//! Spatial data structures and traversal
//!
//! This module contains spatial-related functionality including:
//! - Dense grids with absolute coordinates
//! - Intervals and their row-major enumeration
//! - Rectangular neighborhoods and hypersphere stamps

/// Dense N-dimensional grid storage
pub mod grid;
/// Inclusive coordinate boxes
pub mod interval;
/// Rectangular windows and the sliding traversal
pub mod neighborhood;
/// Discrete hyperspheres for marking
pub mod sphere;

pub use grid::Grid;
pub use interval::Interval;
