//! Statistics over neighborhoods and whole grids

/// Mean, min/max and midpoint reducers for one window
pub mod reducers;
/// Whole-grid average and extremum locations
pub mod statistics;
