//! Numeric foundations shared by the algorithms

/// Generic scalar bound for grid elements
pub mod scalar;
/// Compensated floating-point summation
pub mod summation;
