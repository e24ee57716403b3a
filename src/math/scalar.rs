//! Numeric capability set shared by every grid algorithm
//!
//! One generic bound replaces per-encoding implementations: anything that is
//! ordered, supports addition and converts to `f64` can be scanned.

use crate::io::error::{Result, invalid_parameter};
use num_traits::{NumCast, One, ToPrimitive, Zero};
use std::fmt::Debug;

/// Pixel value usable by neighborhood scans
///
/// Blanket-implemented for all primitive integers and floats.
pub trait Scalar: Copy + PartialOrd + Zero + One + NumCast + Debug {
    /// Widen to `f64` for statistics
    ///
    /// Integers wider than 53 bits lose precision; NaN passes through.
    fn to_real(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Narrow an `f64` back into the scalar type
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is not representable
    fn from_real(parameter: &'static str, value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or_else(|| {
            invalid_parameter(parameter, &value, &"value is not representable in the grid type")
        })
    }
}

impl<T> Scalar for T where T: Copy + PartialOrd + Zero + One + NumCast + Debug {}

#[cfg(test)]
#[path = "../../tests/unit/math/scalar.rs"]
mod unit_tests;
