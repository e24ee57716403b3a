//! Engine defaults and runtime configuration constants

/// Neighborhood radius used when none is given (3x3x...x3 windows)
pub const DEFAULT_RADIUS: usize = 1;

/// Radius of the hypersphere stamped around each detected extremum
pub const DEFAULT_MARKER_RADIUS: usize = 1;

// Midpoint heuristic of the min/max classifier
/// Offset subtracted from the min/max midpoint
pub const DEFAULT_BIAS: f64 = 20.0;
/// Factor applied to the biased midpoint before comparison
pub const DEFAULT_SCALE: f64 = 0.11;

/// Value written for pixels classified as foreground
pub const DEFAULT_BRIGHT: u8 = 255;
/// Value written for pixels classified as background
pub const DEFAULT_DARK: u8 = 0;

/// Cutoff for the fixed global threshold
pub const DEFAULT_GLOBAL_THRESHOLD: f64 = 180.0;

// Output settings
/// Separator between the input stem and the mode name in output filenames
pub const OUTPUT_SUFFIX_SEPARATOR: &str = "_";
/// Extension of processed input and output files
pub const IMAGE_EXTENSION: &str = "png";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

#[cfg(test)]
#[path = "../../tests/unit/io/configuration.rs"]
mod unit_tests;
