//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use crate::io::configuration::{
        DEFAULT_BIAS, DEFAULT_BRIGHT, DEFAULT_DARK, DEFAULT_GLOBAL_THRESHOLD,
        DEFAULT_MARKER_RADIUS, DEFAULT_RADIUS, DEFAULT_SCALE, IMAGE_EXTENSION,
        MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_SUFFIX_SEPARATOR,
    };

    // Tests the neighborhood defaults describe 3x3 windows and unit spheres
    #[test]
    fn test_radius_defaults() {
        assert_eq!(DEFAULT_RADIUS, 1);
        assert_eq!(DEFAULT_MARKER_RADIUS, 1);
    }

    // Tests the min/max heuristic constants keep their default values
    #[test]
    fn test_midpoint_heuristic_defaults() {
        assert!((DEFAULT_BIAS - 20.0).abs() < f64::EPSILON);
        assert!((DEFAULT_SCALE - 0.11).abs() < f64::EPSILON);
    }

    // Tests the classification values span the 8-bit range
    #[test]
    fn test_classification_values() {
        assert!(DEFAULT_DARK < DEFAULT_BRIGHT);
        assert_eq!(DEFAULT_BRIGHT, u8::MAX);
        assert!(DEFAULT_GLOBAL_THRESHOLD > f64::from(DEFAULT_DARK));
        assert!(DEFAULT_GLOBAL_THRESHOLD < f64::from(DEFAULT_BRIGHT));
    }

    // Tests output naming settings are usable in filenames
    #[test]
    fn test_output_settings() {
        assert!(!OUTPUT_SUFFIX_SEPARATOR.is_empty());
        assert!(!OUTPUT_SUFFIX_SEPARATOR.contains('/'));
        assert_eq!(IMAGE_EXTENSION, "png");
        assert!(MAX_INDIVIDUAL_PROGRESS_BARS > 0);
    }
}
