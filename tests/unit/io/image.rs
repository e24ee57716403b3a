//! Tests for grayscale PNG load and export

#[cfg(test)]
mod tests {
    use crate::io::error::GridError;
    use crate::io::image::{export_grid_as_png, load_grayscale};
    use crate::spatial::grid::Grid;
    use tempfile::TempDir;

    // Tests exported pixels load back with the same shape and values
    // Verified by swapping width and height in the export
    #[test]
    fn test_export_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("gradient.png");
        let grid = Grid::from_shape_vec(&[2, 3], vec![0, 50, 100, 150, 200, 255]).unwrap();

        export_grid_as_png(&grid, &path).unwrap();
        let loaded = load_grayscale(&path).unwrap();

        assert_eq!(loaded.shape(), &[2, 3]);
        assert_eq!(loaded, grid);
    }

    // Tests out-of-range values are clamped and floats rounded
    // Verified by casting without clamping
    #[test]
    fn test_values_are_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clamped.png");
        let grid = Grid::from_shape_vec(&[1, 4], vec![-40.0, 300.0, 12.6, f64::NAN]).unwrap();

        export_grid_as_png(&grid, &path).unwrap();
        let loaded = load_grayscale(&path).unwrap();

        assert_eq!(loaded.values().copied().collect::<Vec<_>>(), vec![0, 255, 13, 0]);
    }

    // Tests non-image grids are rejected
    #[test]
    fn test_export_requires_two_dimensions() {
        let dir = TempDir::new().unwrap();
        let grid = Grid::new(&[2, 2, 2], 0u8).unwrap();
        let result = export_grid_as_png(&grid, dir.path().join("cube.png"));

        assert!(matches!(
            result,
            Err(GridError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    // Tests a missing file reports the path it tried
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.png");

        match load_grayscale(&path) {
            Err(GridError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ImageLoad, got {other:?}"),
        }
    }
}
