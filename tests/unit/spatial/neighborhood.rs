//! Tests for rectangular window enumeration and search interval traversal

#[cfg(test)]
mod tests {
    use crate::io::error::GridError;
    use crate::spatial::grid::Grid;
    use crate::spatial::neighborhood::RectangleShape;
    use proptest::prelude::*;

    // Tests window sizes for full and center-skipping shapes
    #[test]
    fn test_window_size_formula() {
        assert_eq!(RectangleShape::new(1, false).window_size(2), 9);
        assert_eq!(RectangleShape::new(1, true).window_size(2), 8);
        assert_eq!(RectangleShape::new(1, true).window_size(3), 26);
        assert_eq!(RectangleShape::new(2, false).window_size(1), 5);
        assert_eq!(RectangleShape::new(0, false).window_size(4), 1);
        assert_eq!(RectangleShape::new(0, true).window_size(4), 0);
    }

    // Tests offsets are row-major and omit only the zero offset when skipping
    // Verified by filtering any offset containing a zero component
    #[test]
    fn test_offsets_order_and_center_skip() {
        let full = RectangleShape::new(1, false).offsets(2);
        assert_eq!(full.first(), Some(&vec![-1, -1]));
        assert_eq!(full.get(1), Some(&vec![-1, 0]));
        assert_eq!(full.get(4), Some(&vec![0, 0]));
        assert_eq!(full.last(), Some(&vec![1, 1]));

        let skipped = RectangleShape::new(1, true).offsets(2);
        assert_eq!(skipped.len(), 8);
        assert!(!skipped.contains(&vec![0, 0]));
        assert!(skipped.contains(&vec![0, 1]));
        assert!(skipped.contains(&vec![-1, 0]));
    }

    // Tests traversal visits only interior centers, in row-major order
    // Verified by iterating the full grid bounds instead of the search interval
    #[test]
    fn test_neighborhoods_visit_search_interval() {
        let grid = Grid::from_shape_vec(&[4, 5], (0..20).collect::<Vec<i32>>()).unwrap();
        let shape = RectangleShape::new(1, false);

        let centers: Vec<Vec<i64>> = shape
            .neighborhoods(&grid)
            .unwrap()
            .map(|n| n.center().to_vec())
            .collect();

        assert_eq!(
            centers,
            vec![
                vec![1, 1],
                vec![1, 2],
                vec![1, 3],
                vec![2, 1],
                vec![2, 2],
                vec![2, 3]
            ]
        );
    }

    // Tests neighborhood values around a known center
    #[test]
    fn test_neighborhood_values() {
        let grid = Grid::from_shape_vec(&[3, 3], (1..=9).collect::<Vec<i32>>()).unwrap();
        let shape = RectangleShape::new(1, true);
        let neighborhood = shape.neighborhood_at(&grid, &[1, 1]).unwrap();

        let values: Vec<i32> = neighborhood.values().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 6, 7, 8, 9]);
        assert_eq!(neighborhood.center_value(), Some(5));
        assert_eq!(neighborhood.len(), 8);
        assert!(!neighborhood.is_empty());

        let offsets: Vec<Vec<i64>> = neighborhood.iter().map(|(o, _)| o.to_vec()).collect();
        assert_eq!(offsets, shape.offsets(2));

        let positions: Vec<Vec<i64>> = neighborhood.positions().collect();
        assert_eq!(positions.first(), Some(&vec![0, 0]));
        assert_eq!(positions.last(), Some(&vec![2, 2]));
    }

    // Tests neighborhoods can be iterated repeatedly with identical results
    #[test]
    fn test_neighborhood_restartable() {
        let grid = Grid::from_shape_vec(&[3], vec![5.0f32, 1.0, 5.0]).unwrap();
        let shape = RectangleShape::new(1, false);
        let neighborhood = shape.neighborhoods(&grid).unwrap().next().unwrap();

        let first: Vec<f32> = neighborhood.values().collect();
        let second: Vec<f32> = neighborhood.values().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    // Tests too-small grids fail before traversal and off-center requests are rejected
    #[test]
    fn test_neighborhood_errors() {
        let grid = Grid::new(&[2, 9], 0u8).unwrap();
        let shape = RectangleShape::new(1, true);
        assert!(matches!(
            shape.neighborhoods(&grid),
            Err(GridError::InvalidInterval { axis: 0, .. })
        ));

        let grid = Grid::new(&[3, 3], 0u8).unwrap();
        assert!(matches!(
            shape.neighborhood_at(&grid, &[0, 1]),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    // Tests non-zero origins shift the search interval with the grid
    #[test]
    fn test_neighborhoods_with_origin() {
        let grid = Grid::new(&[3, 3], 0i16)
            .unwrap()
            .with_origin(vec![-5, 100])
            .unwrap();
        let shape = RectangleShape::new(1, false);
        let centers: Vec<Vec<i64>> = shape
            .neighborhoods(&grid)
            .unwrap()
            .map(|n| n.center().to_vec())
            .collect();
        assert_eq!(centers, vec![vec![-4, 101]]);
    }

    proptest! {
        // Every neighborhood yields exactly the window size, for any radius, dimensionality and element type
        #[test]
        fn prop_window_yields_exact_size(
            radius in 0usize..3,
            skip_center in any::<bool>(),
            dims in 1usize..4,
            extra in 0usize..3,
        ) {
            let side = 2 * radius + 1 + extra;
            let shape_dims = vec![side; dims];
            let shape = RectangleShape::new(radius, skip_center);
            let expected = shape.window_size(dims);

            let grid_u8 = Grid::new(&shape_dims, 3u8).unwrap();
            for neighborhood in shape.neighborhoods(&grid_u8).unwrap() {
                prop_assert_eq!(neighborhood.iter().count(), expected);
            }

            let grid_f64 = Grid::new(&shape_dims, -0.5f64).unwrap();
            for neighborhood in shape.neighborhoods(&grid_f64).unwrap() {
                prop_assert_eq!(neighborhood.values().count(), expected);
            }

            let full = (2 * radius + 1).pow(dims as u32);
            prop_assert_eq!(expected, if skip_center { full - 1 } else { full });
        }

        // Grids smaller than the window along any axis always fail
        #[test]
        fn prop_small_grid_rejected(radius in 1usize..4, dims in 1usize..4, short_axis in 0usize..3) {
            let mut shape_dims = vec![2 * radius + 1; dims];
            if let Some(len) = shape_dims.get_mut(short_axis % dims) {
                *len = 2 * radius;
            }
            let grid = Grid::new(&shape_dims, 0i32).unwrap();
            let shape = RectangleShape::new(radius, false);
            let is_invalid = matches!(shape.neighborhoods(&grid), Err(GridError::InvalidInterval { .. }));
            prop_assert!(is_invalid);
        }
    }

    // Tests enormous radii neither overflow the window size nor produce offsets
    // Verified by computing the side as 2 * r + 1
    #[test]
    fn test_huge_radius() {
        let shape = RectangleShape::new(usize::MAX, true);
        assert_eq!(shape.window_size(2), usize::MAX - 1);
        assert!(shape.offsets(2).is_empty());

        let grid = Grid::new(&[3, 3], 0i32).unwrap();
        assert!(matches!(
            shape.neighborhoods(&grid),
            Err(GridError::InvalidInterval { axis: 0, .. })
        ));
    }
}
