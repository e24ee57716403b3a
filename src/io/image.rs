//! Grayscale PNG loading and export for two-dimensional grids
//!
//! Images map to grids of shape `[height, width]`, so row-major traversal
//! walks pixels left to right, top to bottom.

use std::path::Path;

use image::GrayImage;

use crate::io::error::{GridError, Result, computation_error};
use crate::math::scalar::Scalar;
use crate::spatial::grid::Grid;

/// Load a PNG as 8-bit luminance values
///
/// Color images are converted to grayscale; alpha is dropped.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded, and an interval
/// error for an image with no pixels
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Grid<i32>> {
    let path_buf = path.as_ref().to_path_buf();
    let luma = image::open(&path_buf)
        .map_err(|e| GridError::ImageLoad {
            path: path_buf,
            source: e,
        })?
        .to_luma8();

    let shape = [luma.height() as usize, luma.width() as usize];
    let values = luma.into_raw().into_iter().map(i32::from).collect();
    Grid::from_shape_vec(&shape, values)
}

/// Export a two-dimensional grid as a grayscale PNG
///
/// Values are rounded and clamped to `0..=255`; NaN becomes 0. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The grid is not two-dimensional
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<T: Scalar, P: AsRef<Path>>(grid: &Grid<T>, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let &[height, width] = grid.shape() else {
        return Err(GridError::DimensionMismatch {
            expected: 2,
            actual: grid.dimensions(),
        });
    };

    let pixels: Vec<u8> = grid.values().map(|value| to_pixel(*value)).collect();
    let img = GrayImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| computation_error("export_grid_as_png", &"pixel buffer does not match shape"))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

// Saturating float-to-int cast maps NaN to 0
fn to_pixel<T: Scalar>(value: T) -> u8 {
    value.to_real().round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/io/image.rs"]
mod unit_tests;
