//! Image decoding into pixel buffers and PNG preview rendering of grids

use crate::io::error::{DotterError, Result};
use crate::spatial::{Grid, PixelBuffer};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Decode any image format supported by the `image` crate into RGBA pixels
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a valid image
/// - The decoded dimensions do not form a valid pixel buffer
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).map_err(|source| DotterError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba_img = img.to_rgba8();
    let (width, height) = (rgba_img.width() as usize, rgba_img.height() as usize);
    PixelBuffer::from_rgba(width, height, rgba_img.into_raw())
}

// Column range rendered into the preview, cropped to the cells present
fn preview_bounds(grid: &Grid) -> Option<(i32, i32)> {
    grid.column_bounds().filter(|(min, max)| max > min)
}

// Grid units to preview pixels
fn scaled(units: u32, scale: u32) -> Result<u32> {
    units
        .checked_mul(scale)
        .ok_or_else(|| DotterError::InvalidSourceData {
            reason: format!("preview of {units} units at scale {scale} exceeds the image size limit"),
        })
}

/// Render a grid as a PNG with `scale` pixels per grid unit
///
/// The canvas spans every row of the grid and the columns actually covered
/// by cells. Uncovered areas stay transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The grid holds no cells or `scale` is zero
/// - The scaled preview does not fit in `u32` pixel dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_preview(grid: &Grid, scale: u32, output_path: &Path) -> Result<()> {
    let (min_x, max_x) = preview_bounds(grid).ok_or_else(|| DotterError::InvalidSourceData {
        reason: "No cells have been placed in the grid".to_string(),
    })?;
    if scale == 0 {
        return Err(DotterError::InvalidSourceData {
            reason: "preview scale must be positive".to_string(),
        });
    }

    let width = scaled(max_x.abs_diff(min_x), scale)?;
    let rows = u32::try_from(grid.row_count()).map_err(|_| DotterError::InvalidSourceData {
        reason: format!("{} rows cannot be rendered", grid.row_count()),
    })?;
    let height = scaled(rows, scale)?;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for cell in grid.cells() {
        let left = scaled(cell.x.abs_diff(min_x), scale)?;
        let top = scaled(cell.y.unsigned_abs(), scale)?;
        let right = left.saturating_add(scaled(cell.span, scale)?).min(width);
        let pixel = Rgba(cell.color.channels());
        for pixel_y in top..top.saturating_add(scale).min(height) {
            for pixel_x in left..right {
                img.put_pixel(pixel_x, pixel_y, pixel);
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DotterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| DotterError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
