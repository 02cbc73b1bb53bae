//! Tests for image decoding and grid preview rendering

#[cfg(test)]
mod tests {
    use dotter::io::error::DotterError;
    use dotter::io::image::{export_grid_preview, load_pixel_buffer};
    use dotter::spatial::{Cell, Grid, Rgba};
    use image::{ImageBuffer, Rgba as ImageRgba};
    use tempfile::TempDir;

    // Tests decoded pixels keep their position and channels
    // Verified by converting to RGB instead of RGBA
    #[test]
    fn test_load_pixel_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("source.png");
        let mut img = ImageBuffer::from_pixel(3, 2, ImageRgba([0_u8, 0, 0, 255]));
        img.put_pixel(2, 1, ImageRgba([10, 20, 30, 40]));
        img.save(&path).unwrap();

        let pixels = load_pixel_buffer(&path).unwrap();
        assert_eq!((pixels.width(), pixels.height()), (3, 2));
        assert_eq!(pixels.pixel(2, 1), Some(Rgba::new(10, 20, 30, 40)));
        assert_eq!(pixels.pixel(0, 0), Some(Rgba::new(0, 0, 0, 255)));
    }

    // Tests unreadable images report the path
    #[test]
    fn test_load_pixel_buffer_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, "not a png").unwrap();

        assert!(matches!(
            load_pixel_buffer(&path),
            Err(DotterError::ImageLoad { .. })
        ));
    }

    // Tests preview dimensions follow the cropped columns and every row
    // Verified by ignoring the minimum column offset
    #[test]
    fn test_export_grid_preview() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("preview.png");
        let red = Rgba::new(255, 0, 0, 255);
        let grid = Grid::from_rows(vec![
            vec![Cell::new(-2, 0, 2, red)],
            vec![],
            vec![Cell::unit(1, 2, red)],
        ]);

        export_grid_preview(&grid, 2, &path).unwrap();

        let rendered = image::open(&path).unwrap().to_rgba8();
        assert_eq!(rendered.dimensions(), (8, 6));
        assert_eq!(rendered.get_pixel(0, 0), &ImageRgba([255, 0, 0, 255]));
        assert_eq!(rendered.get_pixel(3, 1), &ImageRgba([255, 0, 0, 255]));
        assert_eq!(rendered.get_pixel(4, 0), &ImageRgba([0, 0, 0, 0]));
        assert_eq!(rendered.get_pixel(6, 4), &ImageRgba([255, 0, 0, 255]));
    }

    // Tests error when no cells are placed
    // Verified by ignoring empty grid check
    #[test]
    fn test_export_grid_preview_empty_grid_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = export_grid_preview(&Grid::with_rows(3), 4, &temp_dir.path().join("e.png"));
        assert!(result.is_err(), "Should fail when no cells are placed");
    }

    // Tests zero scale is rejected
    #[test]
    fn test_export_grid_preview_zero_scale() {
        let temp_dir = TempDir::new().unwrap();
        let grid = Grid::from_rows(vec![vec![Cell::unit(0, 0, Rgba::TRANSPARENT)]]);
        assert!(matches!(
            export_grid_preview(&grid, 0, &temp_dir.path().join("z.png")),
            Err(DotterError::InvalidSourceData { .. })
        ));
    }

    // Tests oversized scales are rejected instead of overflowing pixel sizes
    // Verified by multiplying without overflow checks
    #[test]
    fn test_export_grid_preview_scale_overflow() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("huge.png");
        let grid = Grid::from_rows(vec![vec![Cell::new(0, 0, 3, Rgba::TRANSPARENT)]]);

        assert!(matches!(
            export_grid_preview(&grid, 2_000_000_000, &path),
            Err(DotterError::InvalidSourceData { .. })
        ));
        assert!(!path.exists());
    }
}
