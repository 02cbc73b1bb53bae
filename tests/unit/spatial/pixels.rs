//! Tests for the RGBA pixel buffer

#[cfg(test)]
mod tests {
    use dotter::io::error::DotterError;
    use dotter::spatial::{PixelBuffer, Rgba};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests dimension and length validation
    #[test]
    fn test_from_rgba_validates_shape() {
        assert!(matches!(
            PixelBuffer::from_rgba(0, 2, Vec::new()),
            Err(DotterError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_rgba(2, 2, vec![0; 15]),
            Err(DotterError::InvalidSourceData { .. })
        ));
        let buffer = PixelBuffer::from_rgba(3, 2, vec![0; 24]).expect("valid buffer");
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
    }

    // Tests bytes are read row-major in RGBA order
    // Verified by swapping the width and height axes
    #[test]
    fn test_pixel_layout() {
        let mut rng = StdRng::seed_from_u64(17);
        let data: Vec<u8> = (0..3 * 2 * 4).map(|_| rng.random()).collect();
        let buffer = PixelBuffer::from_rgba(3, 2, data.clone()).expect("valid buffer");

        for y in 0..2 {
            for x in 0..3 {
                let offset = (y * 3 + x) * 4;
                let expected = Rgba([
                    data[offset],
                    data[offset + 1],
                    data[offset + 2],
                    data[offset + 3],
                ]);
                assert_eq!(buffer.pixel(x, y), Some(expected));
            }
        }
        assert_eq!(buffer.pixel(3, 0), None);
    }

    // Tests regions are clipped to the buffer
    #[test]
    fn test_region_clips() {
        let mut buffer = PixelBuffer::filled(4, 4, Rgba::TRANSPARENT);
        let marker = Rgba::new(1, 2, 3, 4);
        buffer.set_pixel(3, 3, marker);
        buffer.set_pixel(10, 10, marker);

        assert_eq!(buffer.region(0..2, 0..2).len(), 4);
        assert_eq!(buffer.region(2..9, 3..9), vec![Rgba::TRANSPARENT, marker]);
        assert!(buffer.region(5..9, 0..4).is_empty());
    }

    // Tests region pixels come out row by row from a non-square buffer
    // Verified by swapping the row and column axes
    #[test]
    fn test_region_row_major_order() {
        let mut buffer = PixelBuffer::filled(5, 3, Rgba::TRANSPARENT);
        for y in 0..3 {
            for x in 0..5 {
                buffer.set_pixel(x, y, Rgba::new(x as u8, y as u8, 0, 255));
            }
        }

        assert_eq!(
            buffer.region(1..4, 1..3),
            vec![
                Rgba::new(1, 1, 0, 255),
                Rgba::new(2, 1, 0, 255),
                Rgba::new(3, 1, 0, 255),
                Rgba::new(1, 2, 0, 255),
                Rgba::new(2, 2, 0, 255),
                Rgba::new(3, 2, 0, 255),
            ]
        );
    }
}
