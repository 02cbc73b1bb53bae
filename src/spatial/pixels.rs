//! Read-only RGBA pixel buffer backed by an `(height, width, 4)` array

use crate::io::error::{DotterError, Result};
use crate::spatial::color::Rgba;
use ndarray::{Array3, Axis, Slice};
use std::ops::Range;

/// Decoded image pixels, stride 4 (red, green, blue, alpha)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Wrap row-major RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns [`DotterError::InvalidSourceData`] if either dimension is zero
    /// or `data` does not hold exactly `width * height * 4` bytes
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DotterError::InvalidSourceData {
                reason: format!("image dimensions must be positive, got {width}x{height}"),
            });
        }

        let length = data.len();
        let pixels = Array3::from_shape_vec((height, width, 4), data).map_err(|shape_error| {
            DotterError::InvalidSourceData {
                reason: format!(
                    "{length} bytes do not form a {width}x{height} RGBA image: {shape_error}"
                ),
            }
        })?;

        Ok(Self { pixels })
    }

    /// Buffer filled with one color
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        let mut pixels = Array3::zeros((height, width, 4));
        for mut pixel in pixels.rows_mut() {
            for (channel, value) in pixel.iter_mut().zip(color.channels()) {
                *channel = value;
            }
        }
        Self { pixels }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Color of a single pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        let mut channels = [0; 4];
        for (c, channel) in channels.iter_mut().enumerate() {
            *channel = *self.pixels.get((y, x, c))?;
        }
        Some(Rgba(channels))
    }

    /// Overwrite a single pixel, ignoring coordinates outside the buffer
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        for (c, value) in color.channels().into_iter().enumerate() {
            if let Some(channel) = self.pixels.get_mut((y, x, c)) {
                *channel = value;
            }
        }
    }

    /// Every pixel of a rectangle, clipped to the buffer
    pub fn region(&self, columns: Range<usize>, rows: Range<usize>) -> Vec<Rgba> {
        let clip = |range: Range<usize>, limit: usize| {
            let end = range.end.min(limit);
            range.start.min(end)..end
        };
        let columns = clip(columns, self.width());
        let rows = clip(rows, self.height());

        let band = self.pixels.slice_axis(Axis(0), Slice::from(rows));
        band.slice_axis(Axis(1), Slice::from(columns))
            .rows()
            .into_iter()
            .map(|lane| {
                let mut channels = [0; 4];
                for (channel, &value) in channels.iter_mut().zip(lane.iter()) {
                    *channel = value;
                }
                Rgba(channels)
            })
            .collect()
    }
}
