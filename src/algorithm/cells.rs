//! Reduction of a pixel buffer into a grid of averaged unit cells
//!
//! The image is cut into `rows x columns` rectangles of equal size. Each
//! rectangle becomes one unit cell holding the rounded mean of its pixels,
//! unless the ignore-color rule drops it. A configured palette replaces the
//! averaged color of every retained cell with a sampled palette entry.

use crate::io::error::{Result, config_error};
use crate::sampling::{SamplerOptions, WeightedSampler};
use crate::spatial::color::middleweight_color;
use crate::spatial::{Cell, Grid, PixelBuffer, Rgba};
use log::debug;

/// Cells close to `color` or more transparent than `opacity_threshold` are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreColor {
    /// Color to drop
    pub color: Rgba,
    /// Largest per-channel R, G, B difference still counted as a match
    pub max_deviation: u8,
    /// Cells whose alpha is at or below this are dropped
    pub opacity_threshold: u8,
}

impl IgnoreColor {
    /// Whether a cell of the given average color is dropped
    pub fn matches(&self, color: Rgba) -> bool {
        color.rgb_within(self.color, self.max_deviation) || color.alpha() <= self.opacity_threshold
    }
}

/// Palette colors drawn in sequence by a dedicated sampler
#[derive(Debug, Clone)]
pub struct PaletteSampler {
    colors: Vec<Rgba>,
    sampler: WeightedSampler<usize>,
}

impl PaletteSampler {
    /// Sampler over the palette's indices
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the palette is empty
    pub fn new(seed: u32, colors: Vec<Rgba>) -> Result<Self> {
        if colors.is_empty() {
            return Err(config_error(
                "main_palette",
                &"[]",
                &"palette needs at least one color",
            ));
        }
        let sampler =
            WeightedSampler::new(seed, (0..colors.len()).collect(), SamplerOptions::default())?;
        Ok(Self { colors, sampler })
    }

    /// Draw the next palette color
    ///
    /// Palette draws are independent of any available space, so the weights
    /// are updated immediately.
    ///
    /// # Errors
    ///
    /// Propagates sampler failures
    pub fn next_color(&mut self) -> Result<Rgba> {
        let index = self.sampler.generate_next_value()?;
        Ok(self
            .colors
            .get(index)
            .copied()
            .unwrap_or(Rgba::TRANSPARENT))
    }

    /// Underlying index sampler
    pub const fn sampler(&self) -> &WeightedSampler<usize> {
        &self.sampler
    }
}

/// Partitions pixel buffers into a `rows x columns` unit-cell grid
#[derive(Debug, Clone)]
pub struct ImageCellSampler {
    rows: usize,
    columns: usize,
    ignore_color: Option<IgnoreColor>,
    palette: Option<PaletteSampler>,
}

impl ImageCellSampler {
    /// Create a sampler for the given grid size
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either count is zero
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(config_error(
                "grid size",
                &format!("{rows}x{columns}"),
                &"rows and columns must be positive",
            ));
        }
        Ok(Self {
            rows,
            columns,
            ignore_color: None,
            palette: None,
        })
    }

    /// Drop cells matching `ignore_color`
    #[must_use]
    pub fn with_ignore_color(mut self, ignore_color: Option<IgnoreColor>) -> Self {
        self.ignore_color = ignore_color;
        self
    }

    /// Replace retained cell colors with palette draws
    #[must_use]
    pub fn with_palette(mut self, palette: Option<PaletteSampler>) -> Self {
        self.palette = palette;
        self
    }

    /// Pixel size of one cell, each side at least 1
    pub fn cell_size(&self, pixels: &PixelBuffer) -> (usize, usize) {
        (
            (pixels.width() / self.columns).max(1),
            (pixels.height() / self.rows).max(1),
        )
    }

    /// Sample `pixels` into unit cells, row by row, left to right
    ///
    /// Rectangles falling entirely outside the image average to
    /// [`Rgba::TRANSPARENT`]. Rows whose cells were all dropped stay in the
    /// grid as empty rows.
    ///
    /// # Errors
    ///
    /// Propagates palette sampler failures
    pub fn sample(&mut self, pixels: &PixelBuffer) -> Result<Grid> {
        let (cell_width, cell_height) = self.cell_size(pixels);
        let mut rows = Vec::with_capacity(self.rows);
        let mut dropped = 0_usize;
        let mut empty = 0_usize;

        for row in 0..self.rows {
            let top = row * cell_height;
            let mut cells = Vec::with_capacity(self.columns);

            for column in 0..self.columns {
                let left = column * cell_width;
                let region = pixels.region(left..left + cell_width, top..top + cell_height);
                if region.is_empty() {
                    empty += 1;
                }
                let average = middleweight_color(region);

                if self
                    .ignore_color
                    .is_some_and(|ignore| ignore.matches(average))
                {
                    dropped += 1;
                    continue;
                }

                let color = match self.palette.as_mut() {
                    Some(palette) => palette.next_color()?,
                    None => average,
                };
                cells.push(Cell::unit(column as i32, row as i32, color));
            }

            rows.push(cells);
        }

        if empty > 0 {
            debug!("{empty} cells sampled no pixels and fell back to transparent");
        }
        debug!(
            "sampled {}x{} cells of {cell_width}x{cell_height}px, dropped {dropped}",
            self.rows, self.columns
        );

        Ok(Grid::from_rows(rows))
    }
}
