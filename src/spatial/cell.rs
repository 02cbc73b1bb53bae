//! Grid cells and their exported tuple form

use crate::spatial::color::Rgba;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A colored cell covering `span` columns starting at `x` on row `y`
///
/// Coordinates are grid units, not pixels. `span` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// First column covered by the cell
    pub x: i32,
    /// Row of the cell
    pub y: i32,
    /// Number of columns covered
    pub span: u32,
    /// Cell color
    pub color: Rgba,
}

impl Cell {
    /// Create a cell covering `span` columns
    pub const fn new(x: i32, y: i32, span: u32, color: Rgba) -> Self {
        Self { x, y, span, color }
    }

    /// Create a single-column cell
    pub const fn unit(x: i32, y: i32, color: Rgba) -> Self {
        Self::new(x, y, 1, color)
    }

    /// One past the last column covered
    pub const fn end(&self) -> i32 {
        self.x + self.span as i32
    }

    /// Columns covered by the cell
    pub const fn columns(&self) -> Range<i32> {
        self.x..self.end()
    }

    /// Exported `[x, y, span, "#rrggbbaa"]` form
    pub const fn encode(&self) -> EncodedCell {
        EncodedCell(self.x, self.y, self.span, self.color)
    }
}

/// Serialized cell: a JSON array `[x, y, span, "#rrggbbaa"]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCell(pub i32, pub i32, pub u32, pub Rgba);

impl From<EncodedCell> for Cell {
    fn from(encoded: EncodedCell) -> Self {
        let EncodedCell(x, y, span, color) = encoded;
        Self::new(x, y, span, color)
    }
}
