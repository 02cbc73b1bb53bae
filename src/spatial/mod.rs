//! Spatial data structures for dot grids
//!
//! This module contains:
//! - RGBA colors and their hex encoding
//! - Cells and their exported tuple form
//! - The row-ordered grid and its occupancy set
//! - Decoded RGBA pixel buffers

/// Colors, hex encoding and channel averaging
pub mod color;
/// Grid cells
pub mod cell;
/// Grid rows and occupancy
pub mod grid;
/// RGBA pixel buffers
pub mod pixels;

pub use cell::{Cell, EncodedCell};
pub use color::Rgba;
pub use grid::{Grid, Occupancy};
pub use pixels::PixelBuffer;
