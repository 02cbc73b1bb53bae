//! Deterministic conversion of images into grids of colored dots
//!
//! An image is sampled into a grid of averaged unit cells, adjacent cells are
//! merged into wider spans, and new cells are grown around the content. Every
//! random-looking choice comes from a self-adjusting weighted sampler reading
//! a fixed seed sequence, so a seed and configuration always reproduce the
//! same grid.

#![forbid(unsafe_code)]

/// Grid synthesis pipeline: image cells, span merging, surrounding growth
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Seed sequence and weighted sampler
pub mod sampling;
/// Colors, cells, grids and pixel buffers
pub mod spatial;

pub use algorithm::builder::{GeneratorConfig, GridBuilder};
pub use io::error::{DotterError, Result};
