//! Pipeline orchestration: image cells, span merging, surrounding growth
//!
//! Every sampler created here shares the configured seed. The streams only
//! diverge through their different value sets, so the stage order below is
//! part of the output.

use crate::algorithm::cells::{IgnoreColor, ImageCellSampler, PaletteSampler};
use crate::algorithm::range::SampledRange;
use crate::algorithm::span::SpanMerger;
use crate::algorithm::surrounding::{SurroundingCellGrower, SurroundingConfig};
use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED};
use crate::io::error::Result;
use crate::spatial::{EncodedCell, Grid, PixelBuffer, Rgba};
use log::{debug, info};

/// Complete, validated-on-build generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed shared by every sampler
    pub seed: u32,
    /// Number of grid rows sampled from the image
    pub rows: usize,
    /// Number of grid columns sampled from the image
    pub columns: usize,
    /// Drop cells matching this rule
    pub ignore_color: Option<IgnoreColor>,
    /// Merge unit cells into spans drawn from this range
    pub cell_span: Option<SampledRange>,
    /// Replace cell colors with draws from this palette
    pub main_palette: Option<Vec<Rgba>>,
    /// Grow cells around the image content
    pub surrounding_cells: Option<SurroundingConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            ignore_color: None,
            cell_span: None,
            main_palette: None,
            surrounding_cells: None,
        }
    }
}

/// Pipeline stage reported to build observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Averaging image rectangles into unit cells
    Sampling,
    /// Merging unit cells into spans
    Merging,
    /// Growing surrounding cells
    Growing,
}

// Fresh sampler state for one run
struct Stages {
    cells: ImageCellSampler,
    span: Option<SpanMerger>,
    surrounding: Option<SurroundingCellGrower>,
}

/// Single entry point turning pixel buffers into dot grids
#[derive(Debug, Clone)]
pub struct GridBuilder {
    config: GeneratorConfig,
}

impl GridBuilder {
    /// Create a builder, rejecting invalid sampler configuration up front
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any stage cannot be constructed
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let builder = Self { config };
        builder.stages()?;
        Ok(builder)
    }

    /// Configuration the builder runs with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of stages a build runs
    pub const fn stage_count(&self) -> usize {
        1 + self.config.cell_span.is_some() as usize
            + self.config.surrounding_cells.is_some() as usize
    }

    fn stages(&self) -> Result<Stages> {
        let config = &self.config;
        let palette = config
            .main_palette
            .clone()
            .map(|colors| PaletteSampler::new(config.seed, colors))
            .transpose()?;
        let cells = ImageCellSampler::new(config.rows, config.columns)?
            .with_ignore_color(config.ignore_color)
            .with_palette(palette);
        let span = config
            .cell_span
            .as_ref()
            .map(|range| SpanMerger::new(config.seed, range))
            .transpose()?;
        let surrounding = config
            .surrounding_cells
            .as_ref()
            .map(|surrounding| SurroundingCellGrower::new(config.seed, surrounding))
            .transpose()?;
        Ok(Stages {
            cells,
            span,
            surrounding,
        })
    }

    /// Run the full pipeline on `pixels`
    ///
    /// # Errors
    ///
    /// Propagates sampler failures and grid invariant violations
    pub fn build(&self, pixels: &PixelBuffer) -> Result<Grid> {
        self.build_observed(pixels, |_| {})
    }

    /// Run the full pipeline, reporting each stage before it starts
    ///
    /// # Errors
    ///
    /// Propagates sampler failures and grid invariant violations
    pub fn build_observed<F>(&self, pixels: &PixelBuffer, mut observer: F) -> Result<Grid>
    where
        F: FnMut(Stage),
    {
        let mut stages = self.stages()?;

        observer(Stage::Sampling);
        let mut grid = stages.cells.sample(pixels)?;

        if let Some(merger) = stages.span.as_mut() {
            observer(Stage::Merging);
            grid = merger.merge(&grid)?;
        }

        if let Some(grower) = stages.surrounding.as_mut() {
            observer(Stage::Growing);
            grid = grower.grow(&grid)?;
        }

        grid.validate()?;
        info!(
            "built {} cells over {} rows from {}x{} image (seed {})",
            grid.cell_count(),
            grid.row_count(),
            pixels.width(),
            pixels.height(),
            self.config.seed
        );
        Ok(grid)
    }

    /// Run the full pipeline and encode colors as hex
    ///
    /// # Errors
    ///
    /// See [`Self::build`]
    pub fn build_encoded(&self, pixels: &PixelBuffer) -> Result<Vec<Vec<EncodedCell>>> {
        let grid = self.build(pixels)?;
        debug!("encoding {} rows", grid.row_count());
        Ok(grid.encode())
    }
}
