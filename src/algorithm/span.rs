//! Merging runs of adjacent unit cells into wider spanned cells

use crate::algorithm::range::SampledRange;
use crate::io::error::Result;
use crate::sampling::WeightedSampler;
use crate::spatial::color::middleweight_color;
use crate::spatial::{Cell, Grid};
use log::debug;

/// Merges unit cells using a span sampler biased towards the configured mean
#[derive(Debug, Clone)]
pub struct SpanMerger {
    sampler: WeightedSampler<u32>,
}

impl SpanMerger {
    /// Create a merger drawing spans from `range`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the range is empty or starts below 1
    pub fn new(seed: u32, range: &SampledRange) -> Result<Self> {
        Ok(Self {
            sampler: range.sampler("cell_span", seed, 1)?,
        })
    }

    /// Merge every row of a unit-cell grid
    ///
    /// Each drawn span is clamped to the contiguous run available at the
    /// cursor, and the sampler weights are updated for the span actually used.
    ///
    /// # Errors
    ///
    /// Propagates sampler failures
    pub fn merge(&mut self, grid: &Grid) -> Result<Grid> {
        let mut rows = Vec::with_capacity(grid.row_count());
        let mut clamped = 0_usize;

        for row in grid.rows() {
            let mut merged = Vec::new();
            let mut cursor = 0;

            while let Some(start) = row.get(cursor) {
                let draw = self.sampler.draw_tentative()?;
                let available = contiguous_run(row, cursor);
                let span = draw.value.min(available).max(1);
                if span != draw.value {
                    clamped += 1;
                }
                self.sampler.settle(draw, span)?;

                let consumed = row.get(cursor..cursor + span as usize).unwrap_or_default();
                let color = middleweight_color(consumed.iter().map(|cell| cell.color));
                merged.push(Cell::new(start.x, start.y, span, color));

                cursor += span as usize;
            }

            rows.push(merged);
        }

        let merged = Grid::from_rows(rows);
        debug!(
            "merged {} unit cells into {} cells ({clamped} spans clamped)",
            grid.cell_count(),
            merged.cell_count()
        );
        Ok(merged)
    }

    /// Span sampler state
    pub const fn sampler(&self) -> &WeightedSampler<u32> {
        &self.sampler
    }
}

/// Number of cells from `start` whose columns follow each other without a gap
pub fn contiguous_run(row: &[Cell], start: usize) -> u32 {
    let Some(first) = row.get(start) else {
        return 0;
    };
    row.iter()
        .skip(start)
        .zip(first.x..)
        .take_while(|(cell, expected)| cell.x == *expected)
        .count() as u32
}
