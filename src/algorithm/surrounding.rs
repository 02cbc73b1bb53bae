//! Growth of surrounding cells outward from existing grid content
//!
//! Four samplers cooperate: height decides how many empty rows pad the grid
//! above and below, depth how far each existing cell extends in each
//! direction, span how wide every new cell is, and color variation the
//! signed channel offsets applied to the base surrounding color.
//!
//! Alpha offsets come from the same variation sampler as red, green and
//! blue. `alpha_variation` only narrows the drawn alpha offset to
//! `±alpha_variation` and never opens a separate draw stream.
//!
//! Draw order is part of the output: cells are visited row by row, left to
//! right, and each cell extends up, right, down, then left.

use crate::algorithm::range::SampledRange;
use crate::io::error::Result;
use crate::sampling::{SamplerOptions, WeightedSampler};
use crate::spatial::{Cell, Grid, Occupancy, Rgba};
use log::debug;

/// Direction a cell extends in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards increasing columns
    Right,
    /// Towards the last row
    Down,
    /// Towards decreasing columns
    Left,
}

impl Direction {
    /// Extension order for every cell
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit step as `(dx, dy)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Column sign along which new cells span
    const fn span_sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Up | Self::Right | Self::Down => 1,
        }
    }
}

/// Parameters of surrounding cell growth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurroundingConfig {
    /// Base color every grown cell varies from
    pub color: Rgba,
    /// Largest absolute offset drawn per channel
    pub color_variation: u8,
    /// Clamp on the alpha offset drawn from the channel variation range
    pub alpha_variation: u8,
    /// Empty rows added above and below the grid
    pub height: SampledRange,
    /// Cells grown per direction from each existing cell
    pub depth: SampledRange,
    /// Width of each grown cell
    pub span: SampledRange,
}

/// Grows new cells around existing ones without overlapping them
#[derive(Debug, Clone)]
pub struct SurroundingCellGrower {
    base_color: Rgba,
    alpha_variation: i32,
    height: WeightedSampler<u32>,
    depth: WeightedSampler<u32>,
    span: WeightedSampler<u32>,
    variation: WeightedSampler<i32>,
}

impl SurroundingCellGrower {
    /// Create the four samplers sharing `seed`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a range is empty or the span range starts below 1
    pub fn new(seed: u32, config: &SurroundingConfig) -> Result<Self> {
        let variation = i32::from(config.color_variation);
        Ok(Self {
            base_color: config.color,
            alpha_variation: i32::from(config.alpha_variation),
            height: config.height.sampler("surrounding_cells.height", seed, 0)?,
            depth: config.depth.sampler("surrounding_cells.depth", seed, 0)?,
            span: config.span.sampler("surrounding_cells.span", seed, 1)?,
            variation: WeightedSampler::new(
                seed,
                (-variation..=variation).collect(),
                SamplerOptions::default(),
            )?,
        })
    }

    /// Pad the grid with rows and grow cells around every existing cell
    ///
    /// Existing cells shift down by the number of rows added on top, so each
    /// cell's `y` stays equal to its row index.
    ///
    /// # Errors
    ///
    /// Propagates sampler failures and grid insertion invariants
    pub fn grow(&mut self, grid: &Grid) -> Result<Grid> {
        let mut grown = grid.clone();

        let top = self.height.generate_next_value()?;
        let bottom = self.height.generate_next_value()?;
        grown.prepend_rows(top as usize);
        grown.append_rows(bottom as usize);

        let mut occupancy = Occupancy::from_grid(&grown);
        let origins: Vec<Cell> = grown.cells().copied().collect();
        let row_count = grown.row_count() as i32;

        for origin in &origins {
            for direction in Direction::ALL {
                self.extend(&mut grown, &mut occupancy, origin, direction, row_count)?;
            }
        }

        debug!(
            "grew {} surrounding cells ({top} rows above, {bottom} below)",
            grown.cell_count() - grid.cell_count()
        );
        Ok(grown)
    }

    /// Extend one cell in one direction and return the effective depth
    fn extend(
        &mut self,
        grid: &mut Grid,
        occupancy: &mut Occupancy,
        origin: &Cell,
        direction: Direction,
        row_count: i32,
    ) -> Result<u32> {
        let draw = self.depth.draw_tentative()?;
        if draw.value == 0 {
            self.depth.commit(draw.index)?;
            return Ok(0);
        }

        let room = match direction {
            Direction::Up => origin.y,
            Direction::Down => row_count - 1 - origin.y,
            Direction::Left | Direction::Right => i32::MAX,
        };
        let depth = draw.value.min(u32::try_from(room).unwrap_or(0));

        let (_, dy) = direction.offset();
        let mut anchor = match direction {
            Direction::Right => origin.end(),
            Direction::Left => origin.x - 1,
            Direction::Up | Direction::Down => origin.x,
        };
        let mut effective = 0;

        for step in 1..=depth {
            let y = origin.y + dy * step as i32;
            if occupancy.is_occupied(anchor, y) {
                break;
            }

            let cell = self.place(occupancy, anchor, y, direction)?;
            grid.insert_cell(cell)?;
            occupancy.mark(&cell);
            effective = step;

            match direction {
                Direction::Right => anchor = cell.end(),
                Direction::Left => anchor = cell.x - 1,
                Direction::Up | Direction::Down => {}
            }
        }

        self.depth.settle(draw, effective)?;
        Ok(effective)
    }

    /// Build a cell anchored at `(anchor, y)` that fits before the next occupied column
    fn place(
        &mut self,
        occupancy: &Occupancy,
        anchor: i32,
        y: i32,
        direction: Direction,
    ) -> Result<Cell> {
        let sign = direction.span_sign();
        let draw = self.span.draw_tentative()?;
        let span = (1..draw.value)
            .find(|&offset| occupancy.is_occupied(anchor + sign * offset as i32, y))
            .unwrap_or(draw.value);
        self.span.settle(draw, span)?;

        let color = self.next_color()?;
        let x = if sign < 0 {
            anchor - span as i32 + 1
        } else {
            anchor
        };
        Ok(Cell::new(x, y, span, color))
    }

    /// Base color shifted by four drawn offsets (red, green, blue, alpha)
    fn next_color(&mut self) -> Result<Rgba> {
        let mut offsets = [0; 4];
        for offset in &mut offsets {
            *offset = self.variation.generate_next_value()?;
        }
        if let Some(alpha) = offsets.get_mut(3) {
            *alpha = (*alpha).clamp(-self.alpha_variation, self.alpha_variation);
        }
        Ok(self.base_color.offset(offsets))
    }

    /// Depth sampler state
    pub const fn depth_sampler(&self) -> &WeightedSampler<u32> {
        &self.depth
    }

    /// Span sampler state
    pub const fn span_sampler(&self) -> &WeightedSampler<u32> {
        &self.span
    }

    /// Channel offset sampler state, shared by all four channels
    pub const fn variation_sampler(&self) -> &WeightedSampler<i32> {
        &self.variation
    }
}
