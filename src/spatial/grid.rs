//! Row-ordered cell grid and the occupancy set used while growing it
//!
//! Rows are kept sorted by `x` with no two cells sharing a column, so every
//! mutation goes through [`Grid::insert_cell`] or whole-row construction.

use crate::io::error::{Result, invariant_error};
use crate::spatial::cell::{Cell, EncodedCell};
use std::collections::HashSet;

/// Ordered rows of cells, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with `row_count` empty rows
    pub fn with_rows(row_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); row_count],
        }
    }

    /// Wrap pre-built rows
    pub const fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Consume the grid and return its rows
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Number of rows, including empty ones
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Insert `count` empty rows at the top, shifting every cell down
    pub fn prepend_rows(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let shift = count as i32;
        for cell in self.rows.iter_mut().flatten() {
            cell.y += shift;
        }
        let mut rows = Vec::with_capacity(self.rows.len() + count);
        rows.resize_with(count, Vec::new);
        rows.append(&mut self.rows);
        self.rows = rows;
    }

    /// Append `count` empty rows at the bottom
    pub fn append_rows(&mut self, count: usize) {
        self.rows.resize_with(self.rows.len() + count, Vec::new);
    }

    /// Insert a cell into its row, keeping the row sorted by `x`
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error if the cell's row does not exist,
    /// its span is zero, or it overlaps a cell already in the row
    pub fn insert_cell(&mut self, cell: Cell) -> Result<()> {
        if cell.span == 0 {
            return Err(invariant_error("cell insertion", &"span must be at least 1"));
        }
        let row_count = self.rows.len();
        let row = usize::try_from(cell.y)
            .ok()
            .and_then(|y| self.rows.get_mut(y))
            .ok_or_else(|| {
                invariant_error(
                    "cell insertion",
                    &format!("row {} outside grid of {row_count} rows", cell.y),
                )
            })?;

        let position = row.partition_point(|existing| existing.x < cell.x);
        let overlaps_previous = position
            .checked_sub(1)
            .and_then(|i| row.get(i))
            .is_some_and(|previous| previous.end() > cell.x);
        let overlaps_next = row.get(position).is_some_and(|next| next.x < cell.end());
        if overlaps_previous || overlaps_next {
            return Err(invariant_error(
                "cell insertion",
                &format!("cell at ({}, {}) overlaps its row", cell.x, cell.y),
            ));
        }

        row.insert(position, cell);
        Ok(())
    }

    /// Check span, ordering and overlap rules for every row
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error describing the first violation
    pub fn validate(&self) -> Result<()> {
        for (index, row) in self.rows.iter().enumerate() {
            if let Some(cell) = row.iter().find(|cell| cell.span == 0) {
                return Err(invariant_error(
                    "grid validation",
                    &format!("zero span at ({}, {})", cell.x, cell.y),
                ));
            }
            for pair in row.windows(2) {
                if let [left, right] = pair {
                    if left.end() > right.x {
                        return Err(invariant_error(
                            "grid validation",
                            &format!("row {index} has overlapping or unsorted cells"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Smallest first column and largest end column over all cells
    pub fn column_bounds(&self) -> Option<(i32, i32)> {
        self.cells().fold(None, |bounds, cell| match bounds {
            None => Some((cell.x, cell.end())),
            Some((min, max)) => Some((min.min(cell.x), max.max(cell.end()))),
        })
    }

    /// Rows of exported `[x, y, span, color]` tuples
    pub fn encode(&self) -> Vec<Vec<EncodedCell>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::encode).collect())
            .collect()
    }

    /// Rebuild a grid from exported rows
    pub fn decode(rows: Vec<Vec<EncodedCell>>) -> Self {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    }
}

/// Sparse set of `(x, y)` coordinates covered by placed cells
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    occupied: HashSet<(i32, i32)>,
}

impl Occupancy {
    /// Occupancy of every cell already in `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        let mut occupancy = Self::default();
        for cell in grid.cells() {
            occupancy.mark(cell);
        }
        occupancy
    }

    /// Mark every column covered by `cell`
    pub fn mark(&mut self, cell: &Cell) {
        for x in cell.columns() {
            self.occupied.insert((x, cell.y));
        }
    }

    /// Whether `(x, y)` is covered
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.occupied.contains(&(x, y))
    }

    /// Number of covered coordinates
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Whether nothing is covered
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}
