//! Grid module - the lane playfield.
//!
//! The grid is a `rows x columns` matrix of lane cells stored as a flat
//! array in row-major order for cache locality. Row 0 is the far end where
//! new traffic appears; row `rows - 1` is the player row. Exactly one cell
//! of the player row holds the player token (or its crash marker after a
//! collision).
//!
//! Grids are only ever mutated by the engine in this crate; everything the
//! outside world gets is read access.

use thiserror::Error;
use tui_dodger_types::CellState;

/// Construction-time grid errors.
///
/// Transitions never run against a malformed grid; dimensions are rejected
/// up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs a spawn row and a player row at minimum.
    #[error("grid needs at least 2 rows, got {rows}")]
    TooFewRows { rows: usize },
    /// A single-lane road has nowhere to dodge to.
    #[error("grid needs at least 2 columns, got {columns}")]
    TooFewColumns { columns: usize },
    /// Explicit row data must be rectangular.
    #[error("grid rows must all be {expected} cells wide, found {found}")]
    RaggedRow { expected: usize, found: usize },
}

/// Validated grid dimensions.
///
/// Holding a `GridDims` proves `rows >= 2` and `columns >= 2`, so grid
/// construction from one is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    rows: usize,
    columns: usize,
}

impl GridDims {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows < 2 {
            return Err(GridError::TooFewRows { rows });
        }
        if columns < 2 {
            return Err(GridError::TooFewColumns { columns });
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// The lane playfield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    dims: GridDims,
    /// Flat array of cells, row-major order (`row * columns + column`).
    cells: Vec<CellState>,
}

impl GridState {
    /// Create a fresh grid: all lanes empty, player on the center lane of
    /// the last row.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        Ok(Self::with_dims(GridDims::new(rows, columns)?))
    }

    /// Create a fresh grid from already-validated dimensions.
    pub fn with_dims(dims: GridDims) -> Self {
        let mut cells = vec![CellState::Empty; dims.rows * dims.columns];
        let center = dims.columns / 2;
        cells[(dims.rows - 1) * dims.columns + center] = CellState::Player;
        Self { dims, cells }
    }

    /// Build a grid from explicit row data (tests and scripted scenarios).
    ///
    /// Only the shape is validated; the caller is trusted to supply a
    /// sensible cell layout.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        let dims = GridDims::new(row_count, columns)?;

        let mut cells = Vec::with_capacity(row_count * columns);
        for row in &rows {
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    expected: columns,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { dims, cells })
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Index of the player row (the last row).
    pub fn player_row_index(&self) -> usize {
        self.dims.rows - 1
    }

    /// Index of the row resolved for scoring/collision on each scroll tick.
    pub fn penultimate_row_index(&self) -> usize {
        self.dims.rows - 2
    }

    /// Get the cell at `(row, column)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<CellState> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// The cells of one row. `row` must be in `0..rows()`.
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.dims.columns;
        &self.cells[start..start + self.dims.columns]
    }

    /// The player row (last row) cells.
    pub fn player_row(&self) -> &[CellState] {
        self.row(self.player_row_index())
    }

    /// Column of the player token, if present.
    ///
    /// Returns `None` after a collision has replaced the token with its
    /// crash marker, or if the invariant was violated.
    pub fn player_column_index(&self) -> Option<usize> {
        self.player_row()
            .iter()
            .position(|&cell| cell == CellState::Player)
    }

    /// True iff any cell records a collision.
    pub fn has_crashed(&self) -> bool {
        self.cells.contains(&CellState::Crash)
    }

    /// Calculate flat index from `(row, column)` coordinates.
    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.dims.rows || column >= self.dims.columns {
            return None;
        }
        Some(row * self.dims.columns + column)
    }

    /// Set the cell at `(row, column)`. Returns false if out of bounds.
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: CellState) -> bool {
        match self.index(row, column) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Scroll the world one step toward the player.
    ///
    /// Removes the penultimate row, shifts every row above it one step down,
    /// and installs `new_row` at index 0. The player row is untouched.
    /// `new_row` must be `columns` cells wide.
    pub(crate) fn scroll_in(&mut self, new_row: &[CellState]) {
        debug_assert_eq!(new_row.len(), self.dims.columns);

        let width = self.dims.columns;
        let moving_rows = self.dims.rows - 2;
        // Rows 0..rows-2 move to 1..rows-1; copy_within handles the overlap.
        self.cells.copy_within(0..moving_rows * width, width);
        self.cells[..width].copy_from_slice(new_row);
    }

    /// Full cell slice in row-major order (rendering, hashing).
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }
}
