//! Shared grid of grounded cells
//!
//! The map only ever changes through grounding and row clearing; everything
//! else is a pure query. Shapes in motion are not represented here at all -
//! collision tests only see cells that some shape already grounded.

use log::debug;
use multris_types::{Cell, Rotation};

use crate::shape::Shape;

/// Fixed-size grid storing, per cell, the player whose block is grounded
/// there. Row-major storage, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl GameMap {
    /// Create an empty grid of the given dimensions.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The player whose block is grounded at `(row, col)`, or `None` for an
    /// empty or out-of-range position.
    pub fn player_at(&self, row: i8, col: i8) -> Cell {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Overwrite a single cell. Returns false if out of range.
    ///
    /// Gameplay never calls this; it exists for scenario setup and tests.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i8 || col >= self.width as i8 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Test whether the shape fits at its own position. See
    /// [`test_shape_at`](Self::test_shape_at).
    pub fn test_shape(&self, shape: &Shape) -> bool {
        self.test_shape_at(shape, shape.row, shape.col, shape.rotation)
    }

    /// Test a hypothetical placement without touching the shape or the grid.
    ///
    /// Every occupied cell must be inside the left, right, and bottom edges
    /// and must not overlap a grounded cell. There is no top bound: cells
    /// above row 0 are always in bounds, so a spawn whose upper cells poke
    /// above the grid still tests valid.
    pub fn test_shape_at(&self, shape: &Shape, row: i8, col: i8, rotation: Rotation) -> bool {
        shape.cells_at(rotation).iter().all(|&(dx, dy)| {
            let c = col + dx;
            let r = row + dy;
            c >= 0
                && c < self.width as i8
                && r < self.height as i8
                && (r < 0 || self.player_at(r, c).is_none())
        })
    }

    /// Move the shape down to the last row where it still fits, then ground
    /// it there.
    ///
    /// If the shape cannot even advance from its current row, the current
    /// row is the final one and it grounds in place. Callers are expected to
    /// have validated the current position with [`test_shape`](Self::test_shape).
    pub fn drop_shape(&mut self, shape: &mut Shape) {
        while self.test_shape_at(shape, shape.row + 1, shape.col, shape.rotation) {
            shape.row += 1;
        }
        self.ground_shape(shape);
    }

    /// Write the shape's cells into the grid, ending its fall.
    ///
    /// Contract call: the position must have been validated via
    /// [`test_shape`](Self::test_shape). Grounding an invalid placement is a
    /// programming error and panics on the out-of-range index.
    pub fn ground_shape(&mut self, shape: &Shape) {
        for (dx, dy) in shape.cells() {
            let row = (shape.row + dy) as usize;
            let col = (shape.col + dx) as usize;
            let idx = row * self.width as usize + col;
            self.cells[idx] = Some(shape.player);
        }
        debug!(
            "grounded {} shape of player {} at row {} col {}",
            shape.kind.as_str(),
            shape.player,
            shape.row,
            shape.col
        );
    }

    /// Clear every completed row, shifting the rows above it down by one and
    /// inserting an empty row at the top. Returns the number of rows cleared.
    ///
    /// Rows are scanned top to bottom; each clear only moves rows above it,
    /// which have already been scanned, so a single pass suffices.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..self.height as usize {
            if self.row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        if cleared > 0 {
            debug!("cleared {cleared} full row(s)");
        }
        cleared
    }

    fn row_full(&self, row: usize) -> bool {
        let start = row * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove one row and shift everything above it down, leaving a fresh
    /// empty row at the top.
    fn clear_row(&mut self, row: usize) {
        let width = self.width as usize;
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            let dst = r * width;
            self.cells.copy_within(src..src + width, dst);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }
}
