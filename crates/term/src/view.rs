//! Frame composition: maps game state into a grid of owner-tagged cells.
//!
//! This module is pure (no I/O) so it can be unit-tested. Grounded cells
//! are painted first, falling shapes on top - a falling shape passing in
//! front of its own grounded debris draws as the shape.

use multris_core::Game;
use multris_types::Cell;

/// One composed frame: every visible cell with its owning player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Frame {
    /// Compose a frame from the current game state.
    pub fn compose(game: &Game) -> Self {
        let map = game.map();
        let (width, height) = (map.width(), map.height());
        let mut cells = vec![None; width as usize * height as usize];

        for row in 0..height as i8 {
            for col in 0..width as i8 {
                if let Some(player) = map.player_at(row, col) {
                    cells[row as usize * width as usize + col as usize] = Some(player);
                }
            }
        }

        game.for_each_shape(|shape| {
            for (dx, dy) in shape.cells() {
                let row = shape.row + dy;
                let col = shape.col + dx;
                // Cells above the top of the grid are simply not drawn.
                if row >= 0 && row < height as i8 && col >= 0 && col < width as i8 {
                    cells[row as usize * width as usize + col as usize] = Some(shape.player);
                }
            }
        });

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The owner drawn at `(row, col)`, or `None` for an empty or
    /// out-of-range cell.
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row as usize * self.width as usize + col as usize]
    }
}
