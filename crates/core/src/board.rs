//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of locked cell values stored in a flat array for
//! cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with a negative y sit above the visible grid: pieces may overlap them
//! right after spawning, so they count as passable.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows (top row first).
    pub fn from_rows(rows: &[[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may NOT go to (x, y).
    ///
    /// Columns outside the board and rows below the floor block. Rows above the
    /// top (`y < 0`) never block as long as the column is in range.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        match self.get(x, y) {
            Some(cell) => cell != EMPTY_CELL,
            None => true,
        }
    }

    /// Write `value` into every listed cell.
    ///
    /// Callers check legality first; cells outside the grid are skipped.
    pub fn lock(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, value: Cell) {
        for (x, y) in cells {
            self.set(x, y, value);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are compacted bottom-up with a read and a write cursor, so a row
    /// that shifts into a cleared slot is always examined and adjacent full
    /// rows are all removed. Empty rows refill the top; the row count never
    /// changes.
    pub fn sweep_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.cells
                    .copy_within(read_y * WIDTH..(read_y + 1) * WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(EMPTY_CELL);
        cleared
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a 2D array (render contract export).
    pub fn write_u8_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
