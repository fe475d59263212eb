//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single clear pass
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
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

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and drop the rows above into the gap.
    ///
    /// Rows are compacted bottom-up with a two-pointer pass; the vacated rows
    /// at the top are emptied. Returns the removed row indices, bottom first.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Remove full rows and return how many were removed.
    pub fn check_and_clear_lines(&mut self) -> u32 {
        let cleared = self.clear_full_rows();
        if !cleared.is_empty() {
            tracing::debug!(rows = ?cleared, "cleared full rows");
        }
        cleared.len() as u32
    }

    /// Write a piece into the board at its current anchor, then clear lines.
    ///
    /// The caller guarantees the piece is in a valid position. Cells above the
    /// top edge are not representable and are skipped. Returns the number of
    /// lines cleared.
    pub fn lock(&mut self, piece: &Tetromino) -> u32 {
        debug_assert!(piece.is_valid_position(self), "locking an invalid piece");

        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            let written = self.set(x, y, Some(piece.kind()));
            debug_assert!(written, "piece cell ({x}, {y}) outside board");
        }

        self.check_and_clear_lines()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_HEIGHT as usize)
            .map(|y| self.row(y).to_vec())
            .collect()
    }

    /// Write the board as a `u8` grid: 0 = empty, `kind.index() + 1` otherwise.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.index() as u8 + 1,
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
