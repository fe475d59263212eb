//! Piece module - the falling tetromino
//!
//! A piece is a shape matrix anchored at the top-left of its bounding box in
//! board coordinates. Every movement is tentative: the new position is checked
//! against the board and reverted if invalid.

use crate::board::Board;
use crate::shapes::{piece_color, spawn_shape, ShapeMatrix};
use crate::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece at its spawn anchor: horizontally centered, y = 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    /// Create a piece with an explicit shape and anchor.
    pub fn with_shape(kind: PieceKind, shape: ShapeMatrix, x: i8, y: i8) -> Self {
        Self { kind, shape, x, y }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    pub fn color(&self) -> Rgb {
        piece_color(self.kind)
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check every occupied cell against the board.
    ///
    /// A cell must lie in `0..BOARD_WIDTH` horizontally and above the floor.
    /// Cells above the top edge (y < 0) are exempt from the collision test.
    pub fn is_valid_position(&self, board: &Board) -> bool {
        self.cells().all(|(x, y)| {
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return false;
            }
            y < 0 || board.is_empty(x, y)
        })
    }

    /// Rotate clockwise in place if the rotated shape fits at the same anchor.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let previous = self.shape;
        self.shape = previous.rotate_cw();
        if !self.is_valid_position(board) {
            self.shape = previous;
            return false;
        }
        true
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.try_shift(-1, 0, board)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.try_shift(1, 0, board)
    }

    /// Move one row down. `false` means the piece has landed.
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.try_shift(0, 1, board)
    }

    /// Drop to the lowest valid row. Returns the number of rows travelled.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while self.move_down(board) {
            rows += 1;
        }
        rows
    }

    fn try_shift(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        self.x += dx;
        self.y += dy;
        if !self.is_valid_position(board) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }
        true
    }
}
