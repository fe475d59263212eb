//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, audio cues).
//!
//! # Board Dimensions
//!
//! Playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: horizontally centered for the piece's bounding box, y = 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_INTERVAL_MS` | 500 | Gravity at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 50 | Gravity speed-up per level |
//! | `FALL_INTERVAL_FLOOR_MS` | 50 | Fastest gravity |
//!
//! # Fall Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 450ms |
//! | 5 | 300ms |
//! | 10 | 50ms |
//! | 11+ | 50ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Catalog index <-> kind
//! assert_eq!(PieceKind::from_index(3), Some(PieceKind::O));
//! assert_eq!(PieceKind::O.index(), 3);
//!
//! // Every kind is in the catalog
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (500ms per row)
pub const BASE_FALL_INTERVAL_MS: u32 = 500;

/// Gravity interval reduction per level gained
pub const FALL_INTERVAL_STEP_MS: u32 = 50;

/// Fastest gravity interval, reached at level 10
pub const FALL_INTERVAL_FLOOR_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for a single line at level 1; multi-line clears scale quadratically.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Number of distinct piece kinds in the catalog
pub const PIECE_KIND_COUNT: u32 = 7;

/// The seven tetromino piece kinds, in catalog order
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order. `uniform_choice(7)` indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Kind at catalog position `index`, or `None` if out of range.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Catalog position of this kind.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked by a piece of the given kind (its color tag)
pub type Cell = Option<PieceKind>;

/// Commands delivered by the input router to the game session.
///
/// Each discrete key press maps to at most one action per loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Move piece one cell down; locks the piece if it cannot move
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a new game after game over
    Restart,
    /// End the session
    Quit,
}

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Active,
    Paused,
    GameOver,
}

/// Events the session emits for the presentation layer.
///
/// Each maps to a redraw and/or an audio cue. The core has no knowledge of
/// how they are rendered or sounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player moved the current piece (left, right or one row down).
    PieceMoved,
    /// The current piece rotated.
    PieceRotated,
    /// The current piece was written into the board.
    PieceLocked,
    /// `n > 0` full rows were removed by the last lock.
    LinesCleared(u32),
    /// The level increased to the carried value.
    LevelUp(u32),
    /// The promoted piece could not be placed at its spawn anchor.
    GameOver,
    Paused,
    Resumed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_FALL_INTERVAL_MS, 500);
        assert_eq!(FALL_INTERVAL_STEP_MS, 50);
        assert_eq!(FALL_INTERVAL_FLOOR_MS, 50);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_CLEAR_POINTS, 100);
    }

    #[test]
    fn piece_index_roundtrip_covers_catalog() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i as u32), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(PIECE_KIND_COUNT), None);
        assert_eq!(PieceKind::ALL.len(), PIECE_KIND_COUNT as usize);
    }
}
