//! Snapshot module - plain copyable view of a session for renderers

use crate::piece::Tetromino;
use crate::shapes::{spawn_shape, ShapeMatrix};
use crate::types::{PieceKind, SessionStatus, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind(),
            shape: *value.shape(),
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise `PieceKind::index() + 1`
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub status: SessionStatus,
    pub episode: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.status == SessionStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn playable(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Piece kind locked at `(x, y)`, if any.
    pub fn locked_kind(&self, x: usize, y: usize) -> Option<PieceKind> {
        let v = *self.board.get(y)?.get(x)?;
        v.checked_sub(1).and_then(|i| PieceKind::from_index(i as u32))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                shape: spawn_shape(PieceKind::I),
                x: 0,
                y: 0,
            },
            next: PieceKind::I,
            status: SessionStatus::Active,
            episode: 0,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
        }
    }
}
