//! Session module - the game state machine
//!
//! A [`GameSession`] owns the board, the current and next pieces, the random
//! source and all scoring state. It is driven from the outside by two inputs:
//!
//! - [`GameSession::apply_action`] for each discrete player command
//! - [`GameSession::tick`] once per loop iteration with a clock reading
//!
//! and reports what happened through [`SessionEvent`]s drained with
//! [`GameSession::take_events`].
//!
//! States are `Active`, `Paused` and `GameOver`. While paused nothing but
//! resume and quit is accepted and gravity is suspended. Game over accepts
//! only restart and quit.

use crate::board::Board;
use crate::piece::Tetromino;
use crate::rng::{random_kind, Randomizer, SimpleRng};
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, SessionEvent, SessionStatus};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R: Randomizer = SimpleRng> {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    rng: R,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    status: SessionStatus,
    running: bool,
    /// Incremented on every restart.
    episode: u32,
    /// Latest clock reading seen by `tick`.
    now_ms: u64,
    /// Clock reading of the last gravity step, lock, resume or restart.
    last_fall_ms: u64,
    events: Vec<SessionEvent>,
}

impl GameSession<SimpleRng> {
    /// Create a new game with a seeded LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: Randomizer> GameSession<R> {
    /// Create a new game on an empty board.
    pub fn new(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create a game on a prepared board.
    ///
    /// The current and next pieces are drawn as usual. If the current piece
    /// does not fit at its spawn anchor the session starts in `GameOver`.
    pub fn with_board(board: Board, mut rng: R) -> Self {
        let current = Tetromino::spawn(random_kind(&mut rng));
        let next = Tetromino::spawn(random_kind(&mut rng));
        let status = if current.is_valid_position(&board) {
            SessionStatus::Active
        } else {
            SessionStatus::GameOver
        };

        Self {
            board,
            current,
            next,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(1),
            status,
            running: true,
            episode: 0,
            now_ms: 0,
            last_fall_ms: 0,
            events: Vec::with_capacity(8),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == SessionStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    /// False once a quit command has been accepted.
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one player command. Returns whether it had any effect.
    ///
    /// Rejected moves and rotations return `false` and leave the state
    /// untouched.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.running {
            return false;
        }

        match (self.status, action) {
            (_, GameAction::Quit) => {
                tracing::info!(score = self.score, "session quit");
                self.running = false;
                true
            }
            (SessionStatus::Active, GameAction::MoveLeft) => {
                let moved = self.current.move_left(&self.board);
                self.emit_if(moved, SessionEvent::PieceMoved)
            }
            (SessionStatus::Active, GameAction::MoveRight) => {
                let moved = self.current.move_right(&self.board);
                self.emit_if(moved, SessionEvent::PieceMoved)
            }
            (SessionStatus::Active, GameAction::Rotate) => {
                let rotated = self.current.rotate(&self.board);
                self.emit_if(rotated, SessionEvent::PieceRotated)
            }
            (SessionStatus::Active, GameAction::SoftDrop) => {
                if self.current.move_down(&self.board) {
                    self.events.push(SessionEvent::PieceMoved);
                } else {
                    self.lock_current();
                }
                true
            }
            (SessionStatus::Active, GameAction::HardDrop) => {
                let rows = self.current.hard_drop(&self.board);
                tracing::debug!(rows, "hard drop");
                self.lock_current();
                true
            }
            (SessionStatus::Active, GameAction::Pause) => {
                self.status = SessionStatus::Paused;
                self.events.push(SessionEvent::Paused);
                tracing::debug!("paused");
                true
            }
            (SessionStatus::Paused, GameAction::Pause) => {
                self.status = SessionStatus::Active;
                // Time spent paused does not count towards the next gravity step.
                self.last_fall_ms = self.now_ms;
                self.events.push(SessionEvent::Resumed);
                tracing::debug!("resumed");
                true
            }
            (SessionStatus::GameOver, GameAction::Restart) => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    /// Advance gravity to the clock reading `now_ms`.
    ///
    /// When more than the fall interval has elapsed since the last reference
    /// point the current piece moves down one row, or locks if it cannot.
    /// Returns whether a gravity step happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);

        if !self.running || self.status != SessionStatus::Active {
            return false;
        }

        let elapsed = self.now_ms.saturating_sub(self.last_fall_ms);
        if elapsed <= u64::from(self.fall_interval_ms) {
            return false;
        }

        if !self.current.move_down(&self.board) {
            self.lock_current();
        }
        self.last_fall_ms = self.now_ms;
        true
    }

    /// Lock the current piece, score cleared lines and promote the next piece.
    ///
    /// Transitions to `GameOver` when the promoted piece does not fit.
    fn lock_current(&mut self) {
        if self.status != SessionStatus::Active {
            return;
        }

        let cleared = self.board.lock(&self.current);
        self.events.push(SessionEvent::PieceLocked);

        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared, self.level));
            self.events.push(SessionEvent::LinesCleared(cleared));

            let new_level = level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.fall_interval_ms = fall_interval_ms(new_level);
                self.events.push(SessionEvent::LevelUp(new_level));
                tracing::debug!(
                    level = new_level,
                    fall_interval_ms = self.fall_interval_ms,
                    "level up"
                );
            }
        }

        self.current = self.next;
        self.next = Tetromino::spawn(random_kind(&mut self.rng));
        self.last_fall_ms = self.now_ms;

        if !self.current.is_valid_position(&self.board) {
            self.status = SessionStatus::GameOver;
            self.events.push(SessionEvent::GameOver);
            tracing::info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
        }
    }

    /// Reset everything to a fresh game. The random source keeps its state.
    pub fn restart(&mut self) {
        let episode = self.episode.wrapping_add(1);
        self.board = Board::new();
        self.current = Tetromino::spawn(random_kind(&mut self.rng));
        self.next = Tetromino::spawn(random_kind(&mut self.rng));
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(1);
        self.status = SessionStatus::Active;
        self.running = true;
        self.episode = episode;
        self.last_fall_ms = self.now_ms;
        tracing::info!(episode, "restarted");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.current);
        out.next = self.next.kind();
        out.status = self.status;
        out.episode = self.episode;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn emit_if(&mut self, happened: bool, event: SessionEvent) -> bool {
        if happened {
            self.events.push(event);
        }
        happened
    }
}
