//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed and the same clock readings produce identical games
//! - **Testable**: The random source and the clock are injected
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino shape matrices, their colors, and matrix rotation
//! - [`piece`]: the falling piece: movement, rotation, and the validity check
//! - [`board`]: 10x20 game board with locking and line clearing
//! - [`session`]: the game state machine: gravity, locking, scoring, levels
//! - [`scoring`]: score, level and gravity formulas
//! - [`rng`]: injectable random source with a seeded LCG
//! - [`clock`]: monotonic clock abstraction
//! - [`snapshot`]: copyable session view for renderers
//!
//! # Game Rules
//!
//! - **Random pieces**: each new piece is an independent uniform draw (no bag)
//! - **Naive rotation**: clockwise matrix rotation in place, no wall kicks
//! - **Immediate lock**: a piece locks as soon as a downward step fails
//! - **Scoring**: `n² × 100 × level` for `n` lines cleared at once
//! - **Levels**: one level per 10 lines; gravity speeds up by 50ms per level
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::{GameAction, SessionEvent};
//!
//! let mut game = GameSession::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.take_events().contains(&SessionEvent::PieceLocked));
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](session::GameSession::tick) once per loop
//! iteration with a monotonic clock reading in milliseconds. Gravity fires
//! when more than the level's fall interval has passed since the last step.

pub mod board;
pub mod clock;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use piece::Tetromino;
pub use rng::{random_kind, Randomizer, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score};
pub use session::GameSession;
pub use shapes::{piece_color, spawn_shape, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
