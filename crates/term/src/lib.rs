//! Terminal renderer for the game.
//!
//! Rendering is split in two halves: [`game_view`] turns a
//! `core::GameSnapshot` into a framebuffer of styled cells (pure, no I/O),
//! and [`renderer`] flushes that framebuffer to the terminal with crossterm.
//!
//! Board cells are drawn two columns wide by default to compensate for the
//! aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
