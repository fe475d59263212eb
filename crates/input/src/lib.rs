//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press yields at most one action; there is no auto-repeat handling here.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
