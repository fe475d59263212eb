//! Sound effects for the game.
//!
//! - [`synth`]: procedural synthesis of the six cues (pure, no I/O)
//! - [`cues`]: which `SessionEvent` plays which cue
//! - [`player`]: the [`AudioSink`] seam, a muted sink, and device playback
//!   through `rodio` when the `playback` feature is enabled
//!
//! Audio failures never stop the game: a missing device degrades to silence.

pub mod cues;
pub mod player;
pub mod synth;

pub use blockfall_types as types;

pub use cues::cue_for;
#[cfg(feature = "playback")]
pub use player::DevicePlayer;
pub use player::{open_sink, play_events, AudioSink, CueBank, CueLog, Muted};
pub use synth::{synthesize, CueParams, SoundCue, SAMPLE_RATE};
