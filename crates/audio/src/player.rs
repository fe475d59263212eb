//! Audio output.
//!
//! Cues are synthesized once up front; playing a cue only hands the cached
//! samples to the sink.

use std::collections::HashMap;

use crate::cues::cue_for;
use crate::synth::{synthesize, SoundCue, SAMPLE_RATE};
use crate::types::SessionEvent;

/// Something that can play a sound cue.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records played cues; useful in tests.
#[derive(Debug, Default, Clone)]
pub struct CueLog {
    pub played: Vec<SoundCue>,
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

/// Play the cue of every event, in order.
pub fn play_events<S: AudioSink + ?Sized>(sink: &mut S, events: &[SessionEvent]) {
    for &event in events {
        if let Some(cue) = cue_for(event) {
            sink.play(cue);
        }
    }
}

/// All six cues rendered at [`SAMPLE_RATE`].
#[derive(Debug, Clone)]
pub struct CueBank {
    samples: HashMap<SoundCue, Vec<f32>>,
}

impl CueBank {
    pub fn new() -> Self {
        let samples = SoundCue::ALL
            .iter()
            .map(|&cue| (cue, synthesize(cue, SAMPLE_RATE)))
            .collect();
        Self { samples }
    }

    pub fn get(&self, cue: SoundCue) -> &[f32] {
        self.samples.get(&cue).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for CueBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "playback")]
pub use device::DevicePlayer;

#[cfg(feature = "playback")]
mod device {
    use anyhow::Result;
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamHandle, Sink};

    use super::{AudioSink, CueBank};
    use crate::synth::{SoundCue, SAMPLE_RATE};

    /// Plays cues on the default output device.
    pub struct DevicePlayer {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        bank: CueBank,
    }

    impl DevicePlayer {
        pub fn open() -> Result<Self> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
                bank: CueBank::new(),
            })
        }
    }

    impl AudioSink for DevicePlayer {
        fn play(&mut self, cue: SoundCue) {
            let sink = match Sink::try_new(&self.handle) {
                Ok(sink) => sink,
                Err(err) => {
                    tracing::warn!(cue = cue.as_str(), error = %err, "audio sink unavailable");
                    return;
                }
            };
            let samples = self.bank.get(cue).to_vec();
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }
}

/// Open the default output device, or fall back to [`Muted`] when playback is
/// disabled, not compiled in, or the device cannot be opened.
pub fn open_sink(mute: bool) -> Box<dyn AudioSink> {
    if mute {
        return Box::new(Muted);
    }

    #[cfg(feature = "playback")]
    {
        match DevicePlayer::open() {
            Ok(player) => return Box::new(player),
            Err(err) => tracing::warn!(error = %err, "audio device unavailable, running muted"),
        }
    }

    #[cfg(not(feature = "playback"))]
    tracing::debug!("built without the playback feature, running muted");

    Box::new(Muted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_events_skips_silent_events() {
        let mut log = CueLog::default();
        play_events(
            &mut log,
            &[
                SessionEvent::Paused,
                SessionEvent::PieceLocked,
                SessionEvent::LinesCleared(2),
                SessionEvent::Resumed,
            ],
        );
        assert_eq!(log.played, vec![SoundCue::Drop, SoundCue::Clear]);
    }

    #[test]
    fn bank_holds_every_cue() {
        let bank = CueBank::new();
        for cue in SoundCue::ALL {
            assert!(!bank.get(cue).is_empty());
        }
    }

    #[test]
    fn muted_sink_when_requested() {
        let mut sink = open_sink(true);
        sink.play(SoundCue::Move);
    }
}
