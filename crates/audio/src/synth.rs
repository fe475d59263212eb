//! Procedural synthesis of the game's sound cues.
//!
//! Every cue is a short mono buffer of `f32` samples in `[-1, 1]`.

use std::f32::consts::TAU;

/// Sample rate used for all cues.
pub const SAMPLE_RATE: u32 = 44_100;

/// Length of the linear fade applied to both ends of a cue, in seconds.
pub const FADE_SECS: f32 = 0.1;

/// One of the six sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Move,
    Rotate,
    Drop,
    Clear,
    LevelUp,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::Move,
        SoundCue::Rotate,
        SoundCue::Drop,
        SoundCue::Clear,
        SoundCue::LevelUp,
        SoundCue::GameOver,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SoundCue::Move => "move",
            SoundCue::Rotate => "rotate",
            SoundCue::Drop => "drop",
            SoundCue::Clear => "clear",
            SoundCue::LevelUp => "levelup",
            SoundCue::GameOver => "gameover",
        }
    }

    pub fn params(self) -> CueParams {
        let (freq_hz, duration_secs, volume) = match self {
            SoundCue::Move => (220.0, 0.10, 0.4),
            SoundCue::Rotate => (330.0, 0.15, 0.4),
            SoundCue::Drop => (440.0, 0.20, 0.5),
            SoundCue::Clear => (523.0, 0.30, 0.6),
            SoundCue::LevelUp => (660.0, 0.50, 0.6),
            SoundCue::GameOver => (220.0, 1.00, 0.7),
        };
        CueParams {
            freq_hz,
            duration_secs,
            volume,
        }
    }
}

/// Base frequency, length and loudness of a cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueParams {
    pub freq_hz: f32,
    pub duration_secs: f32,
    pub volume: f32,
}

/// Render `cue` at `sample_rate`.
pub fn synthesize(cue: SoundCue, sample_rate: u32) -> Vec<f32> {
    let CueParams {
        freq_hz: f,
        duration_secs,
        volume,
    } = cue.params();
    let len = (sample_rate as f32 * duration_secs) as usize;
    let rate = sample_rate as f32;
    let t = |i: usize| i as f32 / rate;

    let mut samples: Vec<f32> = match cue {
        SoundCue::Move => (0..len).map(|i| 0.5 * (TAU * f * t(i)).sin()).collect(),
        SoundCue::Rotate => sweep(len, rate, f, f * 1.5, 0.5),
        SoundCue::Drop => sweep(len, rate, f * 1.5, f * 0.8, 0.7),
        SoundCue::Clear => (0..len)
            .map(|i| {
                let p = TAU * f * t(i);
                0.3 * p.sin() + 0.2 * (p * 1.5).sin() + 0.1 * (p * 2.0).sin()
            })
            .collect(),
        SoundCue::LevelUp => steps(len, rate, 5, |i| f * (1.0 + 0.2 * i as f32)),
        SoundCue::GameOver => steps(len, rate, 8, |i| f * (1.0 - 0.1 * i as f32)),
    };

    apply_fade(&mut samples, (FADE_SECS * rate) as usize);
    for s in &mut samples {
        *s *= volume;
    }
    samples
}

/// Frequency ramps linearly from `from` to `to` over the buffer.
fn sweep(len: usize, rate: f32, from: f32, to: f32, amp: f32) -> Vec<f32> {
    let span = len.saturating_sub(1).max(1) as f32;
    (0..len)
        .map(|i| {
            let freq = from + (to - from) * (i as f32 / span);
            amp * (TAU * freq * (i as f32 / rate)).sin()
        })
        .collect()
}

/// `count` equal segments of constant frequency. Samples past the last full
/// segment stay silent.
fn steps(len: usize, rate: f32, count: usize, freq: impl Fn(usize) -> f32) -> Vec<f32> {
    let mut out = vec![0.0; len];
    let seg = len / count;
    for step in 0..count {
        let f = freq(step);
        for i in step * seg..(step + 1) * seg {
            out[i] = 0.5 * (TAU * f * (i as f32 / rate)).sin();
        }
    }
    out
}

/// Linear fade-in and fade-out of `fade` samples each, applied only when the
/// buffer is longer than both fades together.
fn apply_fade(samples: &mut [f32], fade: usize) {
    let len = samples.len();
    if fade == 0 || len <= 2 * fade {
        return;
    }
    let last = (fade - 1).max(1) as f32;
    for i in 0..fade {
        let gain = i as f32 / last;
        samples[i] *= gain;
        samples[len - 1 - i] *= gain;
    }
}
