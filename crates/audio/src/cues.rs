//! Which session events are audible.

use crate::synth::SoundCue;
use crate::types::SessionEvent;

/// Sound cue for a session event, if it has one.
pub fn cue_for(event: SessionEvent) -> Option<SoundCue> {
    match event {
        SessionEvent::PieceMoved => Some(SoundCue::Move),
        SessionEvent::PieceRotated => Some(SoundCue::Rotate),
        SessionEvent::PieceLocked => Some(SoundCue::Drop),
        SessionEvent::LinesCleared(_) => Some(SoundCue::Clear),
        SessionEvent::LevelUp(_) => Some(SoundCue::LevelUp),
        SessionEvent::GameOver => Some(SoundCue::GameOver),
        SessionEvent::Paused | SessionEvent::Resumed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gameplay_event_has_a_cue() {
        assert_eq!(cue_for(SessionEvent::PieceMoved), Some(SoundCue::Move));
        assert_eq!(cue_for(SessionEvent::PieceRotated), Some(SoundCue::Rotate));
        assert_eq!(cue_for(SessionEvent::PieceLocked), Some(SoundCue::Drop));
        assert_eq!(cue_for(SessionEvent::LinesCleared(4)), Some(SoundCue::Clear));
        assert_eq!(cue_for(SessionEvent::LevelUp(2)), Some(SoundCue::LevelUp));
        assert_eq!(cue_for(SessionEvent::GameOver), Some(SoundCue::GameOver));
    }

    #[test]
    fn pause_and_resume_are_silent() {
        assert_eq!(cue_for(SessionEvent::Paused), None);
        assert_eq!(cue_for(SessionEvent::Resumed), None);
    }
}
