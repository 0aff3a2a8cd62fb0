//! Sound cues derived from simulation events
//!
//! Playback is the host's job. The core only says which cue fits each
//! [`GameEvent`]; a [`SoundSink`] turns cues into noise.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Bee flapped
    Jump,
    /// Bee started falling fast
    Falling,
    /// Cut the falling sound short
    StopFalling,
    /// Background loop while playing
    GameLoop,
    StopGameLoop,
    /// Crashed or fell off the bottom
    GameOver,
    /// Cleared the last level
    LevelComplete,
}

/// Receiver for sound cues, implemented by the host's audio layer
///
/// Must not block; failures stay inside the sink.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Cues to play for an event, in order
pub fn cues_for(event: &GameEvent) -> &'static [SoundCue] {
    match event {
        GameEvent::Started | GameEvent::Restarted => &[SoundCue::GameLoop],
        GameEvent::Jumped => &[SoundCue::StopFalling, SoundCue::Jump],
        GameEvent::FallingFast => &[SoundCue::Falling],
        GameEvent::GameOver { .. } => &[
            SoundCue::StopFalling,
            SoundCue::StopGameLoop,
            SoundCue::GameOver,
        ],
        GameEvent::Completed { .. } => &[
            SoundCue::StopFalling,
            SoundCue::StopGameLoop,
            SoundCue::LevelComplete,
        ],
        GameEvent::Scored { .. } | GameEvent::LevelUp { .. } | GameEvent::NewBestScore { .. } => {
            &[]
        }
    }
}

/// Sink that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("Sound cue: {:?}", cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_stops_falling_first() {
        assert_eq!(
            cues_for(&GameEvent::Jumped),
            &[SoundCue::StopFalling, SoundCue::Jump]
        );
    }

    #[test]
    fn test_terminal_events_end_loop() {
        for event in [
            GameEvent::GameOver { score: 1 },
            GameEvent::Completed { score: 5 },
        ] {
            assert!(cues_for(&event).contains(&SoundCue::StopGameLoop));
        }
        assert_eq!(
            cues_for(&GameEvent::Completed { score: 5 }).last(),
            Some(&SoundCue::LevelComplete)
        );
    }

    #[test]
    fn test_silent_events() {
        assert!(cues_for(&GameEvent::Scored { score: 1 }).is_empty());
        assert!(cues_for(&GameEvent::NewBestScore { score: 1 }).is_empty());
    }
}
