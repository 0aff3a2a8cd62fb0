//! Host-facing game session
//!
//! Wraps the pure simulation with everything the host injects: the obstacle
//! RNG, the key/value store and an optional sound sink. Side effects
//! (persisting a new best score, sound cues) happen here after each call,
//! never inside the simulation.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{self, SoundCue, SoundSink};
use crate::consts::MAX_PENDING_EVENTS;
use crate::persistence::{self, Storage};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, GameStatus, UnitRandom};
use crate::tuning::GameConfig;

/// One play session plus its collaborators
pub struct Session<S: Storage> {
    config: GameConfig,
    state: GameState,
    rng: Box<dyn UnitRandom>,
    storage: S,
    settings: Settings,
    sound: Option<Box<dyn SoundSink>>,
    /// Events already handled, waiting for the host to drain (oldest first)
    pending: VecDeque<GameEvent>,
}

impl<S: Storage> Session<S> {
    /// Create an idle session with a seeded PCG obstacle generator
    pub fn new(config: GameConfig, storage: S, seed: u64) -> Self {
        Self::with_random(config, storage, Box::new(Pcg32::seed_from_u64(seed)))
    }

    /// Create an idle session with a custom randomness source
    pub fn with_random(config: GameConfig, storage: S, rng: Box<dyn UnitRandom>) -> Self {
        let best_score = persistence::load_best_score(&storage);
        let settings = Settings::load(&storage);
        log::info!(
            "New session {}x{} ({} profile, best {})",
            config.screen_width,
            config.screen_height,
            config.profile.as_str(),
            best_score
        );
        Self {
            state: GameState::new(&config, best_score),
            config,
            rng,
            storage,
            settings,
            sound: None,
            pending: VecDeque::new(),
        }
    }

    /// Attach a sound sink
    pub fn with_sound(mut self, sink: impl SoundSink + 'static) -> Self {
        self.sound = Some(Box::new(sink));
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Bee is falling fast (for hosts that poll instead of using events)
    pub fn is_falling_fast(&self) -> bool {
        self.state.is_falling_fast(&self.config)
    }

    pub fn start(&mut self) -> bool {
        let started = sim::start(&mut self.state);
        self.dispatch();
        started
    }

    pub fn jump(&mut self) -> bool {
        let jumped = sim::jump(&mut self.state, &self.config);
        self.dispatch();
        jumped
    }

    pub fn restart(&mut self) {
        sim::restart(&mut self.state, &self.config);
        self.dispatch();
    }

    /// Advance one frame
    pub fn tick(&mut self) -> GameStatus {
        let status = sim::tick(&mut self.state, &self.config, &mut *self.rng);
        self.dispatch();
        status
    }

    /// Replace the session for a new play field size
    ///
    /// The old run is discarded (back to idle); the best score carries over.
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        if screen_width == self.config.screen_width && screen_height == self.config.screen_height {
            return;
        }
        if self.state.status == GameStatus::Started && self.settings.sound_enabled {
            self.play(SoundCue::StopFalling);
            self.play(SoundCue::StopGameLoop);
        }
        self.config = self.config.resized(screen_width, screen_height);
        self.state = GameState::new(&self.config, self.state.best_score);
        log::info!("Session resized to {}x{}", screen_width, screen_height);
    }

    /// Pick up a best score written to the store by someone else
    pub fn sync_best_score(&mut self) {
        let stored = persistence::load_best_score(&self.storage);
        if stored > self.state.best_score {
            log::info!("Best score updated externally ({} -> {})", self.state.best_score, stored);
            self.state.best_score = stored;
        }
    }

    /// Toggle sound cues and persist the choice
    ///
    /// Cues are only sent when the flag actually changes.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        let was_enabled = self.settings.sound_enabled;
        if was_enabled && !enabled {
            self.play(SoundCue::StopFalling);
            self.play(SoundCue::StopGameLoop);
        }
        self.settings.sound_enabled = enabled;
        self.settings.save(&mut self.storage);
        if enabled && !was_enabled && self.state.status == GameStatus::Started {
            self.play(SoundCue::GameLoop);
        }
    }

    /// Take all events since the last drain
    ///
    /// Hosts that never drain lose nothing but history: only the newest
    /// [`MAX_PENDING_EVENTS`] are kept.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    /// Apply side effects for fresh simulation events
    fn dispatch(&mut self) {
        for event in self.state.drain_events() {
            if let GameEvent::NewBestScore { score } = event {
                persistence::save_best_score(&mut self.storage, score);
            }
            if self.settings.sound_enabled {
                for cue in audio::cues_for(&event) {
                    self.play(*cue);
                }
            }
            if self.pending.len() == MAX_PENDING_EVENTS {
                self.pending.pop_front();
            }
            self.pending.push_back(event);
        }
    }

    fn play(&mut self, cue: SoundCue) {
        if let Some(sink) = self.sound.as_mut() {
            sink.play(cue);
        }
    }
}
