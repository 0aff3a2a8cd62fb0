//! Bee Flap - a side-scrolling flapping game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, scoring)
//! - `tuning`: Platform profiles and per-level difficulty table
//! - `platform`: Platform detection and profile selection
//! - `persistence`: Key/value storage port with memory, file and browser backends
//! - `audio`: Sound cues derived from simulation events
//! - `session`: Host-facing engine wiring state, RNG, storage and sound together

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use audio::{SoundCue, SoundSink};
pub use persistence::{MemoryStorage, Storage};
pub use platform::Platform;
pub use session::Session;
pub use settings::Settings;
pub use tuning::{GameConfig, LevelTuning, Profile};

/// Game configuration constants
pub mod consts {
    /// Bee collision radius (all profiles)
    pub const BEE_RADIUS: f32 = 30.0;
    /// Horizontal width of a pipe pair
    pub const PIPE_WIDTH: f32 = 150.0;

    /// Highest difficulty level
    pub const MAX_LEVEL: u32 = 5;

    /// Velocity is "falling fast" past this fraction of the max velocity
    pub const FALLING_FAST_DIVISOR: f32 = 1.1;

    /// Storage key for the best score
    pub const SCORE_KEY: &str = "score";
    /// Storage key for the sound toggle
    pub const SOUND_ENABLED_KEY: &str = "sound_enabled";

    /// Undrained host events kept by a session; older ones are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;
}
