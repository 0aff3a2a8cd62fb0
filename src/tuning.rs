//! Data-driven game balance
//!
//! Every numeric constant the simulation reads lives in [`GameConfig`]. The
//! host picks a [`Profile`] before building a session; the simulation itself
//! never branches on platform.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Profile {
    /// Tall phone screens, heavy gravity, tighter gap
    Android,
    /// Tall phone screens, faster pipes
    Ios,
    /// Wide windows and browsers
    #[default]
    Desktop,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Android => "Android",
            Profile::Ios => "iOS",
            Profile::Desktop => "Desktop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "android" => Some(Profile::Android),
            "ios" => Some(Profile::Ios),
            "desktop" | "web" | "wide" => Some(Profile::Desktop),
            _ => None,
        }
    }

    /// Downward acceleration per tick
    pub fn gravity(&self) -> f32 {
        match self {
            Profile::Android | Profile::Ios => 0.8,
            Profile::Desktop => 0.25,
        }
    }

    /// Velocity assigned on jump (negative is up)
    pub fn jump_impulse(&self) -> f32 {
        match self {
            Profile::Android | Profile::Ios => -12.0,
            Profile::Desktop => -8.0,
        }
    }

    pub fn max_velocity(&self) -> f32 {
        match self {
            Profile::Android => 25.0,
            Profile::Ios | Profile::Desktop => 20.0,
        }
    }

    /// Leftward pipe scroll per tick at level 1
    pub fn pipe_velocity(&self) -> f32 {
        match self {
            Profile::Android => 5.0,
            Profile::Ios => 7.0,
            Profile::Desktop => 2.5,
        }
    }

    /// Vertical passage size at level 1
    pub fn gap_size(&self) -> f32 {
        match self {
            Profile::Android => 250.0,
            Profile::Ios | Profile::Desktop => 300.0,
        }
    }
}

/// One row of the difficulty table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSpec {
    /// Points needed to leave this level (or to complete the run at the top level)
    pub points: u32,
    pub gravity_scale: f32,
    pub velocity_scale: f32,
    pub gap_scale: f32,
}

/// Difficulty table, level 1 first
pub const LEVEL_TABLE: [LevelSpec; MAX_LEVEL as usize] = [
    LevelSpec {
        points: 1,
        gravity_scale: 1.0,
        velocity_scale: 1.0,
        gap_scale: 1.0,
    },
    LevelSpec {
        points: 1,
        gravity_scale: 1.1,
        velocity_scale: 1.15,
        gap_scale: 0.95,
    },
    LevelSpec {
        points: 1,
        gravity_scale: 1.2,
        velocity_scale: 1.3,
        gap_scale: 0.9,
    },
    LevelSpec {
        points: 1,
        gravity_scale: 1.3,
        velocity_scale: 1.45,
        gap_scale: 0.85,
    },
    LevelSpec {
        points: 1,
        gravity_scale: 1.4,
        velocity_scale: 1.6,
        gap_scale: 0.8,
    },
];

/// Get the table row for a level (clamped to 1..=MAX_LEVEL)
pub fn level_spec(level: u32) -> &'static LevelSpec {
    let index = level.clamp(1, MAX_LEVEL) as usize - 1;
    &LEVEL_TABLE[index]
}

/// Level-dependent physics values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTuning {
    pub gravity: f32,
    pub pipe_velocity: f32,
    pub gap_size: f32,
}

/// Session configuration, fixed for the lifetime of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub profile: Profile,
    pub screen_width: f32,
    pub screen_height: f32,
    pub bee_radius: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_velocity: f32,
    pub pipe_width: f32,
    /// Level 1 pipe velocity
    pub pipe_velocity: f32,
    /// Level 1 gap size
    pub gap_size: f32,
}

impl Default for GameConfig {
    /// Desktop profile before the first layout pass (zero-sized play field)
    fn default() -> Self {
        Self::new(Profile::default(), 0.0, 0.0)
    }
}

impl GameConfig {
    /// Build a config from a profile and the play field size
    pub fn new(profile: Profile, screen_width: f32, screen_height: f32) -> Self {
        Self {
            profile,
            screen_width,
            screen_height,
            bee_radius: BEE_RADIUS,
            gravity: profile.gravity(),
            jump_impulse: profile.jump_impulse(),
            max_velocity: profile.max_velocity(),
            pipe_width: PIPE_WIDTH,
            pipe_velocity: profile.pipe_velocity(),
            gap_size: profile.gap_size(),
        }
    }

    /// Same tuning for a differently sized play field
    pub fn resized(&self, screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..self.clone()
        }
    }

    /// False before layout, when either dimension is zero or negative
    pub fn has_play_field(&self) -> bool {
        self.screen_width > 0.0 && self.screen_height > 0.0
    }

    pub fn is_landscape(&self) -> bool {
        self.screen_width > self.screen_height
    }

    /// A new pipe pair spawns once the newest one scrolls left of this x
    pub fn spawn_threshold(&self) -> f32 {
        if self.is_landscape() {
            self.screen_width / 1.25
        } else {
            self.screen_width / 2.0
        }
    }

    /// Spawn x for new pipe pairs (just off the right edge)
    pub fn spawn_x(&self) -> f32 {
        self.screen_width + self.pipe_width
    }

    /// Downward velocity past which the bee counts as falling fast
    pub fn falling_fast_velocity(&self) -> f32 {
        self.max_velocity / FALLING_FAST_DIVISOR
    }

    /// Derive gravity, pipe velocity and gap size for a level
    pub fn level_tuning(&self, level: u32) -> LevelTuning {
        let spec = level_spec(level);
        LevelTuning {
            gravity: self.gravity * spec.gravity_scale,
            pipe_velocity: self.pipe_velocity * spec.velocity_scale,
            gap_size: self.gap_size * spec.gap_scale,
        }
    }
}
