//! Game state and core simulation types
//!
//! Everything a host needs to draw a frame lives in [`GameState`]. The
//! session configuration is kept separately in [`GameConfig`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::{GameConfig, LevelTuning};

/// Lifecycle of one play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Waiting for the start command, nothing moves
    #[default]
    Idle,
    /// Active gameplay
    Started,
    /// Bee hit a pipe or fell off the bottom
    Over,
    /// Scored past the last level
    Completed,
}

impl GameStatus {
    /// True for the two terminal states
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Over | GameStatus::Completed)
    }
}

/// The player-controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bee {
    pub pos: Vec2,
    pub radius: f32,
}

impl Bee {
    /// Bee centered on the play field (at the origin before layout)
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.screen_width.max(0.0) / 2.0,
                config.screen_height.max(0.0) / 2.0,
            ),
            radius: config.bee_radius,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A top/bottom obstacle with a passage between the two segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Horizontal center of the pipe band
    pub x: f32,
    /// Vertical center of the gap
    pub y: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    /// Gap size at spawn time (later level changes don't resize live pipes)
    pub gap_size: f32,
    /// Set once the bee has passed, so the pair scores at most once
    pub scored: bool,
}

impl PipePair {
    pub fn new(x: f32, top_height: f32, gap_size: f32, screen_height: f32) -> Self {
        Self {
            x,
            y: top_height + gap_size / 2.0,
            top_height,
            bottom_height: screen_height - top_height - gap_size,
            gap_size,
            scored: false,
        }
    }

    /// Upper edge of the passage
    pub fn gap_top(&self) -> f32 {
        self.y - self.gap_size / 2.0
    }

    /// Lower edge of the passage
    pub fn gap_bottom(&self) -> f32 {
        self.y + self.gap_size / 2.0
    }

    pub fn right_edge(&self, pipe_width: f32) -> f32 {
        self.x + pipe_width
    }
}

/// Things that happened during a call into the simulation
///
/// The host drains these after each call to drive sound and UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Restarted,
    Jumped,
    /// Downward velocity crossed the falling-fast mark (once per jump)
    FallingFast,
    Scored { score: u32 },
    LevelUp { level: u32 },
    GameOver { score: u32 },
    Completed { score: u32 },
    NewBestScore { score: u32 },
}

/// Complete state of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub bee: Bee,
    /// Vertical velocity per tick (positive is down)
    pub velocity: f32,
    pub score: u32,
    /// Difficulty level, 1-based
    pub level: u32,
    /// Points earned since entering the current level
    pub level_points: u32,
    pub best_score: u32,
    /// Live pipe pairs in spawn order (left to right)
    pub pipes: Vec<PipePair>,
    /// Physics values for the current level
    pub tuning: LevelTuning,
    /// Falling-fast already reported since the last jump
    pub falling_signaled: bool,
    /// Ticks simulated since the last start/restart
    pub time_ticks: u64,
    /// Pending events (newest last)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh idle session
    pub fn new(config: &GameConfig, best_score: u32) -> Self {
        Self {
            status: GameStatus::Idle,
            bee: Bee::new(config),
            velocity: 0.0,
            score: 0,
            level: 1,
            level_points: 0,
            best_score,
            pipes: Vec::new(),
            tuning: config.level_tuning(1),
            falling_signaled: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Put the bee back in the middle and clear pipes, score and level
    pub fn reset(&mut self, config: &GameConfig) {
        self.bee.pos.y = config.screen_height.max(0.0) / 2.0;
        self.velocity = 0.0;
        self.pipes.clear();
        self.score = 0;
        self.level = 1;
        self.level_points = 0;
        self.tuning = config.level_tuning(1);
        self.falling_signaled = false;
        self.time_ticks = 0;
    }

    /// Downward velocity is past the falling-fast mark
    pub fn is_falling_fast(&self, config: &GameConfig) -> bool {
        self.velocity > config.falling_fast_velocity()
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Profile;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let config = GameConfig::new(Profile::Desktop, 800.0, 600.0);
        let state = GameState::new(&config, 4);
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.bee.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.bee.radius, config.bee_radius);
        assert_eq!(state.level, 1);
        assert_eq!(state.best_score, 4);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_zero_sized_field_centers_bee_at_origin() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 0);
        assert_eq!(state.bee.pos, Vec2::ZERO);
    }

    #[test]
    fn test_pipe_pair_geometry() {
        let pipe = PipePair::new(500.0, 200.0, 300.0, 1000.0);
        assert_eq!(pipe.y, 350.0);
        assert_eq!(pipe.bottom_height, 500.0);
        assert_eq!(pipe.gap_top(), 200.0);
        assert_eq!(pipe.gap_bottom(), 500.0);
        assert_eq!(pipe.top_height + pipe.gap_size + pipe.bottom_height, 1000.0);
        assert!(!pipe.scored);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let config = GameConfig::new(Profile::Android, 400.0, 800.0);
        let mut state = GameState::new(&config, 0);
        state.push_event(GameEvent::Started);
        state.push_event(GameEvent::Jumped);
        assert_eq!(state.drain_events(), vec![GameEvent::Started, GameEvent::Jumped]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_status_is_finished() {
        assert!(!GameStatus::Idle.is_finished());
        assert!(!GameStatus::Started.is_finished());
        assert!(GameStatus::Over.is_finished());
        assert!(GameStatus::Completed.is_finished());
    }
}
