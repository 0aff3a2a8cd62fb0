//! Score awards, difficulty progression and best-score tracking

use super::state::{GameEvent, GameState};
use crate::consts::MAX_LEVEL;
use crate::tuning::{GameConfig, level_spec};

/// What a scored point did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Stayed on the same level
    Scored,
    /// Moved up to a harder level
    LevelUp,
    /// Finished the last level
    Completed,
}

/// Add one point and advance the level when the table says so
pub fn award_point(state: &mut GameState, config: &GameConfig) -> PointOutcome {
    state.score += 1;
    state.level_points += 1;
    state.push_event(GameEvent::Scored { score: state.score });

    if state.level_points < level_spec(state.level).points {
        return PointOutcome::Scored;
    }

    if state.level >= MAX_LEVEL {
        return PointOutcome::Completed;
    }

    state.level += 1;
    state.level_points = 0;
    state.tuning = config.level_tuning(state.level);
    state.push_event(GameEvent::LevelUp { level: state.level });
    log::debug!(
        "Level {}: gravity={} pipe_velocity={} gap={}",
        state.level,
        state.tuning.gravity,
        state.tuning.pipe_velocity,
        state.tuning.gap_size
    );
    PointOutcome::LevelUp
}

/// Raise the best score if the current run beat it
///
/// Returns true when the best score changed.
pub fn record_best_score(state: &mut GameState) -> bool {
    if state.score <= state.best_score {
        return false;
    }
    state.best_score = state.score;
    state.push_event(GameEvent::NewBestScore { score: state.score });
    true
}
