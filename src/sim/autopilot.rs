//! Demo-mode pilot
//!
//! Flaps whenever the bee is about to sink below the middle of the next gap.
//! Used by the headless runner and by idle attract screens.

use super::state::{GameState, GameStatus};
use crate::tuning::GameConfig;

/// Decide whether to jump this tick
pub fn should_jump(state: &GameState, config: &GameConfig) -> bool {
    if state.status != GameStatus::Started {
        return false;
    }

    let bee = &state.bee;
    // Next pipe whose band the bee hasn't fully cleared yet
    let target_y = state
        .pipes
        .iter()
        .find(|p| p.x + config.pipe_width / 2.0 > bee.left())
        .map(|p| p.y)
        .unwrap_or(config.screen_height / 2.0);

    let next_velocity = (state.velocity + state.tuning.gravity).min(config.max_velocity);
    let predicted_y = bee.pos.y + next_velocity;
    let margin = state.tuning.gap_size / 4.0;

    state.velocity >= 0.0 && predicted_y > target_y + margin
}
