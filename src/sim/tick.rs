//! Fixed-step simulation tick and input transitions
//!
//! One tick per rendered frame. Velocities and gravity are per tick, not per
//! second, so gameplay speed follows the host's refresh rate.

use super::collision;
use super::scoring::{self, PointOutcome};
use super::spawner::{self, UnitRandom};
use super::state::{GameEvent, GameState, GameStatus};
use crate::tuning::GameConfig;

/// Result of walking the live pipes for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipeOutcome {
    Clear,
    Collision,
    Completed,
}

/// Leave the idle screen and begin ticking
///
/// Returns false (and does nothing) unless the session is idle.
pub fn start(state: &mut GameState) -> bool {
    if state.status != GameStatus::Idle {
        return false;
    }
    state.status = GameStatus::Started;
    state.push_event(GameEvent::Started);
    log::info!("Game started (best score {})", state.best_score);
    true
}

/// Flap: replace the bee's velocity with the jump impulse
///
/// Ignored unless the session is running.
pub fn jump(state: &mut GameState, config: &GameConfig) -> bool {
    if state.status != GameStatus::Started {
        return false;
    }
    state.velocity = config.jump_impulse;
    state.falling_signaled = false;
    state.push_event(GameEvent::Jumped);
    true
}

/// Reset bee, pipes, score and level, then start playing again
pub fn restart(state: &mut GameState, config: &GameConfig) {
    state.reset(config);
    state.status = GameStatus::Started;
    state.push_event(GameEvent::Restarted);
    log::info!("Game restarted");
}

/// Advance the session by one tick: physics, then pipes, then spawning
pub fn tick(state: &mut GameState, config: &GameConfig, rng: &mut dyn UnitRandom) -> GameStatus {
    if state.status != GameStatus::Started || !config.has_play_field() {
        return state.status;
    }

    state.time_ticks += 1;

    if !integrate(state, config) {
        finish(state, GameStatus::Over);
        return state.status;
    }

    if !state.falling_signaled && state.is_falling_fast(config) {
        state.falling_signaled = true;
        state.push_event(GameEvent::FallingFast);
    }

    match check_pipes(state, config) {
        PipeOutcome::Collision => {
            finish(state, GameStatus::Over);
            return state.status;
        }
        PipeOutcome::Completed => {
            finish(state, GameStatus::Completed);
            return state.status;
        }
        PipeOutcome::Clear => {}
    }

    spawner::update_pipes(state, config, rng);
    state.status
}

/// Apply gravity and move the bee
///
/// Returns false when the bee dropped below the play field.
fn integrate(state: &mut GameState, config: &GameConfig) -> bool {
    state.velocity =
        (state.velocity + state.tuning.gravity).clamp(-config.max_velocity, config.max_velocity);
    state.bee.pos.y += state.velocity;

    if state.bee.pos.y < 0.0 {
        // Hitting the ceiling stops the bee but doesn't end the run
        state.bee.pos.y = 0.0;
        state.velocity = 0.0;
    } else if state.bee.pos.y > config.screen_height {
        return false;
    }
    true
}

/// Collide against and score every live pipe in spawn order
fn check_pipes(state: &mut GameState, config: &GameConfig) -> PipeOutcome {
    for i in 0..state.pipes.len() {
        let pipe = &state.pipes[i];
        if collision::is_collision(&state.bee, pipe, config.pipe_width) {
            return PipeOutcome::Collision;
        }
        if !pipe.scored && collision::has_passed(&state.bee, pipe, config.pipe_width) {
            state.pipes[i].scored = true;
            if scoring::award_point(state, config) == PointOutcome::Completed {
                return PipeOutcome::Completed;
            }
        }
    }
    PipeOutcome::Clear
}

/// Enter a terminal state and update the best score
fn finish(state: &mut GameState, status: GameStatus) {
    state.status = status;
    let event = match status {
        GameStatus::Completed => GameEvent::Completed { score: state.score },
        _ => GameEvent::GameOver { score: state.score },
    };
    state.push_event(event);
    scoring::record_best_score(state);
    log::info!(
        "Game {:?} after {} ticks: score={} level={} best={}",
        status,
        state.time_ticks,
        state.score,
        state.level,
        state.best_score
    );
}
