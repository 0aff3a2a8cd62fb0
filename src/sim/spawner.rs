//! Pipe scrolling, recycling and procedural spawning

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, PipePair};
use crate::tuning::GameConfig;

/// Source of uniform samples in `[0, 1)`
pub trait UnitRandom {
    fn next_unit(&mut self) -> f32;
}

impl UnitRandom for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Move pipes left, drop the ones that left the field, spawn when needed
pub fn update_pipes(state: &mut GameState, config: &GameConfig, rng: &mut dyn UnitRandom) {
    scroll(&mut state.pipes, state.tuning.pipe_velocity, config.pipe_width);

    if !config.has_play_field() {
        return;
    }

    let needs_pipe = state
        .pipes
        .last()
        .map(|newest| newest.x < config.spawn_threshold())
        .unwrap_or(true);

    if needs_pipe {
        let pipe = spawn(config, state.tuning.gap_size, rng);
        log::debug!(
            "Spawned pipe pair at x={} gap_y={} (level {})",
            pipe.x,
            pipe.y,
            state.level
        );
        state.pipes.push(pipe);
    }
}

/// Scroll every pipe by `velocity` and recycle those fully off the left edge
pub fn scroll(pipes: &mut Vec<PipePair>, velocity: f32, pipe_width: f32) {
    for pipe in pipes.iter_mut() {
        pipe.x -= velocity;
    }
    pipes.retain(|p| p.right_edge(pipe_width) >= 0.0);
}

/// Build a pipe pair just off the right edge with a random top height
pub fn spawn(config: &GameConfig, gap_size: f32, rng: &mut dyn UnitRandom) -> PipePair {
    let top_height = rng.next_unit() * (config.screen_height / 2.0);
    PipePair::new(config.spawn_x(), top_height, gap_size, config.screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Profile;
    use rand::SeedableRng;

    struct Fixed(f32);

    impl UnitRandom for Fixed {
        fn next_unit(&mut self) -> f32 {
            self.0
        }
    }

    fn portrait() -> GameConfig {
        GameConfig::new(Profile::Android, 1000.0, 2000.0)
    }

    #[test]
    fn test_first_spawn_position() {
        let config = portrait();
        let mut state = GameState::new(&config, 0);
        update_pipes(&mut state, &config, &mut Fixed(0.5));

        assert_eq!(state.pipes.len(), 1);
        let pipe = &state.pipes[0];
        assert_eq!(pipe.x, 1000.0 + config.pipe_width);
        assert_eq!(pipe.top_height, 500.0);
        assert_eq!(pipe.y, 500.0 + config.gap_size / 2.0);
        assert_eq!(pipe.bottom_height, 2000.0 - 500.0 - config.gap_size);
    }

    #[test]
    fn test_no_respawn_until_threshold() {
        let config = portrait();
        let mut state = GameState::new(&config, 0);
        update_pipes(&mut state, &config, &mut Fixed(0.1));

        // Scroll the first pipe down to the threshold
        while state.pipes[0].x - state.tuning.pipe_velocity >= config.spawn_threshold() {
            update_pipes(&mut state, &config, &mut Fixed(0.1));
            assert_eq!(state.pipes.len(), 1, "respawned at x={}", state.pipes[0].x);
        }

        // Next scroll crosses below the threshold
        update_pipes(&mut state, &config, &mut Fixed(0.1));
        assert_eq!(state.pipes.len(), 2);
        assert!(state.pipes[0].x < config.spawn_threshold());
        assert_eq!(state.pipes[1].x, config.spawn_x());
    }

    #[test]
    fn test_offscreen_pipes_are_removed() {
        let config = portrait();
        let mut pipes = vec![
            PipePair::new(-149.0, 0.0, 250.0, 2000.0),
            PipePair::new(300.0, 0.0, 250.0, 2000.0),
        ];
        scroll(&mut pipes, 5.0, config.pipe_width);
        assert_eq!(pipes.len(), 1);
        assert_eq!(pipes[0].x, 295.0);
    }

    #[test]
    fn test_spawn_uses_current_gap() {
        let config = portrait();
        let pipe = spawn(&config, 200.0, &mut Fixed(0.0));
        assert_eq!(pipe.gap_size, 200.0);
        assert_eq!(pipe.top_height, 0.0);
        assert_eq!(pipe.y, 100.0);
    }

    #[test]
    fn test_zero_sized_field_never_spawns() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        update_pipes(&mut state, &config, &mut Fixed(0.5));
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_pcg_heights_stay_in_upper_half() {
        let config = portrait();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let pipe = spawn(&config, config.gap_size, &mut rng);
            assert!(pipe.top_height >= 0.0);
            assert!(pipe.top_height < config.screen_height / 2.0);
        }
    }
}
