//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed step per rendered frame, no delta time
//! - Randomness only through an injected [`UnitRandom`] source
//! - Pipes iterated in spawn order
//! - No rendering, audio or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{fits_in_gap, has_passed, is_collision, overlaps_band};
pub use scoring::PointOutcome;
pub use spawner::UnitRandom;
pub use state::{Bee, GameEvent, GameState, GameStatus, PipePair};
pub use tick::{jump, restart, start, tick};
