//! Per-round difficulty parameters and running session statistics.
//!
//! Stored in `SessionEngine`, NOT as ECS entities.

use serde::Serialize;

use scrapline_core::constants::*;
use scrapline_core::enums::Round;

/// Tuning knobs that change between rounds.
#[derive(Debug, Clone, Copy)]
pub struct RoundParams {
    /// Walker march speed in pixels per frame, applied leftward.
    pub enemy_speed: f64,
    /// Upper bound on the randomized gap between enemy spawns (ms).
    pub spawn_interval_ms: f64,
}

/// Look up the parameters for a round.
pub fn params(round: Round) -> RoundParams {
    match round {
        Round::One => RoundParams {
            enemy_speed: ROUND_ONE_ENEMY_SPEED,
            spawn_interval_ms: ROUND_ONE_SPAWN_INTERVAL_MS,
        },
        Round::Two => RoundParams {
            enemy_speed: ROUND_TWO_ENEMY_SPEED,
            spawn_interval_ms: ROUND_TWO_SPAWN_INTERVAL_MS,
        },
        Round::Three => RoundParams {
            enemy_speed: ROUND_THREE_ENEMY_SPEED,
            spawn_interval_ms: ROUND_THREE_SPAWN_INTERVAL_MS,
        },
    }
}

/// Running statistics tracked by the engine across the whole session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    /// Walkers destroyed by player shots. Contact kills do not count.
    pub kills: u32,
    pub shots_fired: u32,
    pub boss_defeated: bool,
}
