//! Randomized enemy spawning.
//!
//! Each round keeps a single spawn deadline. When the virtual clock
//! reaches it, one enemy spawns at the right edge and the next deadline
//! is drawn uniformly from the round's spawn interval. Round three's
//! first spawn is the boss; it appears exactly once per session.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use scrapline_core::enums::Round;
use scrapline_core::events::SessionEvent;

use crate::rounds;
use crate::world_setup;

/// Spawn scheduling state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct SpawnControl {
    /// Virtual time at which the next enemy appears.
    pub next_spawn_at_ms: f64,
    /// Set once the boss has entered; no second boss is ever released.
    pub boss_released: bool,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    control: &mut SpawnControl,
    round: Round,
    now_ms: f64,
    events: &mut Vec<SessionEvent>,
) {
    if now_ms < control.next_spawn_at_ms {
        return;
    }

    let params = rounds::params(round);
    if round == Round::Three && !control.boss_released {
        world_setup::spawn_boss(world, now_ms);
        control.boss_released = true;
        events.push(SessionEvent::BossSpawned);
    } else {
        world_setup::spawn_walker(world, now_ms, params.enemy_speed);
    }

    control.next_spawn_at_ms = now_ms + rng.gen_range(0.0..=params.spawn_interval_ms);
}
