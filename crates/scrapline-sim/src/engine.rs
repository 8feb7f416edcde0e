//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the hecs ECS world, applies per-frame input, runs
//! all systems, and produces `FrameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use scrapline_core::components::{Enemy, Player};
use scrapline_core::constants::{SCROLL_SPEED, WINDOW_WIDTH};
use scrapline_core::enums::{EnemyKind, Round, SessionOutcome, SessionPhase};
use scrapline_core::events::SessionEvent;
use scrapline_core::input::FrameInput;
use scrapline_core::state::FrameSnapshot;
use scrapline_core::types::{SimTime, Velocity};

use crate::rounds::{self, SessionStats};
use crate::systems;
use crate::systems::spawner::SpawnControl;
use crate::world_setup;

/// Configuration for starting a new session.
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The session engine. Owns the ECS world and all session state.
pub struct SessionEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    stats: SessionStats,
    spawn_control: SpawnControl,
    scroll: f64,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SessionEvent>,
}

impl SessionEngine {
    /// Create a new session engine with the given config. The player is
    /// spawned immediately; round one begins on the first tick.
    pub fn new(config: SessionConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_player(&mut world);
        Self {
            world,
            time: SimTime::default(),
            phase: SessionPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: SessionStats::default(),
            spawn_control: SpawnControl::default(),
            scroll: 0.0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the session by one frame of input and return the resulting
    /// snapshot.
    pub fn tick(&mut self, input: FrameInput) -> FrameSnapshot {
        match self.phase {
            SessionPhase::Playing { round } => {
                self.run_systems(round, input);
                self.apply_transitions(round);
                self.time.advance();
            }
            SessionPhase::RoundBreak { next } => {
                // World and clock are frozen; only confirm is honored.
                if input.confirm {
                    self.begin_round(next);
                }
            }
            SessionPhase::Victory | SessionPhase::GameOver => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.scroll, events)
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the running session statistics.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run all systems in order for one playing-phase frame.
    fn run_systems(&mut self, round: Round, input: FrameInput) {
        let now_ms = self.time.elapsed_ms;
        // 1. Player input (walk, jump, fire)
        systems::player_control::run(
            &mut self.world,
            input,
            now_ms,
            &mut self.stats,
            &mut self.events,
        );
        // 2. Player gravity and landing
        systems::player_physics::run(&mut self.world);
        // 3. Movement integration + boss hold + sprite animation
        systems::movement::run(&mut self.world);
        // 4. Enemy fire (round two onward)
        systems::enemy_fire::run(&mut self.world, round, now_ms, &mut self.events);
        // 5. Collision resolution (bodies, enemy shots, player shots)
        systems::collision::run(
            &mut self.world,
            now_ms,
            &mut self.stats,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Bounds culling
        systems::bounds::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Enemy spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_control,
            round,
            now_ms,
            &mut self.events,
        );
        // 8. Background scroll
        self.scroll += SCROLL_SPEED;
        if self.scroll >= WINDOW_WIDTH {
            self.scroll = 0.0;
        }
    }

    /// Apply end-of-frame phase transitions. Defeat wins over victory;
    /// victory wins over a round clear.
    fn apply_transitions(&mut self, round: Round) {
        let lives = self
            .world
            .query_mut::<&Player>()
            .into_iter()
            .next()
            .map(|(_, player)| player.lives)
            .unwrap_or(0);
        if lives == 0 {
            self.phase = SessionPhase::GameOver;
            self.events.push(SessionEvent::SessionEnded {
                outcome: SessionOutcome::Defeat,
            });
            return;
        }

        if self.stats.boss_defeated {
            self.phase = SessionPhase::Victory;
            self.events.push(SessionEvent::SessionEnded {
                outcome: SessionOutcome::Victory,
            });
            return;
        }

        if let (Some(target), Some(next)) = (round.kill_target(), round.next()) {
            if self.stats.kills >= target {
                self.phase = SessionPhase::RoundBreak { next };
                self.events.push(SessionEvent::RoundCleared { round });
            }
        }
    }

    /// Leave a round break: retarget surviving walkers to the new round's
    /// speed and resume play.
    fn begin_round(&mut self, next: Round) {
        let params = rounds::params(next);
        for (_, (enemy, vel)) in self.world.query_mut::<(&Enemy, &mut Velocity)>() {
            if enemy.kind == EnemyKind::Walker {
                vel.x = -params.enemy_speed;
            }
        }
        self.spawn_control.next_spawn_at_ms = self.time.elapsed_ms;
        self.phase = SessionPhase::Playing { round: next };
        self.events.push(SessionEvent::RoundStarted { round: next });
    }

    /// Spawn a walker at the given x, at the current round's speed
    /// (for testing).
    #[cfg(test)]
    pub fn spawn_test_walker(&mut self, x: f64) -> hecs::Entity {
        let round = self.phase.round().unwrap_or_default();
        let params = rounds::params(round);
        world_setup::spawn_walker_at(&mut self.world, self.time.elapsed_ms, x, params.enemy_speed)
    }

    /// Spawn a player shot at the given point (for testing).
    #[cfg(test)]
    pub fn spawn_test_shot(
        &mut self,
        x: f64,
        y: f64,
        facing: scrapline_core::enums::Facing,
    ) -> hecs::Entity {
        world_setup::spawn_player_shot(&mut self.world, x, y, facing)
    }

    /// Spawn an enemy shot at the given point (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy_shot(&mut self, x: f64, y: f64) -> hecs::Entity {
        world_setup::spawn_enemy_shot(&mut self.world, x, y)
    }

    /// Spawn the boss parked at the given x (for testing).
    #[cfg(test)]
    pub fn spawn_test_boss(&mut self, x: f64) -> hecs::Entity {
        world_setup::spawn_parked_boss(&mut self.world, self.time.elapsed_ms, x)
    }

    /// Jump straight to a round without earning the kills (for testing).
    #[cfg(test)]
    pub fn set_test_round(&mut self, round: Round) {
        self.phase = SessionPhase::Playing { round };
        self.spawn_control.next_spawn_at_ms = self.time.elapsed_ms;
    }

    /// Push the spawn deadline out of reach (for tests that stage their
    /// own enemies).
    #[cfg(test)]
    pub fn hold_spawning(&mut self) {
        self.spawn_control.next_spawn_at_ms = f64::INFINITY;
    }

    /// Get a read-only reference to the spawn scheduling state.
    #[cfg(test)]
    pub fn spawn_control(&self) -> &SpawnControl {
        &self.spawn_control
    }
}
