//! Entity spawn factories for setting up the session world.
//!
//! Creates the player, walkers, the boss, and shots with appropriate
//! component bundles.

use hecs::World;

use scrapline_core::components::*;
use scrapline_core::constants::*;
use scrapline_core::enums::{EnemyKind, Facing};
use scrapline_core::types::{Cooldown, Hitbox, Position, Velocity};

/// Spawn the player on the ground line at the start of a session.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player {
            facing: Facing::Right,
            vertical_speed: 0.0,
            grounded: true,
            lives: PLAYER_LIVES,
            score: 0,
            fire: Cooldown::new(0.0, PLAYER_FIRE_COOLDOWN_MS),
        },
        Position::new(PLAYER_START_X, GROUND_LEVEL),
        Hitbox {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        },
        SpriteAnimation {
            frame: 0.0,
            frame_count: PLAYER_FRAME_COUNT,
            step: PLAYER_FRAME_STEP,
        },
    ))
}

/// Spawn a walker at the right edge, marching leftward at the given speed.
pub fn spawn_walker(world: &mut World, now_ms: f64, speed: f64) -> hecs::Entity {
    spawn_walker_at(world, now_ms, WINDOW_WIDTH, speed)
}

/// Spawn a walker at an arbitrary x. Production spawns always start at the
/// right edge; tests stage encounters closer in.
pub fn spawn_walker_at(world: &mut World, now_ms: f64, x: f64, speed: f64) -> hecs::Entity {
    world.spawn((
        Enemy {
            kind: EnemyKind::Walker,
            hit_points: WALKER_HIT_POINTS,
            fire: Cooldown::new(now_ms, ENEMY_FIRE_COOLDOWN_MS),
        },
        Position::new(x, WALKER_SPAWN_Y),
        Velocity::new(-speed, 0.0),
        Hitbox {
            width: WALKER_WIDTH,
            height: WALKER_HEIGHT,
        },
        SpriteAnimation {
            frame: 0.0,
            frame_count: ENEMY_FRAME_COUNT,
            step: ENEMY_FRAME_STEP,
        },
    ))
}

/// Spawn the boss at the right edge. It marches in at round-three speed
/// until it reaches its hold station.
pub fn spawn_boss(world: &mut World, now_ms: f64) -> hecs::Entity {
    world.spawn((
        Enemy {
            kind: EnemyKind::Boss,
            hit_points: BOSS_HIT_POINTS,
            fire: Cooldown::new(now_ms, ENEMY_FIRE_COOLDOWN_MS),
        },
        BossState {
            hold_x: BOSS_HOLD_X,
            contact: Cooldown::new(now_ms, BOSS_CONTACT_COOLDOWN_MS),
        },
        Position::new(WINDOW_WIDTH, BOSS_SPAWN_Y),
        Velocity::new(-ROUND_THREE_ENEMY_SPEED, 0.0),
        Hitbox {
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
        },
        SpriteAnimation {
            frame: 0.0,
            frame_count: ENEMY_FRAME_COUNT,
            step: ENEMY_FRAME_STEP,
        },
    ))
}

/// Spawn the boss already parked at `x` with no march speed (for tests).
#[cfg(test)]
pub fn spawn_parked_boss(world: &mut World, now_ms: f64, x: f64) -> hecs::Entity {
    world.spawn((
        Enemy {
            kind: EnemyKind::Boss,
            hit_points: BOSS_HIT_POINTS,
            fire: Cooldown::new(now_ms, ENEMY_FIRE_COOLDOWN_MS),
        },
        BossState {
            hold_x: x,
            contact: Cooldown::new(now_ms, BOSS_CONTACT_COOLDOWN_MS),
        },
        Position::new(x, BOSS_SPAWN_Y),
        Velocity::new(0.0, 0.0),
        Hitbox {
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
        },
        SpriteAnimation {
            frame: 0.0,
            frame_count: ENEMY_FRAME_COUNT,
            step: ENEMY_FRAME_STEP,
        },
    ))
}

/// Spawn a player shot. The collision box's top-left corner sits on the
/// muzzle point; the shot travels along the firer's facing.
pub fn spawn_player_shot(world: &mut World, x: f64, y: f64, facing: Facing) -> hecs::Entity {
    world.spawn((
        PlayerShot,
        Projectile {
            radius: SHOT_RADIUS,
        },
        Position::new(x, y),
        Velocity::new(facing.sign() * PLAYER_SHOT_SPEED, 0.0),
        Hitbox {
            width: SHOT_HITBOX,
            height: SHOT_HITBOX,
        },
    ))
}

/// Spawn an enemy shot at the muzzle point, traveling leftward.
pub fn spawn_enemy_shot(world: &mut World, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        EnemyShot,
        Projectile {
            radius: SHOT_RADIUS,
        },
        Position::new(x, y),
        Velocity::new(-ENEMY_SHOT_SPEED, 0.0),
        Hitbox {
            width: SHOT_HITBOX,
            height: SHOT_HITBOX,
        },
    ))
}
