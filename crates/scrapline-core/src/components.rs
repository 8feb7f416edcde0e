//! ECS components.
//!
//! Components are plain data structs with no methods. Session logic lives
//! in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, Facing};
use crate::types::Cooldown;

/// The player avatar. Exactly one entity carries this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub facing: Facing,
    /// Vertical speed in pixels per frame; negative is upward.
    pub vertical_speed: f64,
    pub grounded: bool,
    pub lives: u32,
    pub score: u32,
    pub fire: Cooldown,
}

/// A hostile unit, walker or boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hit_points: u32,
    pub fire: Cooldown,
}

/// Boss-only state, attached alongside `Enemy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    /// The boss stops marching once it reaches this x and holds there.
    pub hold_x: f64,
    /// Gates how often body contact with the player costs a life.
    pub contact: Cooldown,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub radius: f64,
}

/// Marker: projectile fired by the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerShot;

/// Marker: projectile fired by an enemy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnemyShot;

/// Sprite frame counter, advanced every simulated frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpriteAnimation {
    /// Fractional frame index; truncates to the displayed frame.
    pub frame: f64,
    pub frame_count: u32,
    /// Advance per simulated frame.
    pub step: f64,
}
