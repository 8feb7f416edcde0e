//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space (pixels). The point is the top-left corner
/// of an entity's sprite box. x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per simulated frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned sprite extent used for overlap tests (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each simulated frame).
    pub frame: u64,
    /// Elapsed virtual time in milliseconds.
    pub elapsed_ms: f64,
}

/// Minimum-interval gate between successive actions of one kind
/// (player fire, enemy fire, boss contact damage).
///
/// A fresh cooldown is armed: the first action becomes legal one interval
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Interval between actions in virtual milliseconds.
    pub interval_ms: f64,
    /// Absolute virtual time at which the next action is legal.
    pub ready_at_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Axis-aligned rectangle overlap against another positioned box.
    /// Strict inequalities: boxes that merely touch do not intersect.
    pub fn intersects(&self, size: &Hitbox, other: &Position, other_size: &Hitbox) -> bool {
        self.x < other.x + other_size.width
            && other.x < self.x + size.width
            && self.y < other.y + other_size.height
            && other.y < self.y + size.height
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl SimTime {
    /// Virtual milliseconds per frame at the fixed frame rate.
    pub fn frame_ms(&self) -> f64 {
        1000.0 / crate::constants::FRAME_RATE as f64
    }

    /// Advance by one frame. Elapsed time is derived from the frame count
    /// rather than accumulated, so it does not drift.
    pub fn advance(&mut self) {
        self.frame += 1;
        self.elapsed_ms = self.frame as f64 * self.frame_ms();
    }
}

impl Cooldown {
    /// Create an armed cooldown: ready one interval after `now_ms`.
    pub fn new(now_ms: f64, interval_ms: f64) -> Self {
        Self {
            interval_ms,
            ready_at_ms: now_ms + interval_ms,
        }
    }

    pub fn is_ready(&self, now_ms: f64) -> bool {
        now_ms >= self.ready_at_ms
    }

    /// Consume the window: next action one interval from `now_ms`.
    pub fn arm(&mut self, now_ms: f64) {
        self.ready_at_ms = now_ms + self.interval_ms;
    }
}
