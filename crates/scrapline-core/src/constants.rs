//! Simulation constants and tuning parameters.
//!
//! Distances are pixels, velocities pixels per frame, durations virtual
//! milliseconds.

/// Simulated frame rate (Hz).
pub const FRAME_RATE: u32 = 120;

/// Virtual milliseconds per frame.
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- World ---

/// Playfield width in pixels.
pub const WINDOW_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const WINDOW_HEIGHT: f64 = 500.0;

/// Ground line: the y coordinate the player stands on.
pub const GROUND_LEVEL: f64 = WINDOW_HEIGHT - 100.0;

/// Background scroll advance per frame; the offset wraps at WINDOW_WIDTH.
pub const SCROLL_SPEED: f64 = 1.0;

// --- Player ---

/// Player spawn x.
pub const PLAYER_START_X: f64 = 30.0;

/// Starting lives.
pub const PLAYER_LIVES: u32 = 3;

/// Horizontal movement per frame per held direction.
pub const PLAYER_SPEED: f64 = 3.0;

/// Downward acceleration per frame while airborne.
pub const GRAVITY: f64 = 0.5;

/// Vertical speed applied on jump (negative = up).
pub const JUMP_IMPULSE: f64 = -10.0;

/// Player sprite box.
pub const PLAYER_WIDTH: f64 = 70.0;
pub const PLAYER_HEIGHT: f64 = 70.0;

/// Walk animation: frame count and advance per simulated frame.
pub const PLAYER_FRAME_COUNT: u32 = 2;
pub const PLAYER_FRAME_STEP: f64 = 1.0;

/// Minimum interval between player shots.
pub const PLAYER_FIRE_COOLDOWN_MS: f64 = 500.0;

// --- Shots ---

/// Render radius of a shot.
pub const SHOT_RADIUS: f64 = 5.0;

/// Square collision box side for a shot.
pub const SHOT_HITBOX: f64 = 10.0;

/// Player shot speed magnitude; sign follows the firer's facing.
pub const PLAYER_SHOT_SPEED: f64 = 5.0;

/// Enemy shot speed magnitude; enemy shots always travel leftward.
pub const ENEMY_SHOT_SPEED: f64 = 4.0;

// --- Enemies ---

/// Walker sprite box.
pub const WALKER_WIDTH: f64 = 50.0;
pub const WALKER_HEIGHT: f64 = 50.0;

/// Walkers spawn slightly below the ground line.
pub const WALKER_SPAWN_Y: f64 = GROUND_LEVEL + 20.0;

/// March animation: frame count and advance per simulated frame.
pub const ENEMY_FRAME_COUNT: u32 = 3;
pub const ENEMY_FRAME_STEP: f64 = 0.25;

/// Minimum interval between shots from one enemy (round two onward).
pub const ENEMY_FIRE_COOLDOWN_MS: f64 = 1000.0;

/// Walkers die to a single hit.
pub const WALKER_HIT_POINTS: u32 = 1;

// --- Boss ---

/// Boss sprite box; stands on the same baseline as walkers.
pub const BOSS_WIDTH: f64 = 100.0;
pub const BOSS_HEIGHT: f64 = 100.0;
pub const BOSS_SPAWN_Y: f64 = WALKER_SPAWN_Y + WALKER_HEIGHT - BOSS_HEIGHT;

pub const BOSS_HIT_POINTS: u32 = 10;

/// Where the boss stops advancing and holds.
pub const BOSS_HOLD_X: f64 = WINDOW_WIDTH - BOSS_WIDTH - 80.0;

/// Minimum interval between contact hits the boss can inflict.
pub const BOSS_CONTACT_COOLDOWN_MS: f64 = 1000.0;

// --- Scoring and round progression ---

/// Score for destroying a walker with a shot.
pub const WALKER_SCORE: u32 = 1;

/// Score for destroying the boss.
pub const BOSS_SCORE: u32 = 5;

/// Cumulative walker kills that end round one.
pub const ROUND_TWO_KILL_TARGET: u32 = 10;

/// Cumulative walker kills that end round two.
pub const ROUND_THREE_KILL_TARGET: u32 = 20;

/// Walker march speed by round.
pub const ROUND_ONE_ENEMY_SPEED: f64 = 2.0;
pub const ROUND_TWO_ENEMY_SPEED: f64 = 3.0;
pub const ROUND_THREE_ENEMY_SPEED: f64 = 4.0;

/// Upper bound on the randomized gap between enemy spawns, by round.
pub const ROUND_ONE_SPAWN_INTERVAL_MS: f64 = 3000.0;
pub const ROUND_TWO_SPAWN_INTERVAL_MS: f64 = 1500.0;
pub const ROUND_THREE_SPAWN_INTERVAL_MS: f64 = 1000.0;

// --- Frontend timing ---

/// How long a frontend should hold the terminal banner before exiting.
pub const OUTCOME_LINGER_MS: f64 = 2000.0;
