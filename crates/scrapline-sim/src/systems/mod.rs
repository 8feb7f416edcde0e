//! Per-frame simulation systems.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only passes) plus whatever engine state they need. They do not own
//! state; the engine calls them in a fixed order each frame.

pub mod bounds;
pub mod collision;
pub mod enemy_fire;
pub mod movement;
pub mod player_control;
pub mod player_physics;
pub mod snapshot;
pub mod spawner;
