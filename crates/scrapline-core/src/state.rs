//! Frame snapshot — the complete visible state sent to the frontend each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SessionEvent;
use crate::types::{Hitbox, Position, SimTime};

/// Complete session state broadcast to the frontend after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    /// Background scroll offset in pixels, wrapping at the playfield width.
    pub scroll: f64,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub shots: Vec<ShotView>,
    pub hud: HudView,
    /// Overlay text, present during round breaks and terminal phases.
    pub banner: Option<String>,
    pub events: Vec<SessionEvent>,
}

/// The player as the frontend draws it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub facing: Facing,
    pub grounded: bool,
    /// Current walk-cycle frame to display.
    pub sprite_frame: u32,
}

/// A hostile unit as the frontend draws it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub kind: EnemyKind,
    pub sprite_frame: u32,
    pub hit_points: u32,
    pub size: Hitbox,
}

/// A projectile as the frontend draws it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView {
    pub id: u32,
    pub position: Position,
    pub owner: ShotOwner,
    pub radius: f64,
}

/// Heads-up display values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Lives remaining, drawn as hearts.
    pub hearts: u32,
    pub score: u32,
}
