//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Round, SessionOutcome};

/// One frame's noteworthy happenings, drained with each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// The player fired a shot.
    PlayerFired,
    /// An enemy fired a shot.
    EnemyFired,
    /// A walker was destroyed by a player shot.
    WalkerDown { x: f64, y: f64 },
    /// The player took a hit.
    PlayerHit { lives_left: u32 },
    /// The boss entered the field.
    BossSpawned,
    /// A player shot connected with the boss.
    BossHit { hit_points_left: u32 },
    /// The boss was destroyed.
    BossDown,
    /// A round's kill target was reached.
    RoundCleared { round: Round },
    /// A new round began.
    RoundStarted { round: Round },
    /// The session reached a terminal phase.
    SessionEnded { outcome: SessionOutcome },
}
