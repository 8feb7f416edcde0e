//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{ROUND_THREE_KILL_TARGET, ROUND_TWO_KILL_TARGET};

/// Difficulty round. Monotonic within a session: One → Two → Three.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Round {
    #[default]
    One,
    Two,
    Three,
}

impl Round {
    /// The round that follows this one, if any.
    pub fn next(self) -> Option<Round> {
        match self {
            Round::One => Some(Round::Two),
            Round::Two => Some(Round::Three),
            Round::Three => None,
        }
    }

    /// Cumulative walker kills required to leave this round.
    /// The final round ends on the boss, not on a kill count.
    pub fn kill_target(self) -> Option<u32> {
        match self {
            Round::One => Some(ROUND_TWO_KILL_TARGET),
            Round::Two => Some(ROUND_THREE_KILL_TARGET),
            Round::Three => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
        }
    }

    /// Spelled-out round name for banner text.
    pub fn word(self) -> &'static str {
        match self {
            Round::One => "One",
            Round::Two => "Two",
            Round::Three => "Three",
        }
    }
}

/// Session phase (top-level state).
///
/// `Playing` carries the current round; `RoundBreak` freezes the world
/// until the confirm input arrives. `Victory` and `GameOver` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Playing { round: Round },
    RoundBreak { next: Round },
    Victory,
    GameOver,
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Playing { round: Round::One }
    }
}

impl SessionPhase {
    /// The active round, if the session is in a playing phase.
    pub fn round(self) -> Option<Round> {
        match self {
            SessionPhase::Playing { round } => Some(round),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Victory | SessionPhase::GameOver)
    }
}

/// Horizontal facing of the player sprite; decides shot direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit sign along x: -1 for Left, +1 for Right.
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Enemy kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Plain ground enemy marching leftward. One hit point.
    #[default]
    Walker,
    /// The round-three boss. Parks at its hold station, soaks ten hits.
    Boss,
}

/// Which side fired a shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOwner {
    #[default]
    Player,
    Enemy,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Victory,
    Defeat,
}
