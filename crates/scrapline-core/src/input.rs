//! Per-frame input sampled by the frontend.

use serde::{Deserialize, Serialize};

/// The state of the controls for one simulated frame.
///
/// Fields are level-triggered: a held key stays `true` every frame it is
/// down. The engine derives edge behavior (jump, fire, confirm) from its
/// own state, so the frontend only reports what is currently pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
    /// Acknowledges a round break and starts the next round.
    pub confirm: bool,
}
