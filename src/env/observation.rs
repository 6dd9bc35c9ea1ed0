//! What a step reports back to the caller.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, BOARD_SIZE};
use crate::rules::GameOutcome;

/// Snapshot handed to agents: the encoded board plus the player to move.
///
/// Hashable and cheap to copy, so it doubles as the tabular state key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// One [`crate::core::Cell::code`] per cell, row-major.
    pub board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub to_move: Player,
}

impl Observation {
    #[must_use]
    pub fn new(board: &Board, to_move: Player) -> Self {
        Self {
            board: board.encode(),
            to_move,
        }
    }
}

/// Side-channel facts about a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Final outcome; `None` while the episode is in progress.
    pub winner: Option<GameOutcome>,
    /// True when the action index fell outside the current legal set.
    pub invalid_action: bool,
    /// `action_mask[i]` is true iff `i` indexes a current legal move.
    /// Length is the configured action-space bound.
    pub action_mask: Vec<bool>,
}

/// Everything `step` returns.
#[derive(Clone, Debug)]
pub struct StepResult {
    pub observation: Observation,
    /// From the perspective of the player who took the action.
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}
