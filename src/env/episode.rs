//! The episode state machine.
//!
//! Owns the mutable game state and drives it forward one action at a time
//! using the rule engine. Game-ending situations — no legal response, an
//! out-of-range action — are terminal transitions with a winner and reward,
//! never errors, so agents and training loops can treat every step
//! uniformly. `step` reads and fully commits state before returning; there
//! are no partial states and no internal synchronization — use one instance
//! per logical game.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Move, Player, Square};
use crate::rules::{apply_move, legal_moves, GameOutcome};

use super::observation::{Observation, StepInfo, StepResult};

/// Environment limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Action-space bound: indices at or above this are invalid even when
    /// more legal moves exist, and the action mask has this length.
    pub max_moves: usize,
    /// Ply limit: once this many actions have been accepted, the next step
    /// truncates the episode with a draw.
    pub max_turns: u32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_moves: 64,
            max_turns: 200,
        }
    }
}

impl EnvConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        assert!(max_moves > 0, "action space must be non-empty");
        self.max_moves = max_moves;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Single-step 6x6 checkers environment.
///
/// State is `{board, player to move, forced origin, legal moves, turn
/// count}`. `forced_origin` is set right after a capture that leaves further
/// captures available from the landed square — the same player must then
/// continue jumping with that piece — and cleared on any move that does not
/// chain. After a terminal result the caller must `reset` to continue.
#[derive(Clone, Debug)]
pub struct CheckersEnv {
    config: EnvConfig,
    board: Board,
    to_move: Player,
    forced_origin: Option<Square>,
    legal: Vec<Move>,
    turn_count: u32,
    seed: u64,
}

impl CheckersEnv {
    #[must_use]
    pub fn new(config: EnvConfig) -> Self {
        let mut env = Self {
            config,
            board: Board::new(),
            to_move: Player::Black,
            forced_origin: None,
            legal: Vec::new(),
            turn_count: 0,
            seed: 0,
        };
        env.refresh_legal();
        env
    }

    /// Reinitialize to the starting position, Black to move.
    ///
    /// The layout is deterministic; the seed never affects board geometry.
    /// It is recorded and exposed through [`CheckersEnv::seed`] so
    /// collaborators that sample randomness can derive their streams from it.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, StepInfo) {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self.board = Board::new();
        self.to_move = Player::Black;
        self.forced_origin = None;
        self.turn_count = 0;
        self.refresh_legal();
        (
            self.observation(),
            StepInfo {
                winner: None,
                invalid_action: false,
                action_mask: self.action_mask(),
            },
        )
    }

    /// Accept one action index into the current legal-move list.
    pub fn step(&mut self, action: usize) -> StepResult {
        if self.turn_count >= self.config.max_turns {
            return self.result(0.0, false, true, Some(GameOutcome::Draw), false);
        }

        if self.legal.is_empty() {
            // No legal response existed after the previous transition; the
            // mover loses on the spot.
            return self.result(
                -1.0,
                true,
                false,
                Some(GameOutcome::Winner(self.to_move.other())),
                false,
            );
        }

        if action >= self.legal.len() || action >= self.config.max_moves {
            return self.result(
                -1.0,
                true,
                false,
                Some(GameOutcome::Winner(self.to_move.other())),
                true,
            );
        }

        let mv = self.legal[action];
        let outcome = apply_move(&mut self.board, &mv);
        self.turn_count += 1;

        if outcome.was_capture && !outcome.was_promoted {
            let chain: Vec<Move> = legal_moves(&self.board, self.to_move, Some(mv.to))
                .into_iter()
                .filter(|m| m.is_capture())
                .collect();
            if !chain.is_empty() {
                // Multi-jump: the same player must keep capturing with the
                // piece that just landed.
                self.forced_origin = Some(mv.to);
                self.legal = chain;
                return self.result(0.0, false, false, None, false);
            }
        }

        self.forced_origin = None;
        self.to_move = self.to_move.other();
        self.refresh_legal();

        if self.legal.is_empty() {
            return self.result(
                1.0,
                true,
                false,
                Some(GameOutcome::Winner(self.to_move.other())),
                false,
            );
        }

        self.result(0.0, false, false, None, false)
    }

    /// Install an arbitrary position, e.g. for analysis or tests.
    ///
    /// Clears any pending forced continuation and recomputes the legal set;
    /// the turn counter is left untouched.
    pub fn load_position(&mut self, board: Board, to_move: Player) {
        self.board = board;
        self.to_move = to_move;
        self.forced_origin = None;
        self.refresh_legal();
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::new(&self.board, self.to_move)
    }

    /// Boolean mask over the action-index range: true below the current
    /// legal-move count.
    #[must_use]
    pub fn action_mask(&self) -> Vec<bool> {
        let legal = self.legal.len().min(self.config.max_moves);
        (0..self.config.max_moves).map(|i| i < legal).collect()
    }

    /// Index of the legal move matching a human-chosen from/to pair.
    #[must_use]
    pub fn find_action(&self, from: Square, to: Square) -> Option<usize> {
        self.legal.iter().position(|m| m.from == from && m.to == to)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn forced_origin(&self) -> Option<Square> {
        self.forced_origin
    }

    /// The current legal moves, in the engine's deterministic order.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    /// Number of accepted actions since the last reset.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The seed recorded by the last [`CheckersEnv::reset`].
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    fn refresh_legal(&mut self) {
        self.legal = legal_moves(&self.board, self.to_move, self.forced_origin);
    }

    fn result(
        &self,
        reward: f64,
        terminated: bool,
        truncated: bool,
        winner: Option<GameOutcome>,
        invalid_action: bool,
    ) -> StepResult {
        StepResult {
            observation: self.observation(),
            reward,
            terminated,
            truncated,
            info: StepInfo {
                winner,
                invalid_action,
                action_mask: self.action_mask(),
            },
        }
    }
}

impl Default for CheckersEnv {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}
