//! # checkers-rl
//!
//! A 6x6 checkers (draughts) engine with a gym-style environment for
//! reinforcement learning.
//!
//! ## Design Principles
//!
//! 1. **One source of truth for legality**: every caller — environment,
//!    heuristics, training — goes through the same rule engine, so the
//!    forced-capture rule is enforced exactly once.
//!
//! 2. **Outcomes, not errors**: game-ending situations (no legal moves,
//!    invalid action indices) are terminal transitions with a winner and
//!    reward. Agents and training loops never handle exceptions.
//!
//! 3. **Deterministic by construction**: move ordering is fixed by board
//!    scan order, and every source of randomness is an explicitly seeded
//!    [`GameRng`] owned by its agent.
//!
//! ## Modules
//!
//! - `core`: board, pieces, moves, RNG
//! - `rules`: legal-move generation, forced captures, promotion
//! - `env`: the episode state machine (`reset`/`step`)
//! - `agents`: random, heuristic, and tabular-Q strategies
//! - `training`: Q-learning and head-to-head evaluation
//! - `notation`: human coordinate parsing for front-ends

pub mod agents;
pub mod core;
pub mod env;
pub mod notation;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, Move, Player, Square, BOARD_SIZE};

pub use crate::rules::{apply_move, legal_moves, moves_for_piece, GameOutcome, MoveOutcome};

pub use crate::env::{CheckersEnv, EnvConfig, Observation, StepInfo, StepResult};

pub use crate::agents::{
    Agent, HeuristicAgent, QTable, QTableAgent, QTableError, RandomAgent, Weights,
};

pub use crate::training::{
    evaluate_q_table, matchup, moving_average, play_game, train_q_learning, EvalPoint,
    MatchupResult, OpponentKind, TrainConfig, TrainResult,
};
