//! The rule engine: legal-move generation under the forced-capture rule,
//! move application, and promotion.
//!
//! Everything here is a pure function over a board snapshot; the episode
//! state machine, agents, and training all consume this single source of
//! truth for legality.

pub mod engine;

pub use engine::{apply_move, legal_moves, moves_for_piece, GameOutcome, MoveOutcome, PieceMoves};
