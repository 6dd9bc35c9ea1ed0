//! Move-selection strategies.
//!
//! Every strategy exposes one capability: pick an index into the current
//! legal-move list. Callers dispatch through the trait and never inspect the
//! concrete type. Strategies that sample randomness own their seeded
//! [`crate::core::GameRng`].

pub mod heuristic;
pub mod q_table;
pub mod random;

pub use heuristic::{evaluate_board, HeuristicAgent, Weights};
pub use q_table::{QTable, QTableAgent, QTableError};
pub use random::RandomAgent;

use crate::core::{Board, Move, Player};

/// A move-selection strategy.
pub trait Agent {
    /// Index of the chosen move in `legal_moves`.
    ///
    /// With a non-empty list the result is always in range; the degenerate
    /// empty list returns 0 by convention (the environment turns any index
    /// into a forfeit when nothing is legal).
    fn select_move_index(&mut self, board: &Board, player: Player, legal_moves: &[Move]) -> usize;
}
