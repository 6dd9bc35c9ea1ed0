//! Core types shared by the rule engine, environment, agents, and training:
//! the board, moves, and deterministic RNG.

pub mod board;
pub mod moves;
pub mod rng;

pub use board::{Board, Cell, Player, Square, BOARD_SIZE};
pub use moves::Move;
pub use rng::GameRng;
