//! Training and evaluation loops built on the environment.
//!
//! - **q_learning**: tabular Q-learning for the Black side against a fixed
//!   opponent, with periodic greedy evaluation.
//! - **evaluate**: seeded head-to-head series between any two agents.
//!
//! Persistence of a learned table lives with [`crate::agents::QTable`]; what
//! to do with the metrics (plotting, dashboards) is a consumer concern.

pub mod evaluate;
pub mod q_learning;

pub use evaluate::{evaluate_q_table, matchup, play_game, MatchupResult};
pub use q_learning::{
    moving_average, train_q_learning, EvalPoint, OpponentKind, TrainConfig, TrainResult,
};
