//! Tabular action values and the epsilon-greedy policy over them.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, Move, Player};
use crate::env::Observation;

use super::Agent;

/// Errors from loading or saving a table.
#[derive(Debug, thiserror::Error)]
pub enum QTableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Action values keyed by (observation, legal-move index).
///
/// Missing entries read as 0.0, so an empty table is a uniform policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: FxHashMap<(Observation, usize), f64>,
}

impl QTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, state: &Observation, action: usize) -> f64 {
        self.values.get(&(*state, action)).copied().unwrap_or(0.0)
    }

    /// TD update: move the stored value a fraction `alpha` toward `target`.
    pub fn nudge(&mut self, state: Observation, action: usize, target: f64, alpha: f64) {
        let old = self.get(&state, action);
        self.values.insert((state, action), old + alpha * (target - old));
    }

    /// Highest stored value over actions `0..legal_n`.
    ///
    /// Returns negative infinity for `legal_n == 0`; callers guard on a
    /// non-empty legal set.
    #[must_use]
    pub fn best_value(&self, state: &Observation, legal_n: usize) -> f64 {
        (0..legal_n)
            .map(|a| self.get(state, a))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Action with the highest stored value; first wins on ties.
    #[must_use]
    pub fn greedy_action(&self, state: &Observation, legal_n: usize) -> usize {
        let mut best = 0;
        let mut best_value = f64::NEG_INFINITY;
        for action in 0..legal_n {
            let value = self.get(state, action);
            if value > best_value {
                best_value = value;
                best = action;
            }
        }
        best
    }

    /// Number of stored (state, action) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write the table to `path` in bincode.
    pub fn save(&self, path: &Path) -> Result<(), QTableError> {
        let file = BufWriter::new(File::create(path)?);
        bincode::serialize_into(file, self)?;
        Ok(())
    }

    /// Read a table previously written by [`QTable::save`].
    pub fn load(path: &Path) -> Result<Self, QTableError> {
        let file = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(file)?)
    }
}

/// Epsilon-greedy policy over a learned table.
///
/// With probability `epsilon` a uniform random legal index, otherwise the
/// greedy action. `epsilon = 0.0` plays pure greedy for evaluation.
#[derive(Clone, Debug)]
pub struct QTableAgent<'a> {
    q: &'a QTable,
    epsilon: f64,
    rng: GameRng,
}

impl<'a> QTableAgent<'a> {
    #[must_use]
    pub fn new(q: &'a QTable, epsilon: f64, seed: u64) -> Self {
        Self {
            q,
            epsilon,
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for QTableAgent<'_> {
    fn select_move_index(&mut self, board: &Board, player: Player, legal_moves: &[Move]) -> usize {
        if legal_moves.is_empty() {
            return 0;
        }

        if self.rng.gen_f64() < self.epsilon {
            return self.rng.gen_range_usize(0..legal_moves.len());
        }

        let state = Observation::new(board, player);
        self.q.greedy_action(&state, legal_moves.len())
    }
}
