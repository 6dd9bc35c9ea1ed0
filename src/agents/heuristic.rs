//! One-ply lookahead strategy.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Move, Player, BOARD_SIZE};
use crate::rules::{apply_move, legal_moves};

use super::Agent;

/// Linear evaluation weights. Kings count double on material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub material: f64,
    pub mobility: f64,
    pub advancement: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            material: 1.0,
            mobility: 0.15,
            advancement: 0.08,
        }
    }
}

fn material_score(board: &Board, player: Player) -> f64 {
    let mut mine = 0.0;
    let mut theirs = 0.0;
    for sq in Board::squares() {
        let cell = board.at(sq);
        let Some(owner) = cell.owner() else { continue };
        let value = if cell.is_king() { 2.0 } else { 1.0 };
        if owner == player {
            mine += value;
        } else {
            theirs += value;
        }
    }
    mine - theirs
}

fn mobility_score(board: &Board, player: Player) -> f64 {
    let mine = legal_moves(board, player, None).len();
    let theirs = legal_moves(board, player.other(), None).len();
    mine as f64 - theirs as f64
}

fn advancement_score(board: &Board, player: Player) -> f64 {
    let span = (BOARD_SIZE - 1) as f64;
    let mut score = 0.0;
    for sq in Board::squares() {
        match board.at(sq) {
            Cell::BlackMan => score += sq.row as f64 / span,
            Cell::RedMan => score += (span - sq.row as f64) / span,
            _ => {}
        }
    }
    if player == Player::Black {
        score
    } else {
        -score
    }
}

/// Weighted board score from `player`'s perspective.
#[must_use]
pub fn evaluate_board(board: &Board, player: Player, weights: &Weights) -> f64 {
    weights.material * material_score(board, player)
        + weights.mobility * mobility_score(board, player)
        + weights.advancement * advancement_score(board, player)
}

/// Capture moves the opponent would have available in `board`.
fn immediate_counter_captures(board: &Board, player: Player) -> i64 {
    legal_moves(board, player.other(), None)
        .iter()
        .filter(|m| m.is_capture())
        .count() as i64
}

/// Prefers captures when any exist, then among candidates the move exposing
/// the fewest immediate counter-captures, then the best one-ply board score.
/// First best wins on exact ties, so selection is deterministic.
#[derive(Clone, Debug, Default)]
pub struct HeuristicAgent {
    weights: Weights,
}

impl HeuristicAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_weights(weights: Weights) -> Self {
        Self { weights }
    }
}

impl Agent for HeuristicAgent {
    fn select_move_index(&mut self, board: &Board, player: Player, legal_moves: &[Move]) -> usize {
        if legal_moves.is_empty() {
            return 0;
        }

        let any_capture = legal_moves.iter().any(|m| m.is_capture());

        let mut best_idx = 0;
        let mut best_risk = i64::MIN;
        let mut best_eval = f64::NEG_INFINITY;

        for (idx, mv) in legal_moves.iter().enumerate() {
            if any_capture && !mv.is_capture() {
                continue;
            }

            let mut next = *board;
            apply_move(&mut next, mv);

            let risk = -immediate_counter_captures(&next, player);
            let eval = evaluate_board(&next, player, &self.weights);

            if risk > best_risk || (risk == best_risk && eval > best_eval) {
                best_risk = risk;
                best_eval = eval;
                best_idx = idx;
            }
        }

        best_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square;

    #[test]
    fn test_material_counts_kings_double() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackKing);
        board.set(3, 2, Cell::RedMan);

        assert_eq!(material_score(&board, Player::Black), 1.0);
        assert_eq!(material_score(&board, Player::Red), -1.0);
    }

    #[test]
    fn test_evaluate_board_prefers_material_lead() {
        let mut ahead = Board::empty();
        ahead.set(2, 1, Cell::BlackMan);
        ahead.set(2, 3, Cell::BlackMan);
        ahead.set(3, 2, Cell::RedMan);

        let mut behind = Board::empty();
        behind.set(2, 1, Cell::BlackMan);
        behind.set(3, 2, Cell::RedMan);
        behind.set(3, 4, Cell::RedMan);

        let weights = Weights::default();
        assert!(
            evaluate_board(&ahead, Player::Black, &weights)
                > evaluate_board(&behind, Player::Black, &weights)
        );
    }

    #[test]
    fn test_prefers_capture_over_step() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);
        board.set(3, 2, Cell::RedMan);

        // A hand-built mixed list; the forced-capture rule never produces
        // one, but the strategy must still favor the capture.
        let moves = [
            Move::step(Square::new(2, 1), Square::new(3, 0)),
            Move::jump(Square::new(2, 1), Square::new(4, 3), Square::new(3, 2)),
        ];

        let mut agent = HeuristicAgent::new();
        assert_eq!(agent.select_move_index(&board, Player::Black, &moves), 1);
    }

    #[test]
    fn test_avoids_immediate_counter_capture() {
        // Black man at (2,3) can step to (3,2) or (3,4). Red man at (4,1)
        // would answer (3,2) with a jump; (3,4) is safe.
        let mut board = Board::empty();
        board.set(2, 3, Cell::BlackMan);
        board.set(4, 1, Cell::RedMan);

        let moves = legal_moves(&board, Player::Black, None);
        let mut agent = HeuristicAgent::new();
        let idx = agent.select_move_index(&board, Player::Black, &moves);
        assert_eq!(moves[idx].to, Square::new(3, 4));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Black, None);

        let mut a = HeuristicAgent::new();
        let mut b = HeuristicAgent::new();
        assert_eq!(
            a.select_move_index(&board, Player::Black, &moves),
            b.select_move_index(&board, Player::Black, &moves)
        );
    }
}
