//! Move generation and application.
//!
//! Pure functions over a board snapshot. The engine holds no state of its
//! own: the player is always an explicit argument, the board is borrowed for
//! queries and mutated in place only by [`apply_move`]. Out-of-bounds
//! coordinates are a programmer error and panic; game-ending situations are
//! ordinary return values, never errors.

use smallvec::SmallVec;

use crate::core::{Board, Cell, Move, Player, Square, BOARD_SIZE};

/// Move list for a single piece. A piece has at most one move of each kind
/// per direction, so four slots cover every case without allocating.
pub type PieceMoves = SmallVec<[Move; 4]>;

/// What applying a move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub was_capture: bool,
    pub was_promoted: bool,
}

/// Outcome of a finished episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Check whether a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }
}

/// Normal and capture moves for the piece at (row, col).
///
/// An empty square yields two empty lists. Directions are evaluated
/// independently: the same square can yield a step in one direction and a
/// jump in another. A jump requires the landing square two steps out to be
/// empty and the intervening square to hold an enemy piece; the intervening
/// square is recorded as the capture.
#[must_use]
pub fn moves_for_piece(board: &Board, row: usize, col: usize) -> (PieceMoves, PieceMoves) {
    let piece = board.get(row, col);
    let mut normals = PieceMoves::new();
    let mut captures = PieceMoves::new();

    let Some(mover) = piece.owner() else {
        return (normals, captures);
    };
    let enemy = mover.other();
    let from = Square::new(row, col);

    for &(dr, dc) in piece.directions() {
        let (nr, nc) = (row as isize + dr, col as isize + dc);
        if !Board::in_bounds(nr, nc) {
            continue;
        }
        let adjacent_sq = Square::new(nr as usize, nc as usize);
        let adjacent = board.at(adjacent_sq);

        if adjacent == Cell::Empty {
            normals.push(Move::step(from, adjacent_sq));
        }

        let (jr, jc) = (row as isize + 2 * dr, col as isize + 2 * dc);
        if Board::in_bounds(jr, jc)
            && board.get(jr as usize, jc as usize) == Cell::Empty
            && adjacent.owner() == Some(enemy)
        {
            captures.push(Move::jump(
                from,
                Square::new(jr as usize, jc as usize),
                adjacent_sq,
            ));
        }
    }

    (normals, captures)
}

/// Every legal move for `player`, captures trumping normals.
///
/// The forced-capture rule is global: if any capture exists anywhere among
/// the player's pieces, only captures are returned. Squares are scanned
/// row-major and directions in [`Cell::directions`] order, so the result
/// order is reproducible for a given board. When `forced_origin` is given,
/// only that square's piece is considered (multi-jump continuation). An
/// empty result means the player has no legal move — a loss condition the
/// caller detects.
#[must_use]
pub fn legal_moves(board: &Board, player: Player, forced_origin: Option<Square>) -> Vec<Move> {
    let mut normals = Vec::new();
    let mut captures = Vec::new();

    for sq in Board::squares() {
        if board.at(sq).owner() != Some(player) {
            continue;
        }
        if let Some(origin) = forced_origin {
            if sq != origin {
                continue;
            }
        }
        let (piece_normals, piece_captures) = moves_for_piece(board, sq.row, sq.col);
        normals.extend(piece_normals);
        captures.extend(piece_captures);
    }

    if captures.is_empty() {
        normals
    } else {
        captures
    }
}

/// Apply `mv` to the board in place.
///
/// The origin is cleared, the mover's current symbol lands on the
/// destination, the captured square (if any) is emptied, and only then is
/// promotion evaluated on the arrival row. Continuation logic reads the
/// already-promoted symbol, so this ordering is load-bearing.
pub fn apply_move(board: &mut Board, mv: &Move) -> MoveOutcome {
    let piece = board.at(mv.from);
    board.set_at(mv.from, Cell::Empty);
    board.set_at(mv.to, piece);

    let was_capture = match mv.captured {
        Some(sq) => {
            board.set_at(sq, Cell::Empty);
            true
        }
        None => false,
    };

    let promoted = promote_on_row(piece, mv.to.row);
    let was_promoted = promoted != piece;
    if was_promoted {
        board.set_at(mv.to, promoted);
    }

    MoveOutcome {
        was_capture,
        was_promoted,
    }
}

/// Men reaching the farthest row for their side become kings; kings and
/// empty cells are unchanged.
fn promote_on_row(piece: Cell, row: usize) -> Cell {
    match piece {
        Cell::BlackMan if row == BOARD_SIZE - 1 => Cell::BlackKing,
        Cell::RedMan if row == 0 => Cell::RedKing,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::empty();
        let (normals, captures) = moves_for_piece(&board, 2, 1);
        assert!(normals.is_empty());
        assert!(captures.is_empty());
    }

    #[test]
    fn test_man_steps_forward_only() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);

        let (normals, captures) = moves_for_piece(&board, 2, 1);
        assert!(captures.is_empty());
        assert_eq!(normals.len(), 2);
        assert!(normals.iter().all(|m| m.to.row == 3));
    }

    #[test]
    fn test_king_moves_all_four_diagonals() {
        let mut board = Board::empty();
        board.set(2, 3, Cell::RedKing);

        let (normals, captures) = moves_for_piece(&board, 2, 3);
        assert!(captures.is_empty());
        assert_eq!(normals.len(), 4);
    }

    #[test]
    fn test_same_square_yields_step_and_jump_in_different_directions() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);
        board.set(3, 2, Cell::RedMan);

        let (normals, captures) = moves_for_piece(&board, 2, 1);
        assert_eq!(normals.len(), 1);
        assert_eq!(normals[0].to, Square::new(3, 0));
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to, Square::new(4, 3));
        assert_eq!(captures[0].captured, Some(Square::new(3, 2)));
    }

    #[test]
    fn test_jump_blocked_by_occupied_landing_square() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);
        board.set(3, 2, Cell::RedMan);
        board.set(4, 3, Cell::RedMan);

        let (_, captures) = moves_for_piece(&board, 2, 1);
        assert!(captures.is_empty());
    }

    #[test]
    fn test_no_jump_over_friendly_piece() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);
        board.set(3, 2, Cell::BlackMan);

        let (_, captures) = moves_for_piece(&board, 2, 1);
        assert!(captures.is_empty());
    }

    #[test]
    fn test_captures_trump_normals_globally() {
        // The capture belongs to one piece; a different piece with only
        // quiet moves must be silenced by it.
        let mut board = Board::empty();
        board.set(0, 1, Cell::BlackMan);
        board.set(2, 1, Cell::BlackMan);
        board.set(3, 2, Cell::RedMan);

        let moves = legal_moves(&board, Player::Black, None);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
        assert_eq!(moves[0].from, Square::new(2, 1));
    }

    #[test]
    fn test_forced_origin_restricts_to_one_piece() {
        let mut board = Board::empty();
        board.set(0, 1, Cell::BlackMan);
        board.set(2, 1, Cell::BlackMan);

        let moves = legal_moves(&board, Player::Black, Some(Square::new(2, 1)));
        assert!(moves.iter().all(|m| m.from == Square::new(2, 1)));
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let mut board = Board::empty();
        board.set(1, 0, Cell::BlackMan);
        board.set(0, 1, Cell::BlackMan);

        let moves = legal_moves(&board, Player::Black, None);
        assert!(!moves.is_empty());
        assert_eq!(moves[0].from, Square::new(0, 1));
    }

    #[test]
    fn test_apply_step_moves_piece() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);

        let mv = Move::step(Square::new(2, 1), Square::new(3, 0));
        let outcome = apply_move(&mut board, &mv);

        assert!(!outcome.was_capture);
        assert!(!outcome.was_promoted);
        assert_eq!(board.get(2, 1), Cell::Empty);
        assert_eq!(board.get(3, 0), Cell::BlackMan);
    }

    #[test]
    fn test_apply_jump_removes_captured_piece() {
        let mut board = Board::empty();
        board.set(2, 1, Cell::BlackMan);
        board.set(3, 2, Cell::RedMan);

        let mv = Move::jump(Square::new(2, 1), Square::new(4, 3), Square::new(3, 2));
        let outcome = apply_move(&mut board, &mv);

        assert!(outcome.was_capture);
        assert!(!outcome.was_promoted);
        assert_eq!(board.get(3, 2), Cell::Empty);
        assert_eq!(board.get(4, 3), Cell::BlackMan);
    }

    #[test]
    fn test_black_promotes_on_last_row() {
        let mut board = Board::empty();
        board.set(4, 1, Cell::BlackMan);

        let mv = Move::step(Square::new(4, 1), Square::new(5, 0));
        let outcome = apply_move(&mut board, &mv);

        assert!(outcome.was_promoted);
        assert_eq!(board.get(5, 0), Cell::BlackKing);
    }

    #[test]
    fn test_red_promotes_on_row_zero() {
        let mut board = Board::empty();
        board.set(1, 2, Cell::RedMan);

        let mv = Move::step(Square::new(1, 2), Square::new(0, 1));
        let outcome = apply_move(&mut board, &mv);

        assert!(outcome.was_promoted);
        assert_eq!(board.get(0, 1), Cell::RedKing);
    }

    #[test]
    fn test_king_never_promotes_again() {
        let mut board = Board::empty();
        board.set(4, 1, Cell::BlackKing);

        let mv = Move::step(Square::new(4, 1), Square::new(5, 0));
        let outcome = apply_move(&mut board, &mv);

        assert!(!outcome.was_promoted);
        assert_eq!(board.get(5, 0), Cell::BlackKing);
    }

    #[test]
    fn test_game_outcome_is_winner() {
        assert!(GameOutcome::Winner(Player::Black).is_winner(Player::Black));
        assert!(!GameOutcome::Winner(Player::Black).is_winner(Player::Red));
        assert!(!GameOutcome::Draw.is_winner(Player::Black));
        assert!(!GameOutcome::Draw.is_winner(Player::Red));
    }
}
