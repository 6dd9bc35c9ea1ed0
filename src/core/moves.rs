//! Move representation.

use serde::{Deserialize, Serialize};

use super::board::Square;

/// One atomic move: a diagonal step to an adjacent square, or a jump two
/// squares diagonally over a captured enemy piece.
///
/// A multi-jump is never folded into a single `Move`; the episode state
/// machine chains individual jumps through its forced-continuation
/// mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the captured piece for jumps, `None` for plain steps.
    pub captured: Option<Square>,
}

impl Move {
    /// A non-capturing step to an adjacent diagonal square.
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// A jump landing two squares away, capturing the piece in between.
    #[must_use]
    pub const fn jump(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_not_capture() {
        let mv = Move::step(Square::new(2, 1), Square::new(3, 0));
        assert!(!mv.is_capture());
        assert_eq!(mv.captured, None);
    }

    #[test]
    fn test_jump_records_captured_square() {
        let mv = Move::jump(Square::new(2, 1), Square::new(4, 3), Square::new(3, 2));
        assert!(mv.is_capture());
        assert_eq!(mv.captured, Some(Square::new(3, 2)));
    }

    #[test]
    fn test_move_serde_roundtrip() {
        let mv = Move::jump(Square::new(0, 1), Square::new(2, 3), Square::new(1, 2));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
