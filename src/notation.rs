//! Human coordinate notation.
//!
//! Columns are letters `'a'..'f'` left to right; ranks are digits `'1'..'6'`
//! counting up from Red's back rank, so rank 6 is row 0. Parsing is pure and
//! stateless. Malformed text yields `None` — front-ends re-prompt the user;
//! nothing here ever reaches the engine as an error.

use crate::core::{Square, BOARD_SIZE};

/// Parse a square like `"b6"`. Case-insensitive, surrounding whitespace
/// ignored.
#[must_use]
pub fn parse_square(token: &str) -> Option<Square> {
    let token = token.trim().to_ascii_lowercase();
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let (col_ch, row_ch) = (bytes[0], bytes[1]);
    if col_ch < b'a' || col_ch >= b'a' + BOARD_SIZE as u8 {
        return None;
    }
    if row_ch < b'1' || row_ch >= b'1' + BOARD_SIZE as u8 {
        return None;
    }

    let col = usize::from(col_ch - b'a');
    let row = BOARD_SIZE - usize::from(row_ch - b'0');
    Some(Square::new(row, col))
}

/// Inverse of [`parse_square`].
#[must_use]
pub fn square_name(sq: Square) -> String {
    format!("{}{}", (b'a' + sq.col as u8) as char, BOARD_SIZE - sq.row)
}

/// Parse a move like `"b6 a5"` into its (from, to) squares.
#[must_use]
pub fn parse_move(text: &str) -> Option<(Square, Square)> {
    let mut parts = text.split_whitespace();
    let from = parse_square(parts.next()?)?;
    let to = parse_square(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}
