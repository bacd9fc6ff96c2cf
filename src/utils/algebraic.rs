//! Square conversions between algebraic coordinates (`e4`) and `Position`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a board position.
#[inline]
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok(Position::new(row, col))
}

/// Convert a board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> ChessResult<String> {
    if !position.is_on_board() {
        return Err(ChessError::InvalidSquare(format!(
            "({}, {})",
            position.row, position.col
        )));
    }

    let file_char = char::from(b'a' + position.col as u8);
    let rank_char = char::from(b'8' - position.row as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::chess_types::Position;

    #[test]
    fn corner_and_centre_squares_convert_both_ways() {
        assert_eq!(algebraic_to_position("a8").expect("a8 should parse"), Position::new(0, 0));
        assert_eq!(algebraic_to_position("h1").expect("h1 should parse"), Position::new(7, 7));
        assert_eq!(algebraic_to_position("e4").expect("e4 should parse"), Position::new(4, 4));
        assert_eq!(position_to_algebraic(Position::new(5, 4)).expect("e3 should convert"), "e3");
    }

    #[test]
    fn rejects_bad_text_and_off_board_positions() {
        assert!(algebraic_to_position("i1").is_err());
        assert!(algebraic_to_position("a9").is_err());
        assert!(algebraic_to_position("e").is_err());
        assert!(position_to_algebraic(Position::new(8, 0)).is_err());
    }
}
