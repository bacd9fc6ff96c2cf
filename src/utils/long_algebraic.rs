//! Coordinate move text such as `e2e4` or `e7e8q`.
//!
//! Parsed moves carry squares and an optional promotion only. Special-move
//! flags are filled in when the move is matched against the legal list.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub fn parse_long_algebraic(text: &str) -> ChessResult<Move> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;
    let to = algebraic_to_position(&text[2..4])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;

    if text.len() == 4 {
        return Ok(Move::new(from, to));
    }

    let promotion = text[4..]
        .chars()
        .next()
        .and_then(char_to_promotion)
        .ok_or_else(|| ChessError::InvalidMoveText(text.to_owned()))?;

    Ok(Move::new(from, to).with_promotion(promotion))
}

/// Off-board squares render as `??`; legal moves never contain them.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&position_to_algebraic(mv.from).unwrap_or_else(|_| "??".to_owned()));
    out.push_str(&position_to_algebraic(mv.to).unwrap_or_else(|_| "??".to_owned()));

    if let Some(kind) = mv.promotion {
        out.push(promotion_to_char(kind));
    }

    out
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

fn promotion_to_char(kind: PieceKind) -> char {
    kind.fen_char().to_ascii_lowercase()
}
