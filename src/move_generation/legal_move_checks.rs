//! Attack and check queries.
//!
//! Attacks are found by running the ordinary move generators for the
//! attacking side rather than with dedicated attack masks, which keeps them
//! consistent with the movement rules by construction. Two deviations from
//! plain pseudo-legal generation apply: pawns attack both diagonals whether
//! or not anything stands there (and never attack by pushing), and kings
//! never castle.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_step_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_attack_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Position> {
    game_state
        .pieces()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(position, _)| position)
}

/// A missing king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Position, attacker_color: Color) -> bool {
    let mut attacks = Vec::with_capacity(64);
    generate_attack_moves_for_side(game_state, attacker_color, &mut attacks);
    attacks.iter().any(|mv| mv.to == square)
}

pub fn generate_attack_moves_for_side(game_state: &GameState, color: Color, out: &mut Vec<Move>) {
    for (from, piece) in game_state.pieces() {
        if piece.color == color {
            generate_attack_moves(game_state, from, piece, out);
        }
    }
}

fn generate_attack_moves(game_state: &GameState, from: Position, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_attack_moves(from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece.color, out),
        PieceKind::King => generate_king_step_moves(game_state, from, piece.color, out),
    }
}
