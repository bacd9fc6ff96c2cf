//! Pseudo-legal move generation.
//!
//! Dispatches on the kind of the piece standing on the origin square. The
//! piece's own color decides direction and friend/enemy, not the side to
//! move, so the same entry points serve both sides.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub fn generate_pseudo_legal(game_state: &GameState, origin: Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    generate_pseudo_legal_into(game_state, origin, &mut out);
    out
}

pub fn generate_pseudo_legal_for_side(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(128);
    for (origin, piece) in game_state.pieces() {
        if piece.color == color {
            generate_pseudo_legal_into(game_state, origin, &mut out);
        }
    }
    out
}

pub fn generate_pseudo_legal_into(game_state: &GameState, origin: Position, out: &mut Vec<Move>) {
    let Some(piece) = game_state.piece_at(origin) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, origin, piece.color, out),
        PieceKind::Knight => generate_knight_moves(game_state, origin, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, origin, piece.color, out),
        PieceKind::Rook => generate_rook_moves(game_state, origin, piece.color, out),
        PieceKind::Queen => generate_queen_moves(game_state, origin, piece.color, out),
        PieceKind::King => generate_king_moves(game_state, origin, piece.color, out),
    }
}
