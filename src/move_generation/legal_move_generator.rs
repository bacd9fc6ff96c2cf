//! Legal move filtering.
//!
//! Every pseudo-legal candidate is applied to a throwaway clone of the state
//! and kept only if the mover's king is not attacked afterwards. Pins,
//! discovered checks and en-passant exposures all fall out of that single
//! test.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_unrecorded;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_pseudo_legal, generate_pseudo_legal_for_side};

/// All legal moves for the side to move.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mover = game_state.side_to_move;
    filter_legal(game_state, mover, generate_pseudo_legal_for_side(game_state, mover))
}

/// Legal moves of the piece on `origin`. Empty unless that piece belongs to
/// the side to move.
pub fn legal_moves_from(game_state: &GameState, origin: Position) -> Vec<Move> {
    let mover = game_state.side_to_move;
    match game_state.piece_at(origin) {
        Some(piece) if piece.color == mover => {
            filter_legal(game_state, mover, generate_pseudo_legal(game_state, origin))
        }
        _ => Vec::new(),
    }
}

/// Does the side to move have at least one legal move?
pub fn has_legal_move(game_state: &GameState) -> bool {
    let mover = game_state.side_to_move;
    generate_pseudo_legal_for_side(game_state, mover)
        .iter()
        .any(|mv| leaves_king_safe(game_state, mover, mv))
}

/// Simulates `mv` on a history-free copy and reports whether `mover`'s king survives it.
pub fn leaves_king_safe(game_state: &GameState, mover: Color, mv: &Move) -> bool {
    let mut next = game_state.without_history();
    apply_move_unrecorded(&mut next, mv);
    !is_king_in_check(&next, mover)
}

fn filter_legal(game_state: &GameState, mover: Color, candidates: Vec<Move>) -> Vec<Move> {
    candidates
        .into_iter()
        .filter(|mv| {
            let safe = leaves_king_safe(game_state, mover, mv);
            if !safe {
                trace!(?mv, "candidate leaves own king attacked");
            }
            safe
        })
        .collect()
}
