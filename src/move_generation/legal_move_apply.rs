//! Mechanical move application.
//!
//! `apply_move` trusts its input: legality is decided by the caller (the
//! legality filter or `GameState::try_apply_move`).

use tracing::{debug, warn};

use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Executes `mv` on `game_state` in place.
///
/// Effects, in order: en-passant removal, castling rook relocation, the piece
/// move itself, en-passant target, castling rights, promotion, side to move,
/// clocks, and finally the position history entry.
pub fn apply_move(game_state: &mut GameState, mv: &Move) {
    if apply_board_effects(game_state, mv) {
        let key = game_state.position_key();
        game_state.position_history.push(key);
    }
}

/// `apply_move` without the history entry, for throwaway simulations.
pub(crate) fn apply_move_unrecorded(game_state: &mut GameState, mv: &Move) {
    apply_board_effects(game_state, mv);
}

/// Everything except the history append. Returns false for a no-op input.
fn apply_board_effects(game_state: &mut GameState, mv: &Move) -> bool {
    let Some(moving_piece) = game_state.piece_at(mv.from) else {
        warn!(?mv, "apply_move called with an empty origin square");
        return false;
    };
    if !mv.to.is_on_board() {
        warn!(?mv, "apply_move called with an off-board destination");
        return false;
    }

    let mut captured = None;

    if mv.is_en_passant {
        captured = game_state.take_piece(Position::new(mv.from.row, mv.to.col));
    }

    if mv.is_castling && moving_piece.kind == PieceKind::King {
        relocate_castling_rook(game_state, mv);
    }

    let moved = game_state.take_piece(mv.from);
    if let Some(occupant) = game_state.piece_at(mv.to) {
        captured = Some(occupant);
    }
    game_state.set_piece(mv.to, moved);

    game_state.en_passant_target = if moving_piece.kind == PieceKind::Pawn
        && (mv.to.row - mv.from.row).abs() == 2
    {
        Some(Position::new(
            mv.from.row + moving_piece.color.pawn_direction(),
            mv.from.col,
        ))
    } else {
        None
    };

    update_castling_rights(game_state, moving_piece, mv);

    if let Some(promotion) = mv.promotion {
        promote(game_state, mv.to, promotion);
    }

    game_state.side_to_move = moving_piece.color.opposite();

    if moving_piece.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_piece.color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    debug!(
        ?mv,
        piece = ?moving_piece,
        captured = ?captured,
        halfmove_clock = game_state.halfmove_clock,
        "applied move"
    );
    true
}

fn relocate_castling_rook(game_state: &mut GameState, mv: &Move) {
    let row = mv.from.row;
    let (rook_from, rook_to) = match mv.to.col {
        KINGSIDE_KING_TARGET_COL => (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL),
        QUEENSIDE_KING_TARGET_COL => (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL),
        _ => return,
    };
    let rook = game_state.take_piece(Position::new(row, rook_from));
    game_state.set_piece(Position::new(row, rook_to), rook);
}

fn update_castling_rights(game_state: &mut GameState, moving_piece: Piece, mv: &Move) {
    if moving_piece.kind == PieceKind::King {
        game_state.castling_rights &=
            !(kingside_right(moving_piece.color) | queenside_right(moving_piece.color));
    }

    // Anything leaving or landing on a rook home square ends that right.
    for square in [mv.from, mv.to] {
        if let Some(right) = rook_home_right(square) {
            game_state.castling_rights &= !right;
        }
    }
}

/// Castling right tied to the rook that starts on `square`, if any.
fn rook_home_right(square: Position) -> Option<CastlingRights> {
    for color in [Color::White, Color::Black] {
        if square.row != color.home_row() {
            continue;
        }
        return match square.col {
            KINGSIDE_ROOK_COL => Some(kingside_right(color)),
            QUEENSIDE_ROOK_COL => Some(queenside_right(color)),
            _ => None,
        };
    }
    None
}

fn promote(game_state: &mut GameState, square: Position, promotion: PieceKind) {
    if !promotion.is_promotion_choice() {
        return;
    }
    let Some(pawn) = game_state.piece_at(square) else {
        return;
    };
    if pawn.kind == PieceKind::Pawn && square.row == pawn.color.promotion_row() {
        game_state.set_piece(square, Some(Piece::new(promotion, pawn.color)));
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, apply_move_unrecorded};
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn queenside_castling_moves_rook_to_d_file() {
        let mut state = game("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 10");
        apply_move(&mut state, &Move::castling(pos(0, 4), pos(0, 2)));

        assert_eq!(state.piece_at(pos(0, 2)), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(state.piece_at(pos(0, 3)), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(state.piece_at(pos(0, 0)), None);
        assert_eq!(state.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
        assert_eq!(state.halfmove_clock, 4);
        assert_eq!(state.fullmove_number, 11);
        assert_eq!(state.side_to_move, Color::White);
    }

    #[test]
    fn rook_capture_on_home_square_clears_opponent_right() {
        let mut state = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        apply_move(&mut state, &Move::capture(pos(7, 7), pos(0, 7)));

        assert!(!state.has_castling_right(CASTLE_WHITE_KINGSIDE));
        assert!(!state.has_castling_right(CASTLE_BLACK_KINGSIDE));
        assert!(state.has_castling_right(CASTLE_WHITE_QUEENSIDE));
        assert!(state.has_castling_right(CASTLE_BLACK_QUEENSIDE));
        assert_eq!(state.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_target_lives_for_one_ply() {
        let mut state = GameState::new_game();
        apply_move(&mut state, &Move::new(pos(6, 4), pos(4, 4)));
        assert_eq!(state.en_passant_target, Some(pos(5, 4)));

        apply_move(&mut state, &Move::new(pos(0, 6), pos(2, 5)));
        assert_eq!(state.en_passant_target, None);

        apply_move(&mut state, &Move::new(pos(7, 6), pos(5, 5)));
        apply_move(&mut state, &Move::new(pos(1, 3), pos(3, 3)));
        assert_eq!(state.en_passant_target, Some(pos(2, 3)));
    }

    #[test]
    fn promotion_replaces_pawn_with_requested_kind() {
        let mut state = game("1r5k/P7/8/8/8/8/8/K7 w - - 5 40");
        apply_move(
            &mut state,
            &Move::capture(pos(1, 0), pos(0, 1)).with_promotion(PieceKind::Rook),
        );

        assert_eq!(state.piece_at(pos(0, 1)), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(state.piece_at(pos(1, 0)), None);
        assert_eq!(state.halfmove_clock, 0);
    }

    #[test]
    fn quiet_piece_moves_advance_halfmove_clock() {
        let mut state = GameState::new_game();
        apply_move(&mut state, &Move::new(pos(7, 6), pos(5, 5)));
        apply_move(&mut state, &Move::new(pos(0, 1), pos(2, 2)));
        assert_eq!(state.halfmove_clock, 2);
        assert_eq!(state.fullmove_number, 2);
        assert_eq!(state.position_history.len(), 2);
    }

    #[test]
    fn unrecorded_apply_matches_apply_except_history() {
        let mut recorded = GameState::new_game();
        let mut simulated = recorded.without_history();
        let mv = Move::new(pos(6, 4), pos(4, 4));

        apply_move(&mut recorded, &mv);
        apply_move_unrecorded(&mut simulated, &mv);

        assert_eq!(recorded.position_history.len(), 1);
        assert!(simulated.position_history.is_empty());
        assert_eq!(simulated.get_fen(), recorded.get_fen());
    }

    #[test]
    fn empty_origin_is_a_no_op() {
        let mut state = GameState::new_game();
        let before = state.clone();
        apply_move(&mut state, &Move::new(pos(4, 4), pos(3, 4)));
        assert_eq!(state, before);
    }
}
