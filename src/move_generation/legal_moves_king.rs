use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Single-step king moves plus castling.
pub fn generate_king_moves(game_state: &GameState, from: Position, color: Color, out: &mut Vec<Move>) {
    generate_king_step_moves(game_state, from, color, out);
    generate_castling_moves(game_state, from, color, out);
}

/// The eight adjacent squares only. Attack detection uses this directly so
/// that castling never recurses into itself.
pub fn generate_king_step_moves(
    game_state: &GameState,
    from: Position,
    color: Color,
    out: &mut Vec<Move>,
) {
    push_step_moves(game_state, from, color, &KING_OFFSETS, out);
}

fn generate_castling_moves(game_state: &GameState, from: Position, color: Color, out: &mut Vec<Move>) {
    let row = color.home_row();
    if from != Position::new(row, KING_HOME_COL) {
        return;
    }

    let sides = [
        (
            kingside_right(color),
            KINGSIDE_ROOK_COL,
            KINGSIDE_KING_TARGET_COL,
        ),
        (
            queenside_right(color),
            QUEENSIDE_ROOK_COL,
            QUEENSIDE_KING_TARGET_COL,
        ),
    ];

    for (right, rook_col, target_col) in sides {
        if !game_state.has_castling_right(right) {
            continue;
        }

        let (low, high) = if rook_col > KING_HOME_COL {
            (KING_HOME_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_HOME_COL)
        };
        if (low..high).any(|col| game_state.piece_at(Position::new(row, col)).is_some()) {
            continue;
        }

        if game_state.piece_at(Position::new(row, rook_col)) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        // King's square, the square it crosses and its destination.
        let step = (target_col - KING_HOME_COL).signum();
        let king_path = [KING_HOME_COL, KING_HOME_COL + step, target_col];
        let enemy = color.opposite();
        if king_path
            .iter()
            .any(|&col| is_square_attacked(game_state, Position::new(row, col), enemy))
        {
            continue;
        }

        out.push(Move::castling(from, Position::new(row, target_col)));
    }
}
