use crate::game_state::{chess_types::*, game_state::GameState};

/// Checkmate is impossible: bare kings, or exactly one side holds a single
/// minor piece while the other has only its king.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut non_king = [0usize; 2];
    let mut minors = [0usize; 2];

    for (_, piece) in game_state.pieces() {
        if piece.kind == PieceKind::King {
            continue;
        }
        non_king[piece.color.index()] += 1;
        if piece.kind.is_minor() {
            minors[piece.color.index()] += 1;
        }
    }

    let white = Color::White.index();
    let black = Color::Black.index();

    if non_king[white] == 0 && non_king[black] == 0 {
        return true;
    }

    let lone_minor = |side: usize, other: usize| {
        non_king[side] == 1 && minors[side] == 1 && non_king[other] == 0
    };
    lone_minor(white, black) || lone_minor(black, white)
}
