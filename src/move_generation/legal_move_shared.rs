use crate::game_state::{chess_types::*, game_state::GameState};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// Step targets for a piece of `color` on `from`: empty squares become quiet
/// moves, enemy squares captures, friendly squares are skipped.
pub fn push_step_moves(
    game_state: &GameState,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(target) if target.color != color => out.push(Move::capture(from, to)),
            Some(_) => {}
        }
    }
}

/// Sliding targets along each direction until the first occupied square,
/// which is included as a capture only when it holds an enemy piece.
pub fn push_ray_moves(
    game_state: &GameState,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) => {
                    if target.color != color {
                        out.push(Move::capture(from, to));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
