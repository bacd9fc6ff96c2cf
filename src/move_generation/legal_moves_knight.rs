use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(game_state: &GameState, from: Position, color: Color, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, color, &KNIGHT_OFFSETS, out);
}
