use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_ray_moves, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(game_state: &GameState, from: Position, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, color, &DIAGONAL_DIRECTIONS, out);
}
