use crate::game_state::chess_rules::{FIFTY_MOVE_PLY_LIMIT, REPETITION_DRAW_COUNT};
use crate::game_state::game_state::GameState;

/// Times the current position key occurs in the recorded history, the
/// current entry included.
pub fn repetition_count(game_state: &GameState) -> usize {
    let current = game_state.position_key();
    game_state
        .position_history
        .iter()
        .filter(|key| **key == current)
        .count()
}

pub fn is_threefold_repetition(game_state: &GameState) -> bool {
    repetition_count(game_state) >= REPETITION_DRAW_COUNT
}

pub fn is_fifty_move_rule(game_state: &GameState) -> bool {
    game_state.halfmove_clock >= FIFTY_MOVE_PLY_LIMIT
}
