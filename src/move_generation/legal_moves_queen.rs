use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub fn generate_queen_moves(game_state: &GameState, from: Position, color: Color, out: &mut Vec<Move>) {
    generate_rook_moves(game_state, from, color, out);
    generate_bishop_moves(game_state, from, color, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let game = GameState::from_fen("7k/8/8/8/3Q4/8/8/1K6 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_queen_moves(&game, Position::new(4, 3), Color::White, &mut out);
        // 14 orthogonal + 13 diagonal from d4 (h8 holds the enemy king: capture).
        assert_eq!(out.len(), 27);
        assert_eq!(out.iter().filter(|mv| mv.is_capture).count(), 1);
    }
}
