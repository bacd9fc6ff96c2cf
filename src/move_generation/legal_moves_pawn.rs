use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_pawn_moves(game_state: &GameState, from: Position, color: Color, out: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if game_state.piece_at(one).is_none() {
            push_with_promotions(Move::new(from, one), color, out);

            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if game_state.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };

        match game_state.piece_at(to) {
            Some(target) if target.color != color => {
                push_with_promotions(Move::capture(from, to), color, out);
            }
            _ => {
                if from.row == color.en_passant_capture_row()
                    && game_state.en_passant_target == Some(to)
                {
                    out.push(Move::en_passant(from, to));
                }
            }
        }
    }
}

/// Diagonal squares a pawn of `color` on `from` attacks, occupied or not.
pub fn generate_pawn_attack_moves(from: Position, color: Color, out: &mut Vec<Move>) {
    for d_col in [-1i8, 1i8] {
        if let Some(to) = from.offset(color.pawn_direction(), d_col) {
            out.push(Move::capture(from, to));
        }
    }
}

/// Pushes `mv`, or one variant per promotion choice when it lands on the last rank.
fn push_with_promotions(mv: Move, color: Color, out: &mut Vec<Move>) {
    if mv.to.row == color.promotion_row() {
        for kind in PROMOTION_CHOICES {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_pawn_attack_moves, generate_pawn_moves};
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn moves_from(fen: &str, from: Position) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let color = game.piece_at(from).expect("pawn on origin").color;
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, color, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let out = moves_from(crate::game_state::chess_rules::STARTING_POSITION_FEN, Position::new(6, 4));
        assert_eq!(out.len(), 2);
        assert!(out.contains(&Move::new(Position::new(6, 4), Position::new(5, 4))));
        assert!(out.contains(&Move::new(Position::new(6, 4), Position::new(4, 4))));
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        // Black knight on e3 blocks the single push and therefore the double push.
        let out = moves_from("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Position::new(6, 4));
        assert!(out.is_empty());

        // Knight on e4 only blocks the double push.
        let out = moves_from("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", Position::new(6, 4));
        assert_eq!(out, vec![Move::new(Position::new(6, 4), Position::new(5, 4))]);
    }

    #[test]
    fn quiet_and_capturing_promotions_yield_four_variants_each() {
        // White pawn b7, black rooks on a8 and c8, b8 empty.
        let from = Position::new(1, 1);
        let out = moves_from("r1r4k/1P6/8/8/8/8/8/K7 w - - 0 1", from);
        assert_eq!(out.len(), 12);

        for to in [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)] {
            let variants: Vec<&Move> = out.iter().filter(|mv| mv.to == to).collect();
            assert_eq!(variants.len(), 4);
            for kind in PROMOTION_CHOICES {
                assert!(variants.iter().any(|mv| mv.promotion == Some(kind)));
            }
            assert!(variants.iter().all(|mv| mv.from == from));
            assert!(variants.iter().all(|mv| mv.is_capture == (to.col != 1)));
        }
    }

    #[test]
    fn black_pawn_promotes_on_row_seven() {
        let out = moves_from("4k3/8/8/8/8/8/6p1/K7 b - - 0 1", Position::new(6, 6));
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|mv| mv.to == Position::new(7, 6) && mv.promotion.is_some()));
    }

    #[test]
    fn en_passant_is_generated_onto_the_target_square() {
        let out = moves_from("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", Position::new(3, 4));
        let ep: Vec<&Move> = out.iter().filter(|mv| mv.is_en_passant).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, Position::new(2, 3));
        assert!(ep[0].is_capture);

        let out = moves_from("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2", Position::new(3, 4));
        assert!(out.iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn side_that_just_double_pushed_gets_no_en_passant() {
        // After 1.e4 the target e3 sits diagonally in front of White's d2 and f2 pawns.
        let game = GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        for from in [Position::new(6, 3), Position::new(6, 5)] {
            let mut out = Vec::new();
            generate_pawn_moves(&game, from, Color::White, &mut out);
            assert!(out.iter().all(|mv| !mv.is_en_passant), "{from:?}");
        }

        let all = crate::move_generation::move_generator::generate_pseudo_legal_for_side(&game, Color::White);
        assert!(all.iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn attack_moves_cover_both_diagonals_regardless_of_occupancy() {
        let mut out = Vec::new();
        generate_pawn_attack_moves(Position::new(6, 0), Color::White, &mut out);
        assert_eq!(out, vec![Move::capture(Position::new(6, 0), Position::new(5, 1))]);

        let mut out = Vec::new();
        generate_pawn_attack_moves(Position::new(3, 4), Color::Black, &mut out);
        assert_eq!(out.len(), 2);
    }
}
