//! Move-path enumeration ("perft") over the legal move generator.
//!
//! Leaf statistics follow the conventional perft tables so results can be
//! compared against published reference counts.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Full leaf statistics to `depth` plies.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state) {
        let mut next = game_state.clone();
        next.apply_move(&mv);

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(mv.is_capture);
            total.en_passant += usize::from(mv.is_en_passant);
            total.castles += usize::from(mv.is_castling);
            total.promotions += usize::from(mv.promotion.is_some());
            if is_king_in_check(&next, next.side_to_move) {
                total.checks += 1;
                total.checkmates += usize::from(!has_legal_move(&next));
            }
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }
    total
}

/// Leaf node count only; skips the per-leaf check classification.
pub fn perft_nodes(game_state: &GameState, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(game_state);
    if depth == 1 {
        return moves.len();
    }

    moves
        .iter()
        .map(|mv| {
            let mut next = game_state.clone();
            next.apply_move(mv);
            perft_nodes(&next, depth - 1)
        })
        .sum()
}

/// Per-root-move node counts, sorted by long algebraic notation.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out: Vec<(String, usize)> = legal_moves(game_state)
        .iter()
        .map(|mv| {
            let mut next = game_state.clone();
            next.apply_move(mv);
            (
                crate::utils::long_algebraic::move_to_long_algebraic(mv),
                perft_nodes(&next, depth - 1),
            )
        })
        .collect();
    out.sort();
    out
}
