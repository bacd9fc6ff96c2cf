//! Game-end classification.
//!
//! Conditions are checked in a fixed priority order: no legal moves
//! (checkmate or stalemate) first, then insufficient material, threefold
//! repetition and the fifty-move rule.

use std::fmt;

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::outcome::insufficient_material::is_insufficient_material;
use crate::outcome::repetition::{is_fifty_move_rule, is_threefold_repetition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    /// The side to move is mated.
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

impl GameOutcome {
    #[inline]
    pub fn is_game_over(self) -> bool {
        self != GameOutcome::Ongoing
    }

    /// Winner given the side that was to move when the outcome was read.
    pub fn winner(self, side_to_move: Color) -> Option<Color> {
        match self {
            GameOutcome::Checkmate => Some(side_to_move.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "ongoing"),
            GameOutcome::Checkmate => write!(f, "checkmate"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::Draw(reason) => write!(f, "draw: {reason}"),
        }
    }
}

pub fn evaluate_game_outcome(game_state: &GameState) -> GameOutcome {
    if !has_legal_move(game_state) {
        return if is_king_in_check(game_state, game_state.side_to_move) {
            GameOutcome::Checkmate
        } else {
            GameOutcome::Stalemate
        };
    }

    if is_insufficient_material(game_state) {
        return GameOutcome::Draw(DrawReason::InsufficientMaterial);
    }
    if is_threefold_repetition(game_state) {
        return GameOutcome::Draw(DrawReason::ThreefoldRepetition);
    }
    if is_fifty_move_rule(game_state) {
        return GameOutcome::Draw(DrawReason::FiftyMoveRule);
    }

    GameOutcome::Ongoing
}
