//! Seeded random self-play used to exercise the rules end to end.
//!
//! Each ply picks a uniformly random legal move, applies it, and re-checks
//! that the mover's king is safe and the turn passed. Games stop at the
//! first game-ending outcome or after `max_plies`.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::outcome::game_outcome::GameOutcome;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: 0x5EED_C0DE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub outcome: GameOutcome,
    pub played_moves_lan: Vec<String>,
    pub final_state: GameState,
}

impl PlayoutReport {
    #[inline]
    pub fn plies(&self) -> usize {
        self.played_moves_lan.len()
    }
}

pub fn run_playout(start: &GameState, config: PlayoutConfig) -> ChessResult<PlayoutReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = start.clone();
    let mut played_moves_lan = Vec::new();

    let mut outcome = state.game_outcome();
    while !outcome.is_game_over() && played_moves_lan.len() < usize::from(config.max_plies) {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(ChessError::InvariantViolated(format!(
                "outcome {outcome} reported with no legal moves in {}",
                state.get_fen()
            )));
        }

        let mv = legal[rng.random_range(0..legal.len())];
        let mover = state.side_to_move;
        let lan = move_to_long_algebraic(&mv);
        state.apply_move(&mv);

        if is_king_in_check(&state, mover) {
            return Err(ChessError::InvariantViolated(format!(
                "{lan} left the {mover:?} king in check: {}",
                state.get_fen()
            )));
        }
        if state.side_to_move == mover {
            return Err(ChessError::InvariantViolated(format!(
                "{lan} did not pass the turn"
            )));
        }

        debug!(ply = played_moves_lan.len() + 1, mv = %lan, "playout move");
        played_moves_lan.push(lan);
        outcome = state.game_outcome();
    }

    info!(
        seed = config.seed,
        plies = played_moves_lan.len(),
        %outcome,
        "playout finished"
    );

    Ok(PlayoutReport {
        outcome,
        played_moves_lan,
        final_state: state,
    })
}
