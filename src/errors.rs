//! Errors used throughout the rules engine.
//!
//! Strict parsers and the harnesses return `ChessResult`. The game-facing
//! boundary (`GameState::try_apply_move`, `GameState::load_from_placement`,
//! `GameState::piece_at`) never surfaces these; it degrades to `false`, an
//! empty board or "no piece" instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN-shaped position string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An algebraic square such as `e4` could not be parsed or is off-board.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Move text such as `e7e8q` is malformed.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The move is well formed but not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A rule invariant was observed broken (for example a legal move that
    /// leaves the mover in check).
    #[error("rule invariant violated: {0}")]
    InvariantViolated(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
