//! Rule configuration for a game.
//!
//! The only tunable rule today is what counts as "the same position" for
//! repetition detection.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

/// Environment variable consulted by `RulesConfig::from_env`.
pub const REPETITION_KEY_ENV: &str = "CHESS_RULES_REPETITION_KEY";

/// What a position-history entry records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepetitionKey {
    /// Piece placement, side to move, castling rights and en-passant target.
    #[default]
    FullPosition,
    /// Piece placement only. Positions that differ just in side to move or
    /// rights still count as repetitions.
    BoardOnly,
}

impl FromStr for RepetitionKey {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "full-position" | "full_position" => Ok(RepetitionKey::FullPosition),
            "board" | "board-only" | "board_only" => Ok(RepetitionKey::BoardOnly),
            other => Err(ChessError::InvalidConfig(format!(
                "unknown repetition key '{other}' (expected 'full' or 'board')"
            ))),
        }
    }
}

impl fmt::Display for RepetitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepetitionKey::FullPosition => write!(f, "full"),
            RepetitionKey::BoardOnly => write!(f, "board"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesConfig {
    pub repetition_key: RepetitionKey,
}

impl RulesConfig {
    /// Reads `CHESS_RULES_REPETITION_KEY`; unset means the default.
    pub fn from_env() -> Result<Self, ChessError> {
        match std::env::var(REPETITION_KEY_ENV) {
            Ok(value) => Ok(Self {
                repetition_key: value.parse()?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Applies a `--repetition-key` value when one was given. An unknown
    /// value is an error rather than a silent fallback.
    pub fn with_repetition_key_arg(mut self, value: Option<&str>) -> Result<Self, ChessError> {
        if let Some(value) = value {
            self.repetition_key = value.parse()?;
        }
        Ok(self)
    }
}
