//! Canonical chess-rule constants.
//!
//! Static literals shared by setup, move application and game-end detection.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// King column at the start of the game (file e).
pub const KING_HOME_COL: i8 = 4;
pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const QUEENSIDE_ROOK_COL: i8 = 0;

/// King destination columns when castling.
pub const KINGSIDE_KING_TARGET_COL: i8 = 6;
pub const QUEENSIDE_KING_TARGET_COL: i8 = 2;

/// Rook destination columns when castling.
pub const KINGSIDE_ROOK_TARGET_COL: i8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: i8 = 3;

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_PLY_LIMIT: u16 = 100;

/// Occurrences of one position needed for a repetition draw.
pub const REPETITION_DRAW_COUNT: usize = 3;
