//! Board state and the game-facing contract.
//!
//! `GameState` owns every piece on the board, the side to move, castling
//! rights, the en-passant target and the history-dependent counters. It is
//! mutated in place by accepted moves and cloned only transiently by the
//! legality filter.

use std::fmt;

use tracing::{debug, warn};

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::RulesConfig;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator;
use crate::outcome::game_outcome::{evaluate_game_outcome, GameOutcome};
use crate::utils::fen_generator::{generate_fen, generate_position_key};
use crate::utils::fen_parser::parse_fen_with_config;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// `squares[row][col]`; row 0 is rank 8.
    pub squares: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Position>,

    // Plies since the last pawn move or capture.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Position key after every applied move, oldest first.
    pub position_history: Vec<String>,

    pub config: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            position_history: Vec::new(),
            config: RulesConfig::default(),
        }
    }
}

impl GameState {
    /// Standard starting position.
    pub fn new_game() -> Self {
        Self::new_game_with_config(RulesConfig::default())
    }

    pub fn new_game_with_config(config: RulesConfig) -> Self {
        let mut game = Self {
            config,
            ..Self::default()
        };
        game.load_from_placement(STARTING_POSITION_FEN);
        game
    }

    /// Strict FEN constructor. Missing trailing fields default to `w - - 0 1`.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen_with_config(fen, RulesConfig::default())
    }

    pub fn from_fen_with_config(fen: &str, config: RulesConfig) -> ChessResult<Self> {
        parse_fen_with_config(fen, config)
    }

    /// Replaces the whole position from a FEN-shaped string.
    ///
    /// Malformed input leaves an empty board (keeping the rules config) and
    /// is reported only through a log warning.
    pub fn load_from_placement(&mut self, fen: &str) {
        match parse_fen_with_config(fen, self.config) {
            Ok(parsed) => *self = parsed,
            Err(err) => {
                warn!(%err, fen, "malformed position string, falling back to an empty board");
                *self = Self {
                    config: self.config,
                    ..Self::default()
                };
            }
        }
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Key of the current position under the configured repetition rule.
    #[inline]
    pub fn position_key(&self) -> String {
        generate_position_key(self, self.config.repetition_key)
    }

    /// Piece on `position`, or `None` when empty or off-board.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if !position.is_on_board() {
            return None;
        }
        self.squares[position.row as usize][position.col as usize]
    }

    /// Boundary form of `piece_at` for callers holding raw coordinates.
    pub fn piece_at_coords(&self, row: i32, col: i32) -> Option<Piece> {
        match (i8::try_from(row), i8::try_from(col)) {
            (Ok(row), Ok(col)) => self.piece_at(Position::new(row, col)),
            _ => None,
        }
    }

    /// Places (or clears) a piece. Off-board positions are ignored.
    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) {
        if position.is_on_board() {
            self.squares[position.row as usize][position.col as usize] = piece;
        }
    }

    /// Removes and returns the piece on `position`.
    pub fn take_piece(&mut self, position: Position) -> Option<Piece> {
        if !position.is_on_board() {
            return None;
        }
        self.squares[position.row as usize][position.col as usize].take()
    }

    /// Every occupied square with its piece, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.piece_at(position).map(|piece| (position, piece))
        })
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        (self.castling_rights & right) != 0
    }

    /// Copy of the position with an empty history, for legality simulation.
    pub(crate) fn without_history(&self) -> Self {
        Self {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            position_history: Vec::new(),
            config: self.config,
        }
    }

    /// Is the side to move in check?
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    /// Executes the mechanical effects of `mv` without checking legality.
    pub fn apply_move(&mut self, mv: &Move) {
        legal_move_apply::apply_move(self, mv);
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_move_generator::legal_moves(self)
    }

    pub fn legal_moves_from(&self, origin: Position) -> Vec<Move> {
        legal_move_generator::legal_moves_from(self, origin)
    }

    /// Applies the legal move matching `candidate` and reports success.
    ///
    /// Only origin, destination and promotion of `candidate` are consulted;
    /// the applied move is the canonical one produced by the generator, with
    /// its capture, en-passant and castling flags. A promoting move given
    /// without a promotion kind promotes to a queen. On failure the board is
    /// left untouched.
    pub fn try_apply_move(&mut self, candidate: &Move) -> bool {
        let legal = self.legal_moves_from(candidate.from);
        let wanted_promotion = candidate.promotion.unwrap_or(PieceKind::Queen);

        let canonical = legal.into_iter().find(|mv| {
            mv.to == candidate.to
                && match mv.promotion {
                    Some(kind) => kind == wanted_promotion,
                    None => true,
                }
        });

        match canonical {
            Some(mv) => {
                self.apply_move(&mv);
                true
            }
            None => {
                debug!(?candidate, "rejected move attempt");
                false
            }
        }
    }

    /// Drag-and-drop form of `try_apply_move`.
    pub fn try_apply_move_squares(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> bool {
        let mut candidate = Move::new(from, to);
        candidate.promotion = promotion;
        self.try_apply_move(&candidate)
    }

    pub fn game_outcome(&self) -> GameOutcome {
        evaluate_game_outcome(self)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_outcome().is_game_over()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;
    use crate::outcome::game_outcome::{DrawReason, GameOutcome};

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn new_game_sets_up_standard_position() {
        let game = GameState::new_game();
        assert_eq!(game.current_turn(), Color::White);
        assert_eq!(game.castling_rights, CASTLE_ALL);
        assert_eq!(game.pieces().count(), 32);
        assert_eq!(
            game.piece_at(pos(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            game.piece_at(pos(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert!(game.position_history.is_empty());
    }

    #[test]
    fn out_of_bounds_queries_report_no_piece() {
        let game = GameState::new_game();
        assert_eq!(game.piece_at(pos(-1, 0)), None);
        assert_eq!(game.piece_at(pos(0, 8)), None);
        assert_eq!(game.piece_at_coords(100, 3), None);
        assert_eq!(game.piece_at_coords(i32::MAX, 0), None);
        assert!(game.piece_at_coords(7, 0).is_some());
    }

    #[test]
    fn e2e4_sets_en_passant_target_and_passes_turn() {
        let mut game = GameState::new_game();
        let e2 = pos(6, 4);
        let e4 = pos(4, 4);

        assert!(game.legal_moves_from(e2).iter().any(|mv| mv.to == e4));
        assert!(game.try_apply_move(&Move::new(e2, e4)));

        assert_eq!(game.en_passant_target, Some(pos(5, 4)));
        assert_eq!(game.current_turn(), Color::Black);
        assert_eq!(game.piece_at(e2), None);
        assert_eq!(
            game.piece_at(e4),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.position_history.len(), 1);
    }

    #[test]
    fn illegal_attempt_leaves_board_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        // Pawn three squares forward, moving the opponent's piece, empty origin.
        assert!(!game.try_apply_move(&Move::new(pos(6, 4), pos(3, 4))));
        assert!(!game.try_apply_move(&Move::new(pos(1, 4), pos(3, 4))));
        assert!(!game.try_apply_move(&Move::new(pos(4, 4), pos(3, 4))));

        assert_eq!(game, before);
    }

    #[test]
    fn try_apply_uses_canonical_flags_for_en_passant() {
        let mut game =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");

        // The caller only knows origin and destination.
        assert!(game.try_apply_move_squares(pos(3, 4), pos(2, 3), None));

        assert_eq!(game.piece_at(pos(3, 3)), None, "captured pawn is removed");
        assert_eq!(
            game.piece_at(pos(2, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.halfmove_clock, 0);
    }

    #[test]
    fn try_apply_uses_canonical_flags_for_castling() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");

        assert!(game.try_apply_move_squares(pos(7, 4), pos(7, 6), None));

        assert_eq!(
            game.piece_at(pos(7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(game.piece_at(pos(7, 7)), None);
        assert!(!game.has_castling_right(CASTLE_WHITE_KINGSIDE));
        assert!(!game.has_castling_right(CASTLE_WHITE_QUEENSIDE));
        assert!(game.has_castling_right(CASTLE_BLACK_KINGSIDE));
    }

    #[test]
    fn promotion_choice_is_honoured_and_defaults_to_queen() {
        let fen = "8/P6k/8/8/8/8/8/K7 w - - 0 1";

        let mut knight_game = GameState::from_fen(fen).expect("FEN should parse");
        assert!(knight_game.try_apply_move_squares(pos(1, 0), pos(0, 0), Some(PieceKind::Knight)));
        assert_eq!(
            knight_game.piece_at(pos(0, 0)),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );

        let mut default_game = GameState::from_fen(fen).expect("FEN should parse");
        assert!(default_game.try_apply_move_squares(pos(1, 0), pos(0, 0), None));
        assert_eq!(
            default_game.piece_at(pos(0, 0)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );

        let mut king_game = GameState::from_fen(fen).expect("FEN should parse");
        assert!(!king_game.try_apply_move_squares(pos(1, 0), pos(0, 0), Some(PieceKind::King)));
    }

    #[test]
    fn malformed_placement_falls_back_to_empty_board() {
        let mut game = GameState::new_game();
        game.load_from_placement("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

        assert_eq!(game.pieces().count(), 0);
        assert_eq!(game.castling_rights, 0);
        assert_eq!(game.en_passant_target, None);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for (from, to) in [
            ((6, 5), (5, 5)), // f3
            ((1, 4), (3, 4)), // e5
            ((6, 6), (4, 6)), // g4
            ((0, 3), (4, 7)), // Qh4#
        ] {
            assert!(game.try_apply_move_squares(pos(from.0, from.1), pos(to.0, to.1), None));
        }

        assert!(game.is_in_check());
        assert_eq!(game.game_outcome(), GameOutcome::Checkmate);
        assert!(game.is_game_over());
        assert!(!game.try_apply_move_squares(pos(6, 4), pos(4, 4), None));
    }

    #[test]
    fn knight_shuffle_reaches_threefold_repetition() {
        let mut game = GameState::new_game();
        let shuffle = [
            ((7, 6), (5, 5)), // Nf3
            ((0, 6), (2, 5)), // Nf6
            ((5, 5), (7, 6)), // Ng1
            ((2, 5), (0, 6)), // Ng8
        ];

        for cycle in 0..3 {
            assert_eq!(game.game_outcome(), GameOutcome::Ongoing, "cycle {cycle}");
            for (from, to) in shuffle {
                assert!(game.try_apply_move_squares(pos(from.0, from.1), pos(to.0, to.1), None));
            }
        }

        assert_eq!(game.position_history.len(), 12);
        assert_eq!(
            game.game_outcome(),
            GameOutcome::Draw(DrawReason::ThreefoldRepetition)
        );
    }

    #[test]
    fn castling_rights_stay_lost_after_pieces_return_home() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");

        for (from, to) in [
            (pos(7, 4), pos(7, 5)),
            (pos(0, 7), pos(0, 6)),
            (pos(7, 5), pos(7, 4)),
            (pos(0, 6), pos(0, 7)),
        ] {
            assert!(game.try_apply_move(&Move::new(from, to)), "{from:?} -> {to:?}");
        }

        // Same placement as the start, but both white rights and black's kingside right are gone.
        assert_eq!(game.castling_rights, CASTLE_BLACK_QUEENSIDE);
        assert!(!game.has_castling_right(CASTLE_BLACK_KINGSIDE));
        assert!(game.legal_moves_from(pos(7, 4)).iter().all(|mv| !mv.is_castling));
        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w q - 4 3");
    }

    #[test]
    fn en_passant_is_offered_only_on_the_next_ply() {
        let mut game = GameState::new_game();
        let e5 = pos(3, 4);
        let d6 = pos(2, 3);

        for (from, to) in [
            (pos(6, 4), pos(4, 4)),
            (pos(1, 0), pos(2, 0)),
            (pos(4, 4), e5),
            (pos(1, 3), pos(3, 3)),
        ] {
            assert!(game.try_apply_move(&Move::new(from, to)), "{from:?} -> {to:?}");
        }

        let offered: Vec<Move> = game
            .legal_moves_from(e5)
            .into_iter()
            .filter(|mv| mv.is_en_passant)
            .collect();
        assert_eq!(offered, vec![Move::en_passant(e5, d6)]);

        assert!(game.try_apply_move(&Move::new(pos(6, 7), pos(5, 7))));
        assert!(game.try_apply_move(&Move::new(pos(2, 0), pos(3, 0))));

        assert_eq!(game.en_passant_target, None);
        assert!(game.legal_moves_from(e5).iter().all(|mv| mv.to != d6));
    }

    #[test]
    fn display_renders_ranks_top_down() {
        let rendered = GameState::new_game().to_string();
        let first_line = rendered.lines().next().expect("render has lines");
        assert_eq!(first_line, "8 r n b q k b n r");
    }
}
