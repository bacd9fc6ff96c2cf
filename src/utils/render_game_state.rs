//! Terminal board renderers.
//!
//! Rank 8 is printed first and the file legend closes the board, so the
//! output reads the same way a diagram does.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with FEN letters and `.` for empty squares.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with(game_state, |piece| piece.fen_char(), '.')
}

/// Render the board with Unicode chess glyphs.
pub fn render_game_state_unicode(game_state: &GameState) -> String {
    render_with(game_state, piece_to_unicode, '·')
}

fn render_with(game_state: &GameState, glyph: impl Fn(Piece) -> char, empty: char) -> String {
    let mut out = String::with_capacity(8 * 18 + 18);

    for row in 0..8i8 {
        out.push(char::from(b'8' - row as u8));

        for col in 0..8i8 {
            out.push(' ');
            match game_state.piece_at(Position::new(row, col)) {
                Some(piece) => out.push(glyph(piece)),
                None => out.push(empty),
            }
        }
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
