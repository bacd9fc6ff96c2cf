use crate::game_state::game_config::RepetitionKey;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::position_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {}",
        generate_position_key(game_state, RepetitionKey::FullPosition),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// History entry for the current position under `key`.
pub fn generate_position_key(game_state: &GameState, key: RepetitionKey) -> String {
    let placement = generate_placement_field(game_state);
    match key {
        RepetitionKey::BoardOnly => placement,
        RepetitionKey::FullPosition => format!(
            "{} {} {} {}",
            placement,
            generate_side_field(game_state.side_to_move),
            generate_castling_field(game_state.castling_rights),
            generate_en_passant_field(game_state.en_passant_target)
        ),
    }
}

pub fn generate_placement_field(game_state: &GameState) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..8i8 {
        let mut empty_count = 0u8;

        for col in 0..8i8 {
            match game_state.piece_at(Position::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_side_field(side: Color) -> &'static str {
    match side {
        Color::White => "w",
        Color::Black => "b",
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(target: Option<Position>) -> String {
    target
        .and_then(|position| position_to_algebraic(position).ok())
        .unwrap_or_else(|| "-".to_owned())
}
