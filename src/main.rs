//! Line-oriented console over the rules engine.
//!
//! Usage:
//! `cargo run -- [--repetition-key full|board] [--fen "<fen>"]`
//!
//! Commands read from stdin:
//! `e2e4` / `e7e8q` play a move, `moves <square>` lists legal destinations,
//! `fen <fen>` loads a position, `show [unicode]` prints the board, `state`
//! prints the FEN and outcome, `divide <depth>` prints per-move perft counts,
//! `quit` exits.

use std::io::{self, BufRead, Write};

use chess_rules::errors::ChessError;
use chess_rules::game_state::chess_types::Position;
use chess_rules::game_state::game_config::RulesConfig;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::perft::perft_divide;
use chess_rules::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use chess_rules::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};
use chess_rules::utils::render_game_state::render_game_state_unicode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn parse_arg_str(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn rules_config_from_args() -> Result<RulesConfig, ChessError> {
    RulesConfig::from_env()?.with_repetition_key_arg(parse_arg_str("--repetition-key").as_deref())
}

struct Console {
    game: GameState,
}

enum Reply {
    Lines(Vec<String>),
    Quit,
}

impl Console {
    fn new(game: GameState) -> Self {
        Self { game }
    }

    fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let lines = match command {
            "" => Vec::new(),
            "quit" | "exit" => return Reply::Quit,
            "show" if rest == "unicode" => vec![render_game_state_unicode(&self.game)],
            "show" => vec![self.game.to_string()],
            "state" => vec![self.state_line()],
            "moves" => self.moves_from(rest),
            "fen" => self.load_fen(rest),
            "divide" => self.divide(rest),
            _ => self.play(line),
        };
        Reply::Lines(lines)
    }

    fn state_line(&self) -> String {
        format!("{} | {}", self.game.get_fen(), self.game.game_outcome())
    }

    fn moves_from(&self, square: &str) -> Vec<String> {
        let origin: Position = match algebraic_to_position(square) {
            Ok(origin) => origin,
            Err(err) => return vec![format!("error: {err}")],
        };

        let mut destinations: Vec<String> = self
            .game
            .legal_moves_from(origin)
            .iter()
            .map(move_to_long_algebraic)
            .collect();
        destinations.sort();

        if destinations.is_empty() {
            let label = position_to_algebraic(origin).unwrap_or_else(|_| square.to_owned());
            vec![format!("no legal moves from {label}")]
        } else {
            vec![destinations.join(" ")]
        }
    }

    fn load_fen(&mut self, fen: &str) -> Vec<String> {
        match GameState::from_fen_with_config(fen, self.game.config) {
            Ok(game) => {
                self.game = game;
                vec![self.state_line()]
            }
            Err(err) => vec![format!("error: {err}")],
        }
    }

    fn divide(&self, depth: &str) -> Vec<String> {
        let depth = match depth.parse::<u8>() {
            Ok(depth) if depth > 0 => depth,
            _ => return vec![format!("error: invalid depth '{depth}'")],
        };

        let divided = perft_divide(&self.game, depth);
        let total: usize = divided.iter().map(|(_, nodes)| nodes).sum();
        let mut out: Vec<String> = divided
            .into_iter()
            .map(|(lan, nodes)| format!("{lan}: {nodes}"))
            .collect();
        out.push(format!("total: {total}"));
        out
    }

    fn play(&mut self, text: &str) -> Vec<String> {
        let candidate = match parse_long_algebraic(text) {
            Ok(candidate) => candidate,
            Err(err) => return vec![format!("error: {err}")],
        };

        if !self.game.try_apply_move(&candidate) {
            return vec![format!("illegal move: {text}")];
        }

        let outcome = self.game.game_outcome();
        if outcome.is_game_over() {
            info!(%outcome, fen = %self.game.get_fen(), "game over");
        }
        vec![self.state_line()]
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = rules_config_from_args().map_err(|e| e.to_string())?;
    let game = match parse_arg_str("--fen") {
        Some(fen) => GameState::from_fen_with_config(&fen, config).map_err(|e| e.to_string())?,
        None => GameState::new_game_with_config(config),
    };
    info!(repetition_key = %config.repetition_key, "console started");

    let mut console = Console::new(game);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        match console.handle_line(&line) {
            Reply::Quit => break,
            Reply::Lines(lines) => {
                for reply in lines {
                    writeln!(out, "{reply}").map_err(|e| e.to_string())?;
                }
                out.flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}
