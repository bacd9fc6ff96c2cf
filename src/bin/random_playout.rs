//! Seeded random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --games 50 --seed 7 --max-plies 300`
//! `cargo run --release --bin random_playout -- --repetition-key board --verbose`

use chess_rules::game_state::game_config::RulesConfig;
use chess_rules::game_state::game_state::GameState;
use chess_rules::outcome::game_outcome::GameOutcome;
use chess_rules::utils::random_playout::{run_playout, PlayoutConfig};
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

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    parse_arg_str(flag)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let games = parse_arg::<u32>("--games", 20);
    let base_seed = parse_arg::<u64>("--seed", PlayoutConfig::default().seed);
    let max_plies = parse_arg::<u16>("--max-plies", PlayoutConfig::default().max_plies);

    let config = RulesConfig::from_env()
        .and_then(|config| {
            config.with_repetition_key_arg(parse_arg_str("--repetition-key").as_deref())
        })
        .map_err(|e| e.to_string())?;

    let mut checkmates = 0u32;
    let mut stalemates = 0u32;
    let mut draws = 0u32;
    let mut unfinished = 0u32;
    let mut total_plies = 0usize;

    for game_idx in 0..games {
        let seed = base_seed.wrapping_add(u64::from(game_idx));
        let report = run_playout(
            &GameState::new_game_with_config(config),
            PlayoutConfig { max_plies, seed },
        )
        .map_err(|e| format!("game {game_idx} (seed {seed}): {e}"))?;

        total_plies += report.plies();
        match report.outcome {
            GameOutcome::Checkmate => checkmates += 1,
            GameOutcome::Stalemate => stalemates += 1,
            GameOutcome::Draw(_) => draws += 1,
            GameOutcome::Ongoing => unfinished += 1,
        }

        if verbose {
            println!(
                "game {game_idx}: seed={seed} plies={} outcome={} fen={}",
                report.plies(),
                report.outcome,
                report.final_state.get_fen()
            );
            println!("  moves: {}", report.played_moves_lan.join(" "));
        }
    }

    info!(games, total_plies, "all playouts finished");
    println!(
        "games={games} checkmates={checkmates} stalemates={stalemates} draws={draws} unfinished={unfinished} avg_plies={:.1}",
        if games == 0 {
            0.0
        } else {
            total_plies as f64 / f64::from(games)
        }
    );

    Ok(())
}
