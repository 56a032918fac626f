//! ledtoe - LED tic-tac-toe board on the desktop

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use ledtoe::{AppConfig, run_selfplay, run_simulator, seeded_rng};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ledtoe=debug,ledtoe_core=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            log_file,
        } => run_play(config, seed, log_file).await,
        Command::Selfplay {
            games,
            random_o,
            seed,
        } => run_headless(games, random_o, seed),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Run the terminal simulator
async fn run_play(
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_seed(seed)
    .with_log_file(log_file);

    // Log to file to avoid interfering with the TUI
    let file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(config = ?config, "Starting ledtoe");
    run_simulator(config).await
}

/// Run headless engine games
#[instrument]
fn run_headless(games: u32, random_o: bool, seed: Option<u64>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let mut rng = seeded_rng(seed);
    let tally = run_selfplay(games, random_o, &mut rng, |game, board| {
        println!("Game {}:\n{}\n", game, board.display());
    });
    println!(
        "X wins: {}  O wins: {}  Draws: {}",
        tally.x_wins(),
        tally.o_wins(),
        tally.draws()
    );
    Ok(())
}
