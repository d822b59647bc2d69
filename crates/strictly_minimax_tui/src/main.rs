//! Strictly Minimax - Unified CLI
//!
//! Play tic-tac-toe against a perfect opponent, or query the engine directly.

#![warn(missing_docs)]

mod cli;
mod config;
mod headless;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use strictly_minimax::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::BestMove { board, human } => {
            initialize_stderr_tracing(&config);
            headless::best_move(&mut std::io::stdout(), &config, &board, human)
        }
        Command::SelfPlay {
            board,
            engine_first,
        } => {
            initialize_stderr_tracing(&config);
            let start = board.unwrap_or_else(Board::new);
            headless::self_play(&mut std::io::stdout(), &config, start, engine_first)?;
            Ok(())
        }
        Command::Script { cells, board } => {
            initialize_stderr_tracing(&config);
            headless::script(std::io::stdout(), board, cells)?;
            Ok(())
        }
    }
}

/// Run the interactive terminal game
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    // Log to file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run_tui(config)
}

fn initialize_stderr_tracing(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();

    info!("Tracing initialized");
}
