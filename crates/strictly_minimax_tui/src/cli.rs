//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Board;

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the move the engine would choose on a board
    BestMove {
        /// Board in nine-cell notation, e.g. `XX..OO...` (O = human, X = engine)
        board: Board,

        /// Search for the human side instead of the engine
        #[arg(long)]
        human: bool,
    },

    /// Let minimax play both sides and print the game
    SelfPlay {
        /// Starting board (defaults to empty)
        #[arg(long)]
        board: Option<Board>,

        /// Let the engine move first
        #[arg(long)]
        engine_first: bool,
    },

    /// Feed human selections to the game and print each event as JSON
    Script {
        /// Cells to select, in order (0-8)
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Starting board (defaults to empty)
        #[arg(long)]
        board: Option<Board>,
    },
}
