//! Commands that run without the terminal UI.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_minimax::{
    Board, GameController, GameEvent, GameResult, Mark, Outcome, Player, Renderer, ScriptedInput,
    game_result, minimax,
};
use tracing::{info, instrument, warn};

/// Formats a board using the configured symbols, numbering empty cells 1-9.
pub fn format_board(board: &Board, config: &GameConfig) -> String {
    let mut result = String::new();
    for (index, mark) in board.cells().iter().enumerate() {
        if index % 3 == 0 && index > 0 {
            result.push_str("\n-+-+-\n");
        }
        match config.symbol(*mark) {
            Some(symbol) => result.push(symbol),
            None => result.push_str(&(index + 1).to_string()),
        }
        if index % 3 < 2 {
            result.push('|');
        }
    }
    result
}

/// Prints the engine's choice for `board`.
#[instrument(skip(out, config, board), fields(cells = %board))]
pub fn best_move(
    out: &mut impl Write,
    config: &GameConfig,
    board: &Board,
    human: bool,
) -> Result<()> {
    let side = if human {
        Player::Human
    } else {
        Player::Automated
    };
    let result = minimax(board, side);
    info!(%side, ?result, "Search finished");

    writeln!(out, "{}\n", format_board(board, config))?;
    writeln!(out, "{} to move: {}", side, result)?;
    Ok(())
}

/// Plays minimax against itself and prints every move.
#[instrument(skip(out, config))]
pub fn self_play(
    out: &mut impl Write,
    config: &GameConfig,
    start: Board,
    engine_first: bool,
) -> Result<GameResult> {
    let mut board = start;
    let mut to_move = if engine_first {
        Player::Automated
    } else {
        Player::Human
    };

    while !game_result(&board).is_over() {
        let choice = minimax(&board, to_move);
        let index = choice
            .index
            .context("Search returned no move on a live board")?;
        board.set_cell(index, Mark::from(to_move))?;
        writeln!(out, "{} plays {} (score {})", to_move, index, choice.score)?;
        to_move = to_move.opponent();
    }

    let result = game_result(&board);
    let outcome = match result {
        GameResult::Won { player, .. } => Outcome::Won(player),
        _ => Outcome::Tied,
    };
    writeln!(out, "\n{}\n\n{}", format_board(&board, config), outcome)?;
    info!(?result, "Self-play finished");
    Ok(result)
}

/// Writes each event as one JSON object per line.
pub struct JsonLinesRenderer<W> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, event: &GameEvent) {
        let written = serde_json::to_string(event)
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.out, "{}", line));
        if let Err(e) = written {
            warn!(error = %e, ?event, "Failed to write event");
        }
    }
}

/// Runs `cells` through a controller, streaming events as JSON lines.
#[instrument(skip(out))]
pub fn script<W: Write>(out: W, start: Option<Board>, cells: Vec<usize>) -> Result<W> {
    let renderer = JsonLinesRenderer::new(out);
    let mut game = match start {
        Some(board) => GameController::with_board(board, renderer),
        None => GameController::new(renderer),
    };
    let mut source = ScriptedInput::cells(cells);
    let phase = game.run(&mut source)?;
    info!(?phase, "Script finished");
    Ok(game.into_renderer().into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_board_uses_symbols() {
        let board: Board = "X...O....".parse().unwrap();
        let text = format_board(&board, &GameConfig::default());
        assert_eq!(text, "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_best_move_output() {
        let board: Board = "XX..OO...".parse().unwrap();
        let mut out = Vec::new();
        best_move(&mut out, &GameConfig::default(), &board, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Automated to move: cell 2 (score 10)\n"));
    }

    #[test]
    fn test_self_play_ties() {
        let mut out = Vec::new();
        let result = self_play(&mut out, &GameConfig::default(), Board::new(), false).unwrap();
        assert_eq!(result, GameResult::Tied);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Human plays 0 (score 0)\nAutomated plays 4 (score 0)\n"));
        assert!(text.ends_with("Tie Game!\n"));
    }

    #[test]
    fn test_script_streams_json_lines() {
        let out = script(Vec::new(), None, vec![0, 0]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"event":"cell_marked","index":0,"mark":"Human"}"#,
                r#"{"event":"cell_marked","index":4,"mark":"Automated"}"#,
            ]
        );
    }

    #[test]
    fn test_script_rejects_off_board_cell() {
        assert!(script(Vec::new(), None, vec![9]).is_err());
    }
}
