//! Turn orchestration.
//!
//! The controller owns the only mutable [`Board`]. A human selection is
//! followed immediately by the engine's reply, so from the outside the game
//! only ever rests in [`Phase::AwaitingHumanMove`] or a terminal phase.

use crate::error::BoardError;
use crate::events::{EventSource, GameEvent, Input, Outcome, Renderer};
use crate::rules::{GameResult, WinningLine, check_winner, game_result};
use crate::search::minimax;
use crate::types::{Board, CELL_COUNT, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// The engine is searching for its reply.
    AwaitingAutomatedMove,
    /// `player` completed `line`.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Full board, no line.
    Tied,
}

impl Phase {
    /// True for `Won` and `Tied`.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won { .. } | Phase::Tied)
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Won { player, .. } => Some(Outcome::Won(*player)),
            Phase::Tied => Some(Outcome::Tied),
            Phase::AwaitingHumanMove | Phase::AwaitingAutomatedMove => None,
        }
    }
}

/// Runs one game at a time against the minimax engine.
#[derive(Debug)]
pub struct GameController<R> {
    board: Board,
    phase: Phase,
    renderer: R,
}

impl<R: Renderer> GameController<R> {
    /// Starts a fresh game with the human to move.
    #[instrument(skip(renderer))]
    pub fn new(renderer: R) -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHumanMove,
            renderer,
        }
    }

    /// Resumes from `board` with the human to move.
    ///
    /// A board that is already won or full starts in the matching terminal
    /// phase and accepts no input until [`reset`](Self::reset).
    #[instrument(skip(board, renderer), fields(cells = %board))]
    pub fn with_board(board: Board, renderer: R) -> Self {
        let phase = match game_result(&board) {
            GameResult::InProgress => Phase::AwaitingHumanMove,
            GameResult::Won { line, player } => Phase::Won { player, line },
            GameResult::Tied => Phase::Tied,
        };
        info!(?phase, "Resuming game");
        Self {
            board,
            phase,
            renderer,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Result of the board as it stands.
    pub fn result(&self) -> GameResult {
        game_result(&self.board)
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the controller, handing back its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Plays the human's move at `index`, then the engine's reply.
    ///
    /// Occupied cells and selections after the game has ended are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if `index` is not a cell.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn select_cell(&mut self, index: usize) -> Result<Phase, BoardError> {
        if index >= CELL_COUNT {
            warn!(index, "Selection outside the board");
            return Err(BoardError::InvalidIndex(index));
        }
        if self.phase != Phase::AwaitingHumanMove {
            debug!("Game is over, ignoring selection");
            return Ok(self.phase);
        }
        if !self.board.is_empty(index) {
            debug!("Cell is occupied, ignoring selection");
            return Ok(self.phase);
        }

        self.mark(index, Player::Human)?;
        if self.settle(Player::Human) {
            return Ok(self.phase);
        }

        self.phase = Phase::AwaitingAutomatedMove;
        let reply = minimax(&self.board, Player::Automated);
        let Some(cell) = reply.index else {
            warn!("Engine found no move on a live board");
            self.phase = Phase::AwaitingHumanMove;
            return Ok(self.phase);
        };
        info!(cell, score = reply.score, "Engine replies");

        self.mark(cell, Player::Automated)?;
        if !self.settle(Player::Automated) {
            self.phase = Phase::AwaitingHumanMove;
        }
        Ok(self.phase)
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting board");
        self.board = Board::new();
        self.phase = Phase::AwaitingHumanMove;
        self.renderer.render(&GameEvent::BoardReset);
    }

    /// Applies one input. Returns `false` when the input asks to stop.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError::InvalidIndex`] from [`select_cell`](Self::select_cell).
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<bool, BoardError> {
        match input {
            Input::CellSelected(index) => {
                self.select_cell(index)?;
                Ok(true)
            }
            Input::Replay => {
                self.reset();
                Ok(true)
            }
            Input::Quit => Ok(false),
        }
    }

    /// Feeds every input from `source` until it runs dry or asks to quit.
    ///
    /// # Errors
    ///
    /// Stops at the first [`BoardError`].
    #[instrument(skip_all)]
    pub fn run<S: EventSource>(&mut self, source: &mut S) -> Result<Phase, BoardError> {
        while let Some(input) = source.next_input() {
            if !self.handle(input)? {
                debug!("Input source asked to quit");
                break;
            }
        }
        Ok(self.phase)
    }

    fn mark(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        let mark = Mark::from(player);
        self.board.set_cell(index, mark)?;
        self.renderer.render(&GameEvent::CellMarked { index, mark });
        Ok(())
    }

    /// Ends the game if `player`'s last move won or filled the board.
    fn settle(&mut self, player: Player) -> bool {
        if let Some(line) = check_winner(&self.board, player) {
            info!(%player, %line, "Game won");
            self.phase = Phase::Won { player, line };
            self.renderer.render(&GameEvent::LineHighlighted {
                cells: line.cells(),
                player,
            });
            self.finish(Outcome::Won(player));
            true
        } else if self.board.is_full() {
            info!("Game tied");
            self.phase = Phase::Tied;
            self.finish(Outcome::Tied);
            true
        } else {
            false
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.renderer.render(&GameEvent::GameEnded { outcome });
        self.renderer.render(&GameEvent::InputDisabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingRenderer;

    #[test]
    fn test_new_game_awaits_human() {
        let game = GameController::new(RecordingRenderer::new());
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.board(), &Board::new());
        assert!(game.renderer().events().is_empty());
    }

    #[test]
    fn test_resume_finished_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let game = GameController::with_board(board, RecordingRenderer::new());
        assert_eq!(game.phase(), Phase::Tied);
        assert_eq!(game.phase().outcome(), Some(Outcome::Tied));
    }

    #[test]
    fn test_handle_quit() {
        let mut game = GameController::new(RecordingRenderer::new());
        assert_eq!(game.handle(Input::Quit), Ok(false));
        assert_eq!(game.board(), &Board::new());
    }
}
