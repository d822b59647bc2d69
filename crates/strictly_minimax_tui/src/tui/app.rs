//! Application state and logic.

use crate::config::GameConfig;
use strictly_minimax::{CELL_COUNT, GameEvent, Mark, Outcome, Player, Renderer};
use tracing::debug;

/// Colored cells left on screen at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The winning line, colored by its owner.
    Line {
        /// Cells of the line.
        cells: [usize; 3],
        /// Who completed it.
        player: Player,
    },
    /// Every cell, after a tie.
    Tie,
}

impl Highlight {
    /// Whether `index` is part of this highlight.
    pub fn covers(&self, index: usize) -> bool {
        match self {
            Highlight::Line { cells, .. } => cells.contains(&index),
            Highlight::Tie => true,
        }
    }
}

/// Everything the screen shows, rebuilt from game events.
#[derive(Debug)]
pub struct App {
    config: GameConfig,
    cells: [Mark; CELL_COUNT],
    highlight: Option<Highlight>,
    outcome: Option<Outcome>,
    input_enabled: bool,
    cursor: usize,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            cells: [Mark::Empty; CELL_COUNT],
            highlight: None,
            outcome: None,
            input_enabled: true,
            cursor: 4,
            status_message: "Your move.".to_string(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mark shown in a cell.
    pub fn cell(&self, index: usize) -> Mark {
        self.cells.get(index).copied().unwrap_or_default()
    }

    /// Current highlight, if the game has ended.
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// Final result, if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// False between the end of a game and the next reset.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.cursor = index;
        }
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

impl Renderer for App {
    fn render(&mut self, event: &GameEvent) {
        debug!(?event, "Handling game event");

        match *event {
            GameEvent::CellMarked { index, mark } => {
                if let Some(cell) = self.cells.get_mut(index) {
                    *cell = mark;
                }
                self.status_message = match mark.player() {
                    Some(Player::Automated) => format!("Engine played {}. Your move.", index + 1),
                    Some(Player::Human) => format!("You played {}.", index + 1),
                    None => self.status_message.clone(),
                };
            }
            GameEvent::LineHighlighted { cells, player } => {
                self.highlight = Some(Highlight::Line { cells, player });
            }
            GameEvent::GameEnded { outcome } => {
                if outcome == Outcome::Tied {
                    self.highlight = Some(Highlight::Tie);
                }
                self.outcome = Some(outcome);
                self.status_message =
                    format!("{} Press 'r' to replay or 'q' to quit.", outcome.banner());
            }
            GameEvent::InputDisabled => {
                self.input_enabled = false;
            }
            GameEvent::BoardReset => {
                self.cells = [Mark::Empty; CELL_COUNT];
                self.highlight = None;
                self.outcome = None;
                self.input_enabled = true;
                self.status_message = "New game. Your move.".to_string();
            }
        }
    }
}
