//! Boundary between the controller and whatever presents the game.
//!
//! The controller never draws anything. It reports what changed through a
//! [`Renderer`] and pulls player intent from an [`EventSource`].

use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Final result of a game, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Somebody completed a line.
    Won(Player),
    /// Full board, no line.
    Tied,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Tied => None,
        }
    }

    /// End-of-game banner, from the human's point of view.
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Won(Player::Human) => "You win!",
            Outcome::Won(Player::Automated) => "You lose",
            Outcome::Tied => "Tie Game!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.banner())
    }
}

/// State change reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A cell's mark changed.
    CellMarked {
        /// Cell index (0-8).
        index: usize,
        /// New occupant.
        mark: Mark,
    },
    /// The winning line, emitted once when a game is won.
    LineHighlighted {
        /// The three cells of the line.
        cells: [usize; 3],
        /// Who completed it.
        player: Player,
    },
    /// The game is over.
    GameEnded {
        /// Final result.
        outcome: Outcome,
    },
    /// Further cell selections will be ignored until the board is reset.
    InputDisabled,
    /// The board was cleared for a new game.
    BoardReset,
}

/// Player intent delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// The human chose a cell.
    CellSelected(usize),
    /// Start over with an empty board.
    Replay,
    /// Stop pumping input.
    Quit,
}

/// Receives every state change the controller makes.
pub trait Renderer {
    /// Presents a single event.
    fn render(&mut self, event: &GameEvent);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, event: &GameEvent) {
        (**self).render(event);
    }
}

/// Produces player input, one item at a time.
pub trait EventSource {
    /// Next input, or `None` once the source is exhausted.
    fn next_input(&mut self) -> Option<Input>;
}

/// Renderer that keeps every event it sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    events: Vec<GameEvent>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were rendered.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drains recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, event: &GameEvent) {
        debug!(?event, "Recording event");
        self.events.push(*event);
    }
}

/// Event source replaying a fixed list of inputs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<Input>,
}

impl ScriptedInput {
    /// Creates a source from inputs in delivery order.
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// A source that selects each cell in turn.
    pub fn cells(cells: impl IntoIterator<Item = usize>) -> Self {
        Self::new(cells.into_iter().map(Input::CellSelected))
    }

    /// Inputs not yet delivered.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl EventSource for ScriptedInput {
    fn next_input(&mut self) -> Option<Input> {
        self.inputs.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        assert_eq!(Outcome::Won(Player::Human).banner(), "You win!");
        assert_eq!(Outcome::Won(Player::Automated).banner(), "You lose");
        assert_eq!(Outcome::Tied.to_string(), "Tie Game!");
        assert_eq!(Outcome::Tied.winner(), None);
    }

    #[test]
    fn test_scripted_input_order() {
        let mut source = ScriptedInput::cells([4, 0]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_input(), Some(Input::CellSelected(4)));
        assert_eq!(source.next_input(), Some(Input::CellSelected(0)));
        assert_eq!(source.next_input(), None);
    }

    #[test]
    fn test_recording_renderer_through_reference() {
        fn feed(mut renderer: impl Renderer) {
            renderer.render(&GameEvent::BoardReset);
        }

        let mut recorder = RecordingRenderer::new();
        feed(&mut recorder);
        assert_eq!(recorder.take(), vec![GameEvent::BoardReset]);
        assert!(recorder.events().is_empty());
    }
}
