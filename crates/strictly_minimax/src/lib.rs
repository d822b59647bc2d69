//! Strictly Minimax - tic-tac-toe against a perfect opponent
//!
//! The human plays `O` and always moves first. After every human move the
//! engine answers with the move an exhaustive minimax search considers best.
//!
//! # Architecture
//!
//! - **Board**: the nine cells and their mutation primitives
//! - **Rules**: win and tie detection, derived fresh from the board
//! - **Search**: exhaustive minimax with a stable, lowest-index tie-break
//! - **Controller**: turn order, reporting every change to a [`Renderer`]
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{GameController, GameEvent, Mark, RecordingRenderer};
//!
//! let mut game = GameController::new(RecordingRenderer::new());
//! game.select_cell(0).unwrap();
//!
//! // The engine takes the center against a corner opening.
//! assert_eq!(
//!     game.renderer().events(),
//!     &[
//!         GameEvent::CellMarked { index: 0, mark: Mark::Human },
//!         GameEvent::CellMarked { index: 4, mark: Mark::Automated },
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod events;
mod rules;
mod search;
mod types;

// Crate-level exports - Board
pub use types::{Board, CELL_COUNT, Mark, Player};

// Crate-level exports - Errors
pub use error::{BoardError, NotationError};

// Crate-level exports - Rules
pub use rules::{GameResult, WinningLine, check_winner, game_result, is_tied};

// Crate-level exports - Search
pub use search::{LOSS_SCORE, SearchMove, TIE_SCORE, WIN_SCORE, best_move, minimax};

// Crate-level exports - Orchestration
pub use controller::{GameController, Phase};
pub use events::{EventSource, GameEvent, Input, Outcome, RecordingRenderer, Renderer, ScriptedInput};
