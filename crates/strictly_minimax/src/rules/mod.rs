//! Game rules.
//!
//! Pure functions over a [`Board`]. Nothing here stores state: the result of
//! a game is always derived fresh from the cells.

pub mod draw;
pub mod win;

pub use draw::is_tied;
pub use win::{WinningLine, check_winner};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of a board, as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line and at least one empty cell.
    InProgress,
    /// `player` holds `line`.
    Won {
        /// The completed line.
        line: WinningLine,
        /// Who completed it.
        player: Player,
    },
    /// Full board, no line.
    Tied,
}

impl GameResult {
    /// True once the game can no longer continue.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Evaluates a board: human line first, then engine line, then tie.
pub fn game_result(board: &Board) -> GameResult {
    for player in [Player::Human, Player::Automated] {
        if let Some(line) = check_winner(board, player) {
            return GameResult::Won { line, player };
        }
    }
    if board.is_full() {
        GameResult::Tied
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_in_progress() {
        assert_eq!(game_result(&Board::new()), GameResult::InProgress);
        assert!(!GameResult::InProgress.is_over());
    }

    #[test]
    fn test_result_human_checked_first() {
        // Not reachable in play, but fixes the evaluation order.
        let board: Board = "OOOXXX...".parse().unwrap();
        assert_eq!(
            game_result(&board),
            GameResult::Won {
                line: WinningLine::TopRow,
                player: Player::Human,
            }
        );
    }

    #[test]
    fn test_result_tied() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(game_result(&board), GameResult::Tied);
        assert!(GameResult::Tied.is_over());
    }
}
