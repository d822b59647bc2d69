//! Exhaustive minimax search.
//!
//! The search walks the whole game tree below a position. There is no
//! pruning, no transposition table and no depth weighting: every leaf scores
//! [`LOSS_SCORE`], [`TIE_SCORE`] or [`WIN_SCORE`] from the engine's point of
//! view, and that score travels up the tree unchanged. A win found five plies
//! away is therefore worth exactly as much as an immediate one.
//!
//! Ties between candidates are broken by scan order (lowest cell index
//! first), which makes the chosen move fully reproducible.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Player, minimax};
//!
//! let board: Board = "XX..OO...".parse().unwrap();
//! let best = minimax(&board, Player::Automated);
//! assert_eq!(best.index, Some(2));
//! assert_eq!(best.score, 10);
//! ```

use crate::rules::check_winner;
use crate::types::{Board, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a leaf where the human holds a line.
pub const LOSS_SCORE: i32 = -10;
/// Score of a full board with no line.
pub const TIE_SCORE: i32 = 0;
/// Score of a leaf where the engine holds a line.
pub const WIN_SCORE: i32 = 10;

/// A candidate move and its game-theoretic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchMove {
    /// Cell to play. `None` when the searched board was already terminal.
    pub index: Option<usize>,
    /// Value of the position after the move, from the engine's side.
    pub score: i32,
}

impl SearchMove {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

impl std::fmt::Display for SearchMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "cell {} (score {})", index, self.score),
            None => write!(f, "terminal (score {})", self.score),
        }
    }
}

/// Finds the best move for `player` on `board`.
///
/// The engine maximizes, the human minimizes. The caller's board is never
/// touched; the search backtracks over its own copy.
#[instrument(skip(board), fields(empty = board.empty_indices().len()))]
pub fn minimax(board: &Board, player: Player) -> SearchMove {
    let mut search = Search::new(*board);
    let best = search.run(player);
    debug!(?best, nodes = search.nodes, "Search complete");
    best
}

/// The cell the engine plays on `board`, or `None` if the board is terminal.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<usize> {
    minimax(board, Player::Automated).index
}

/// Scratch state for one search.
struct Search {
    board: Board,
    nodes: u64,
}

impl Search {
    fn new(board: Board) -> Self {
        Self { board, nodes: 0 }
    }

    fn run(&mut self, player: Player) -> SearchMove {
        self.nodes += 1;

        if check_winner(&self.board, Player::Human).is_some() {
            return SearchMove::terminal(LOSS_SCORE);
        }
        if check_winner(&self.board, Player::Automated).is_some() {
            return SearchMove::terminal(WIN_SCORE);
        }
        let empty = self.board.empty_indices();
        if empty.is_empty() {
            return SearchMove::terminal(TIE_SCORE);
        }

        let mut best: Option<SearchMove> = None;
        for index in empty {
            self.place(index, Mark::from(player));
            let score = self.run(player.opponent()).score;
            self.place(index, Mark::Empty);

            let candidate = SearchMove {
                index: Some(index),
                score,
            };
            // Strict comparison keeps the first extremal candidate.
            let improves = match best {
                None => true,
                Some(current) => match player {
                    Player::Automated => candidate.score > current.score,
                    Player::Human => candidate.score < current.score,
                },
            };
            if improves {
                best = Some(candidate);
            }
        }

        // Non-empty candidate list: the loop ran at least once.
        best.unwrap_or(SearchMove::terminal(TIE_SCORE))
    }

    fn place(&mut self, index: usize, mark: Mark) {
        // Indices come from `empty_indices`, so they are always on the board.
        let _ = self.board.set_cell(index, mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_human_win() {
        let board: Board = "OOOXX....".parse().unwrap();
        assert_eq!(
            minimax(&board, Player::Automated),
            SearchMove::terminal(LOSS_SCORE)
        );
    }

    #[test]
    fn test_terminal_engine_win() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            minimax(&board, Player::Human),
            SearchMove::terminal(WIN_SCORE)
        );
    }

    #[test]
    fn test_terminal_tie() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(
            minimax(&board, Player::Automated),
            SearchMove::terminal(TIE_SCORE)
        );
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn test_last_cell_is_taken() {
        // Only cell 8 is left; playing it ties.
        let board: Board = "XOXXOOOX.".parse().unwrap();
        let best = minimax(&board, Player::Automated);
        assert_eq!(best.index, Some(8));
        assert_eq!(best.score, TIE_SCORE);
    }

    #[test]
    fn test_display() {
        let best = SearchMove {
            index: Some(2),
            score: WIN_SCORE,
        };
        assert_eq!(best.to_string(), "cell 2 (score 10)");
        assert_eq!(SearchMove::terminal(0).to_string(), "terminal (score 0)");
    }
}
