//! Tie detection.

use super::win::check_winner;
use crate::types::{Board, Player};

/// A full board on which neither player holds a line.
pub fn is_tied(board: &Board) -> bool {
    board.is_full()
        && check_winner(board, Player::Human).is_none()
        && check_winner(board, Player::Automated).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_tied() {
        assert!(!is_tied(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_tied() {
        let board: Board = "OX..O....".parse().unwrap();
        assert!(!is_tied(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(is_tied(&board));
    }

    #[test]
    fn test_not_tied_if_winner() {
        // Full, but X holds both diagonals
        let board: Board = "XOXOXOXOX".parse().unwrap();
        assert!(board.is_full());
        assert!(!is_tied(&board));
    }
}
