//! Win detection.

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One of the eight lines that win the game.
///
/// Declaration order is the scan order used by [`check_winner`]: rows, then
/// columns, then diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in scan order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three cell indices making up this line.
    pub fn cells(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Position of this line in scan order (0-7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a line up by its scan-order index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Returns the first line, in scan order, completely held by `player`.
///
/// The player's cells are gathered into a set first, then each line is tested
/// for containment.
pub fn check_winner(board: &Board, player: Player) -> Option<WinningLine> {
    let plays = board.occupied_by(player);
    WinningLine::ALL
        .into_iter()
        .find(|line| line.cells().iter().all(|&cell| plays & (1 << cell) != 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;
    use strum::IntoEnumIterator;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board, Player::Human), None);
        assert_eq!(check_winner(&board, Player::Automated), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX.OO...".parse().unwrap();
        assert_eq!(
            check_winner(&board, Player::Automated),
            Some(WinningLine::TopRow)
        );
        assert_eq!(check_winner(&board, Player::Human), None);
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X.O.X.O".parse().unwrap();
        assert_eq!(
            check_winner(&board, Player::Human),
            Some(WinningLine::MainDiagonal)
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "OO.......".parse().unwrap();
        assert_eq!(check_winner(&board, Player::Human), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Completes the top row and the left column at once.
        let board: Board = "XXXX..X..".parse().unwrap();
        assert_eq!(
            check_winner(&board, Player::Automated),
            Some(WinningLine::TopRow)
        );
    }

    #[test]
    fn test_every_line_detected_alone() {
        for line in WinningLine::iter() {
            let mut board = Board::new();
            for cell in line.cells() {
                board.set_cell(cell, Mark::Human).unwrap();
            }
            assert_eq!(check_winner(&board, Player::Human), Some(line));
            assert_eq!(check_winner(&board, Player::Automated), None);
        }
    }

    #[test]
    fn test_line_index_round_trip() {
        assert_eq!(WinningLine::AntiDiagonal.index(), 7);
        assert_eq!(WinningLine::from_index(3), Some(WinningLine::LeftColumn));
        assert_eq!(WinningLine::from_index(8), None);
    }
}
