//! Core domain types for the board.

use crate::error::{BoardError, NotationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One side of the game.
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
pub enum Player {
    /// The person at the keyboard (moves first).
    Human,
    /// The minimax opponent.
    Automated,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Automated,
            Player::Automated => Player::Human,
        }
    }
}

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by the human.
    Human,
    /// Marked by the engine.
    Automated,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Automated => Some(Player::Automated),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Mark::Human,
            Player::Automated => Mark::Automated,
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Gets the mark at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Sets the mark at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if `index` is not on the board.
    pub fn set_cell(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::InvalidIndex(index))?;
        *cell = mark;
        Ok(())
    }

    /// Checks if a cell is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| *mark != Mark::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Bitmask of the cells holding `player`'s mark (bit `i` = cell `i`).
    pub fn occupied_by(&self, player: Player) -> u16 {
        let mark = Mark::from(player);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == mark)
            .fold(0, |plays, (index, _)| plays | (1 << index))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Mark::Empty => write!(f, "{}", index + 1)?,
                    Mark::Human => f.write_str("O")?,
                    Mark::Automated => f.write_str("X")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = NotationError;

    /// Parses the nine-cell notation: `O` human, `X` engine, and `.`, `-`,
    /// `_` or the cell's own digit for an empty cell.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(NotationError::WrongLength(symbols.len()));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let mark = match symbol {
                'O' | 'o' => Mark::Human,
                'X' | 'x' => Mark::Automated,
                '.' | '-' | '_' => Mark::Empty,
                digit if digit.to_digit(10) == Some(index as u32) => Mark::Empty,
                other => return Err(NotationError::UnknownSymbol(other)),
            };
            board.cells[index] = mark;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.set_cell(9, Mark::Human),
            Err(BoardError::InvalidIndex(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_indices_ascending() {
        let mut board = Board::new();
        board.set_cell(4, Mark::Human).unwrap();
        board.set_cell(0, Mark::Automated).unwrap();
        assert_eq!(board.empty_indices(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_sentinel_digits() {
        let board: Board = "O123O5678".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::Human));
        assert_eq!(board.get(4), Some(Mark::Human));
        assert_eq!(board.empty_indices(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_misplaced_digit() {
        // '1' in cell 0 is not that cell's own index
        let result: Result<Board, _> = "1........".parse();
        assert_eq!(result, Err(NotationError::UnknownSymbol('1')));
    }

    #[test]
    fn test_parse_wrong_length() {
        let result: Result<Board, _> = "XO".parse();
        assert_eq!(result, Err(NotationError::WrongLength(2)));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_occupied_by_mask() {
        let board: Board = "OO..X...X".parse().unwrap();
        assert_eq!(board.occupied_by(Player::Human), 0b11);
        assert_eq!(board.occupied_by(Player::Automated), (1 << 4) | (1 << 8));
    }
}
