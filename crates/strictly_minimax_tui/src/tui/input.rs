//! Keyboard and mouse handling.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use strictly_minimax::{CELL_COUNT, Input};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor to this cell.
    Cursor(usize),
    /// Forward to the game.
    Game(Input),
    /// Nothing to do.
    Ignore,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        _ => cursor,
    }
}

/// Maps a key to an action. Digits 1-9 select cells 0-8 directly.
pub fn interpret_key(key: KeyCode, cursor: usize) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Game(Input::Quit),
        KeyCode::Char('r') => KeyAction::Game(Input::Replay),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Game(Input::CellSelected(cursor)),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => KeyAction::Game(Input::CellSelected(digit as usize - 1)),
            _ => KeyAction::Ignore,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}

/// Cell drawn at a screen position, if any.
pub fn cell_at(areas: &[Rect; CELL_COUNT], column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    areas.iter().position(|area| area.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(3, KeyCode::Left), 3);
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            interpret_key(KeyCode::Char('1'), 4),
            KeyAction::Game(Input::CellSelected(0))
        );
        assert_eq!(
            interpret_key(KeyCode::Char('9'), 4),
            KeyAction::Game(Input::CellSelected(8))
        );
        assert_eq!(interpret_key(KeyCode::Char('0'), 4), KeyAction::Ignore);
    }

    #[test]
    fn test_enter_selects_cursor() {
        assert_eq!(
            interpret_key(KeyCode::Enter, 6),
            KeyAction::Game(Input::CellSelected(6))
        );
        assert_eq!(interpret_key(KeyCode::Right, 6), KeyAction::Cursor(7));
        assert_eq!(interpret_key(KeyCode::Char('r'), 6), KeyAction::Game(Input::Replay));
    }

    #[test]
    fn test_click_maps_to_cell() {
        let mut areas = [Rect::default(); CELL_COUNT];
        areas[5] = Rect::new(10, 4, 9, 3);
        assert_eq!(cell_at(&areas, 12, 5), Some(5));
        assert_eq!(cell_at(&areas, 30, 5), None);
    }
}
