//! Error types for board access and board notation.

/// Error raised when a caller addresses the board incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is outside the board (0-8)", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for BoardError {}

/// Error raised when parsing a board from its nine-cell notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// The notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty-cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for NotationError {}
