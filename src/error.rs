//! Error types for board parsing and search failures.
//!
//! Invalid and cyclic moves are not errors: the move generator drops them
//! silently and the solver only counts them in its statistics.

use std::fmt;

/// Reasons a textual board cannot be turned into a [`crate::engine::Board`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The board string does not hold exactly 16 symbols.
    WrongLength { found: usize },
    /// No agent symbol is present.
    MissingAgent,
    /// More than one agent symbol is present.
    MultipleAgents { count: usize },
    /// Cells are stored as single bytes, so only ASCII symbols are accepted.
    NonAsciiSymbol { symbol: char, index: usize },
    /// More than four rows were supplied.
    TooManyRows { found: usize },
    /// A row holds more than four symbols.
    RowTooLong { row: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongLength { found } => {
                write!(f, "Invalid board length. Expected 16 symbols, found {}", found)
            }
            BoardError::MissingAgent => write!(f, "Board has no agent symbol '*'"),
            BoardError::MultipleAgents { count } => {
                write!(f, "Board has {} agent symbols, expected exactly one", count)
            }
            BoardError::NonAsciiSymbol { symbol, index } => {
                write!(f, "Unsupported symbol '{}' at index {}", symbol, index)
            }
            BoardError::TooManyRows { found } => {
                write!(f, "Invalid number of rows. Expected at most 4, found {}", found)
            }
            BoardError::RowTooLong { row, found } => write!(
                f,
                "Row {} is too long. Expected at most 4 characters, found {}",
                row, found
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Ways a search can end without reaching the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied before any candidate matched the goal.
    Exhausted { iterations: u64 },
    /// The caller-supplied iteration cap was reached first.
    IterationLimit { limit: u64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Exhausted { iterations } => write!(
                f,
                "Search exhausted after {} expansions without reaching the goal",
                iterations
            ),
            SearchError::IterationLimit { limit } => {
                write!(f, "Search stopped at the iteration limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for SearchError {}
