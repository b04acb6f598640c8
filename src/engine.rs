//! Board model for the 4x4 block puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the agent can step in.
//! - `Board`: A fixed 16-cell snapshot holding block symbols, blanks and exactly
//!   one agent. Moves swap the agent with a neighbouring cell and always return a
//!   fresh board, leaving the original untouched.
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Width (and height) of the square board.
pub const BOARD_WIDTH: usize = 4;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Symbol of the agent cell that swaps with its neighbours.
pub const AGENT: char = '*';

/// Symbol of an empty cell.
pub const BLANK: char = ' ';

/// A direction the agent can move in.
///
/// The set is closed over the four cardinal directions, so the move generator
/// never has to deal with an unknown value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Up,
    Right,
    Down,
}

impl Move {
    /// All moves in the order the solver expands them.
    pub const ALL: [Move; 4] = [Move::Left, Move::Up, Move::Right, Move::Down];

    /// Returns the move that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Left.inverse(), Move::Right);
    /// assert_eq!(Move::Down.inverse(), Move::Up);
    /// ```
    pub fn inverse(self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Up => Move::Down,
            Move::Right => Move::Left,
            Move::Down => Move::Up,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Left => "left",
            Move::Up => "up",
            Move::Right => "right",
            Move::Down => "down",
        };
        f.write_str(name)
    }
}

/// A 4x4 puzzle board stored row-major as one byte per cell.
///
/// Boards are plain values: `apply_move` copies the cells before swapping, so a
/// caller holding a board never sees it change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; BOARD_CELLS],
}

impl Board {
    /// Creates a board from raw cells without validating them.
    ///
    /// Callers are expected to hand over exactly one agent byte. Use
    /// [`crate::utils::board_from_str`] to build a board from untrusted input.
    pub fn from_cells(cells: [u8; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Returns the raw cells in row-major order.
    pub fn cells(&self) -> &[u8; BOARD_CELLS] {
        &self.cells
    }

    /// Returns the symbol at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside `0..BOARD_WIDTH`.
    pub fn get_cell(&self, r: usize, c: usize) -> char {
        self.cells[r * BOARD_WIDTH + c] as char
    }

    /// Index of the first cell holding `symbol`, if any.
    pub fn position_of(&self, symbol: u8) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == symbol)
    }

    /// Index of the agent cell.
    ///
    /// Returns `None` only for boards built through `from_cells` without an agent.
    pub fn agent_index(&self) -> Option<usize> {
        self.position_of(AGENT as u8)
    }

    /// Applies `mv` to the agent and returns the resulting board.
    ///
    /// The agent swaps places with the neighbouring cell in the given direction.
    /// Returns `None` when that neighbour would lie outside the board, or when the
    /// board has no agent at all.
    ///
    /// # Examples
    /// ```
    /// use block_puzzle_solver::engine::Move;
    /// use block_puzzle_solver::utils::board_from_str;
    ///
    /// let board = board_from_str("*a              ").unwrap();
    /// let moved = board.apply_move(Move::Right).unwrap();
    /// assert_eq!(moved.to_compact_string(), "a*              ");
    /// assert!(board.apply_move(Move::Left).is_none());
    /// ```
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let index = self.agent_index()?;
        let mut x = index % BOARD_WIDTH;
        let mut y = index / BOARD_WIDTH;
        match mv {
            Move::Left => {
                if x == 0 {
                    return None;
                }
                x -= 1;
            }
            Move::Right => {
                if x == BOARD_WIDTH - 1 {
                    return None;
                }
                x += 1;
            }
            Move::Up => {
                if y == 0 {
                    return None;
                }
                y -= 1;
            }
            Move::Down => {
                if y == BOARD_WIDTH - 1 {
                    return None;
                }
                y += 1;
            }
        }
        let mut next = *self;
        next.cells.swap(index, y * BOARD_WIDTH + x);
        Some(next)
    }

    /// Digest of the full 16-symbol sequence, used for goal detection and cycle checks.
    ///
    /// Equal boards always produce equal hashes within and across runs, since the
    /// hasher is created with fixed keys.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    /// Returns the board as a single 16-character string.
    pub fn to_compact_string(&self) -> String {
        self.cells.iter().map(|&cell| cell as char).collect()
    }
}

impl fmt::Display for Board {
    /// Renders the board as four `|....|` rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            f.write_str("|")?;
            for &cell in row {
                write!(f, "{}", cell as char)?;
            }
            f.write_str("|")?;
            if r < BOARD_WIDTH - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
