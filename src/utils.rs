use crate::engine::{Board, Move, AGENT, BLANK, BOARD_CELLS, BOARD_WIDTH};
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Parses a 16-character string into a `Board`.
///
/// The string is read row-major: characters 0..4 form the top row, and so on.
/// A space is a blank cell, `*` is the agent, and any other ASCII character is a block.
///
/// # Returns
/// * `Ok(Board)` if the string holds exactly 16 ASCII symbols with exactly one agent.
/// * `Err(BoardError)` otherwise.
///
/// # Examples
/// ```
/// use block_puzzle_solver::utils::board_from_str;
/// use block_puzzle_solver::error::BoardError;
///
/// let board = board_from_str("abc*            ").unwrap();
/// assert_eq!(board.get_cell(0, 3), '*');
///
/// assert_eq!(board_from_str("abc*"), Err(BoardError::WrongLength { found: 4 }));
/// assert_eq!(board_from_str("abc             "), Err(BoardError::MissingAgent));
/// ```
pub fn board_from_str(s: &str) -> Result<Board, BoardError> {
    let found = s.chars().count();
    if found != BOARD_CELLS {
        return Err(BoardError::WrongLength { found });
    }

    let mut cells = [BLANK as u8; BOARD_CELLS];
    for (index, symbol) in s.chars().enumerate() {
        if !symbol.is_ascii() {
            return Err(BoardError::NonAsciiSymbol { symbol, index });
        }
        cells[index] = symbol as u8;
    }

    let count = cells.iter().filter(|&&cell| cell == AGENT as u8).count();
    match count {
        0 => Err(BoardError::MissingAgent),
        1 => Ok(Board::from_cells(cells)),
        _ => Err(BoardError::MultipleAgents { count }),
    }
}

/// Parses up to four rows into a `Board`, padding short input with blanks.
///
/// Missing rows and the tail of short rows become blank cells, so
/// `["a", "", "", "   *"]` is a valid board. The agent rules of
/// [`board_from_str`] still apply.
pub fn board_from_rows(rows: &[&str]) -> Result<Board, BoardError> {
    if rows.len() > BOARD_WIDTH {
        return Err(BoardError::TooManyRows { found: rows.len() });
    }

    let mut text = String::with_capacity(BOARD_CELLS);
    for (r, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found > BOARD_WIDTH {
            return Err(BoardError::RowTooLong { row: r, found });
        }
        text.push_str(row);
        text.extend(std::iter::repeat(BLANK).take(BOARD_WIDTH - found));
    }
    text.extend(std::iter::repeat(BLANK).take(BOARD_WIDTH * (BOARD_WIDTH - rows.len())));
    board_from_str(&text)
}

/// Walks the agent `steps` random valid moves away from `board`.
///
/// The walk is driven by a `SmallRng` seeded with `seed`, so the same inputs always
/// produce the same board. Every scrambled board can be solved back to `board`.
pub fn scramble(board: &Board, steps: usize, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut current = *board;
    for _ in 0..steps {
        let candidates: Vec<Board> = Move::ALL
            .iter()
            .filter_map(|&mv| current.apply_move(mv))
            .collect();
        if candidates.is_empty() {
            break;
        }
        current = candidates[rng.gen_range(0..candidates.len())];
    }
    current
}
