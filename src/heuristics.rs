use crate::engine::Board;
use crate::node::SearchNode;

/// Estimates how far `board` is from `goal`.
///
/// For every goal position whose symbol the board does not already hold there,
/// adds the distance between that position and the first index of the same symbol
/// on the board. Distances are taken on the flattened 0..16 index, not on rows and
/// columns, so this is a city-block style approximation rather than a true grid
/// distance. Symbols missing from the board contribute the distance to the end of
/// the board.
///
/// Lower is better. A board scored against itself is always 0, but a score of 0 is
/// never treated as proof of reaching the goal; the solver compares hashes for that.
///
/// # Examples
/// ```
/// use block_puzzle_solver::heuristics::score;
/// use block_puzzle_solver::utils::board_from_str;
///
/// let goal = board_from_str("abc*            ").unwrap();
/// assert_eq!(score(&goal, &goal), 0);
/// let start = board_from_str("a   *    b c    ").unwrap();
/// assert!(score(&start, &goal) > 0);
/// ```
pub fn score(board: &Board, goal: &Board) -> u32 {
    let cells = board.cells();
    goal.cells()
        .iter()
        .enumerate()
        .filter(|&(i, &symbol)| cells[i] != symbol)
        .map(|(i, &symbol)| {
            let found = board.position_of(symbol).unwrap_or(cells.len());
            found.abs_diff(i) as u32
        })
        .sum()
}

/// Scores the board held by `node`, see [`score`].
pub fn score_node(node: &SearchNode, goal: &Board) -> u32 {
    score(node.board(), goal)
}
