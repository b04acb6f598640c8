use crate::engine::{Board, Move};
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, ScoredFrontier};
use crate::node::{MoveRejection, SearchNode, SolutionPath};
use log::{debug, trace};
use std::collections::HashSet;
use std::rc::Rc;

/// Order in which the solver expands pending nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Expand the oldest pending node first.
    BreadthFirst,
    /// Expand the node with the lowest heuristic score first. This is greedy:
    /// no path cost is added, so the solution found is not necessarily the shortest.
    BestFirst,
}

/// Tunable knobs for a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Also skip boards already generated anywhere in the tree, not just on the
    /// current branch. Off by default.
    pub global_visited: bool,
    /// Stop after this many expansions. The expansion order is unaffected.
    pub max_iterations: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::BreadthFirst,
            global_visited: false,
            max_iterations: None,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(strategy: Strategy) -> Self {
        SearchConfig {
            strategy,
            ..SearchConfig::default()
        }
    }
}

/// Counters collected while a search runs. Diagnostic only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub iterations: u64,
    /// Successor nodes created.
    pub generated: u64,
    /// Moves dropped because the agent would leave the board.
    pub invalid_moves: u64,
    /// Moves dropped because the board repeats an ancestor on the same branch.
    pub cyclic_moves: u64,
    /// Moves dropped by the global visited set, when enabled.
    pub revisited: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// A successful search: the node holding the goal board plus run statistics.
#[derive(Debug)]
pub struct Solution {
    pub terminal: Rc<SearchNode>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of moves from the start board to the goal.
    pub fn moves(&self) -> usize {
        self.terminal.depth()
    }

    /// Boards from start to goal.
    pub fn path(&self) -> SolutionPath {
        self.terminal.path()
    }
}

/// Searches for a sequence of moves turning `start` into `goal`.
///
/// The root is checked against the goal first. After that, nodes are taken from
/// the frontier one at a time and expanded in the order of `Move::ALL`; the first
/// successor whose hash matches the goal ends the search.
///
/// # Returns
/// * `Ok(Solution)` with the terminal node when the goal is reached.
/// * `Err(SearchError::Exhausted)` when the frontier runs dry.
/// * `Err(SearchError::IterationLimit)` when `config.max_iterations` is hit first.
///
/// # Examples
/// ```
/// use block_puzzle_solver::solver::{solve, SearchConfig, Strategy};
/// use block_puzzle_solver::utils::board_from_str;
///
/// let start = board_from_str("a   *    b c    ").unwrap();
/// let goal = board_from_str("abc*            ").unwrap();
/// let solution = solve(&start, &goal, &SearchConfig::with_strategy(Strategy::BestFirst)).unwrap();
/// assert_eq!(solution.path().last(), Some(goal));
/// ```
pub fn solve(start: &Board, goal: &Board, config: &SearchConfig) -> Result<Solution, SearchError> {
    debug!(
        "Starting {:?} search from {:?} to {:?}",
        config.strategy,
        start.to_compact_string(),
        goal.to_compact_string()
    );
    let result = match config.strategy {
        Strategy::BreadthFirst => expand(start, goal, FifoFrontier::new(), config),
        Strategy::BestFirst => expand(start, goal, ScoredFrontier::new(*goal), config),
    };
    match &result {
        Ok(solution) => debug!(
            "Goal reached in {} moves: {:?}",
            solution.moves(),
            solution.stats
        ),
        Err(err) => debug!("Search failed: {}", err),
    }
    result
}

/// Breadth-first search with the default per-branch cycle guard.
///
/// Returns the terminal node, or `None` when the search space is exhausted.
pub fn breadth_first(start: &Board, goal: &Board) -> Option<Rc<SearchNode>> {
    solve(start, goal, &SearchConfig::with_strategy(Strategy::BreadthFirst))
        .ok()
        .map(|solution| solution.terminal)
}

/// Greedy best-first search ordered by [`crate::heuristics::score`].
///
/// Returns the terminal node, or `None` when the search space is exhausted.
pub fn best_first(start: &Board, goal: &Board) -> Option<Rc<SearchNode>> {
    solve(start, goal, &SearchConfig::with_strategy(Strategy::BestFirst))
        .ok()
        .map(|solution| solution.terminal)
}

fn expand<F: Frontier>(
    start: &Board,
    goal: &Board,
    mut frontier: F,
    config: &SearchConfig,
) -> Result<Solution, SearchError> {
    let goal_hash = goal.structural_hash();
    let mut stats = SearchStats::default();

    let root = SearchNode::root(*start);
    if root.hash() == goal_hash {
        return Ok(Solution {
            terminal: root,
            stats,
        });
    }

    let mut visited = HashSet::new();
    if config.global_visited {
        visited.insert(root.hash());
    }
    frontier.push(root);
    stats.peak_frontier = frontier.len();

    while let Some(parent) = frontier.pop() {
        if let Some(limit) = config.max_iterations {
            if stats.iterations >= limit {
                return Err(SearchError::IterationLimit { limit });
            }
        }
        trace!(
            "Expanding {:?} at depth {}",
            parent.board().to_compact_string(),
            parent.depth()
        );

        for mv in Move::ALL {
            let next = match SearchNode::successor(&parent, mv) {
                Ok(next) => next,
                Err(MoveRejection::InvalidMove) => {
                    stats.invalid_moves += 1;
                    continue;
                }
                Err(MoveRejection::CyclicMove) => {
                    stats.cyclic_moves += 1;
                    continue;
                }
            };
            if config.global_visited && !visited.insert(next.hash()) {
                stats.revisited += 1;
                continue;
            }
            stats.generated += 1;

            if next.hash() == goal_hash {
                stats.iterations += 1;
                return Ok(Solution {
                    terminal: next,
                    stats,
                });
            }
            frontier.push(next);
        }

        stats.iterations += 1;
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    Err(SearchError::Exhausted {
        iterations: stats.iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::score;
    use crate::utils::{board_from_str, scramble};

    const START: &str = "a   *    b c    ";
    const GOAL: &str = "abc*            ";

    fn boards() -> (Board, Board) {
        (board_from_str(START).unwrap(), board_from_str(GOAL).unwrap())
    }

    fn assert_single_swap_steps(path: &[Board]) {
        for pair in path.windows(2) {
            let reachable = Move::ALL
                .iter()
                .any(|&mv| pair[0].apply_move(mv) == Some(pair[1]));
            assert!(
                reachable,
                "{:?} -> {:?} is not a single agent move",
                pair[0].to_compact_string(),
                pair[1].to_compact_string()
            );
        }
    }

    fn assert_valid_solution(terminal: &SearchNode, start: &Board, goal: &Board) {
        assert_eq!(terminal.hash(), goal.structural_hash());
        let path: Vec<Board> = terminal.path().collect();
        assert_eq!(path.first(), Some(start));
        assert_eq!(path.last(), Some(goal));
        assert_eq!(path.len(), terminal.depth() + 1);
        assert_single_swap_steps(&path);
    }

    #[test]
    fn test_breadth_first_solves_scenario() {
        let (start, goal) = boards();
        let terminal = breadth_first(&start, &goal).expect("breadth-first should find the goal");
        assert_valid_solution(&terminal, &start, &goal);
        // 18 is the fewest moves between these boards.
        assert_eq!(terminal.depth(), 18);
    }

    #[test]
    fn test_best_first_solves_scenario() {
        let (start, goal) = boards();
        let terminal = best_first(&start, &goal).expect("best-first should find the goal");
        assert_valid_solution(&terminal, &start, &goal);
        assert!(terminal.depth() >= 18);
    }

    #[test]
    fn test_start_equal_to_goal_returns_root() {
        let (_, goal) = boards();
        for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
            let solution = solve(&goal, &goal, &SearchConfig::with_strategy(strategy)).unwrap();
            assert_eq!(solution.moves(), 0);
            assert!(solution.terminal.parent().is_none());
            assert_eq!(solution.stats.iterations, 0);
            assert_eq!(solution.path().count(), 1);
        }
    }

    #[test]
    fn test_one_move_goal_is_found_on_first_expansion() {
        let (start, _) = boards();
        let goal = start.apply_move(Move::Down).unwrap();
        let solution = solve(&start, &goal, &SearchConfig::default()).unwrap();
        assert_eq!(solution.moves(), 1);
        assert_eq!(solution.stats.iterations, 1);
    }

    #[test]
    fn test_unreachable_goal_exhausts() {
        // A board holding only the agent can never grow a block.
        let start = board_from_str("*               ").unwrap();
        let goal = board_from_str("a*              ").unwrap();
        for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
            let result = solve(&start, &goal, &SearchConfig::with_strategy(strategy));
            assert_eq!(result.unwrap_err(), SearchError::Exhausted { iterations: 2111 });
        }
        assert!(breadth_first(&start, &goal).is_none());
        assert!(best_first(&start, &goal).is_none());
    }

    #[test]
    fn test_exhaustion_with_global_visited_explores_each_board_once() {
        let start = board_from_str("*               ").unwrap();
        let goal = board_from_str("a*              ").unwrap();
        let config = SearchConfig {
            global_visited: true,
            ..SearchConfig::default()
        };
        let result = solve(&start, &goal, &config);
        assert_eq!(result.unwrap_err(), SearchError::Exhausted { iterations: 16 });
    }

    #[test]
    fn test_global_visited_still_finds_shortest_path() {
        let (start, goal) = boards();
        let config = SearchConfig {
            global_visited: true,
            ..SearchConfig::default()
        };
        let solution = solve(&start, &goal, &config).unwrap();
        assert_valid_solution(&solution.terminal, &start, &goal);
        assert_eq!(solution.moves(), 18);
        assert!(solution.stats.revisited > 0);
    }

    #[test]
    fn test_iteration_limit_stops_search() {
        let (start, goal) = boards();
        let config = SearchConfig {
            max_iterations: Some(10),
            ..SearchConfig::default()
        };
        let result = solve(&start, &goal, &config);
        assert_eq!(result.unwrap_err(), SearchError::IterationLimit { limit: 10 });
    }

    #[test]
    fn test_stats_are_collected() {
        let (start, goal) = boards();
        let solution = solve(&start, &goal, &SearchConfig::with_strategy(Strategy::BestFirst)).unwrap();
        let stats = &solution.stats;
        assert!(stats.iterations > 0);
        assert!(stats.generated > 0);
        assert!(stats.invalid_moves > 0);
        assert!(stats.cyclic_moves > 0);
        assert_eq!(stats.revisited, 0);
        assert!(stats.peak_frontier > 0);
    }

    #[test]
    fn test_both_strategies_solve_scrambled_boards() {
        let (_, goal) = boards();
        for seed in 0..5 {
            let start = scramble(&goal, 8, seed);
            for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
                let solution = solve(&start, &goal, &SearchConfig::with_strategy(strategy))
                    .unwrap_or_else(|e| panic!("seed {} with {:?}: {}", seed, strategy, e));
                assert_valid_solution(&solution.terminal, &start, &goal);
                assert!(solution.moves() <= 8 || strategy == Strategy::BestFirst);
            }
        }
    }

    #[test]
    fn test_goal_scores_zero() {
        let (_, goal) = boards();
        assert_eq!(score(&goal, &goal), 0);
    }
}
