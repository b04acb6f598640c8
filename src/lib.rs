//! # Block Puzzle Solver Library
//!
//! This library solves a 4x4 sliding-block puzzle: a board of lettered blocks,
//! blanks and a single agent `*` that swaps places with a neighbouring cell on each
//! move. Given a start and a goal board it searches for a sequence of moves between
//! them, either breadth-first or greedy best-first.
//!
//! It is used by two binaries:
//! - `solve`: Takes a start and goal board and prints the solution path.
//! - `benchmark`: Times repeated searches, for one or both strategies.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), moves (`Move`) and structural hashing.
//! - `node`: Search tree nodes, the move generator with its per-branch cycle guard,
//!   and solution path reconstruction.
//! - `heuristics`: The positional distance score used by best-first search.
//! - `frontier`: FIFO and score-ordered frontiers behind a common `Frontier` trait.
//! - `solver`: The shared expansion loop, search configuration and statistics.
//! - `utils`: Parsing and validating boards from strings, and seeded scrambling.
//! - `error`: Board parsing and search failure types.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;
