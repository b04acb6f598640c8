//! Search tree nodes, move generation and solution path reconstruction.
//!
//! Every node owns an immutable board snapshot and a shared link to its parent.
//! Links only point towards the root, so the tree can never contain a cycle, and a
//! node stays alive for as long as a child or a frontier entry still refers to it.

use crate::engine::{Board, Move};
use std::rc::Rc;

/// Why a move produced no successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// The agent would leave the board.
    InvalidMove,
    /// The resulting board already appears further up this branch.
    CyclicMove,
}

/// A visited puzzle state together with the chain of states that led to it.
#[derive(Debug)]
pub struct SearchNode {
    board: Board,
    hash: u64,
    parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Creates a root node with no predecessor.
    pub fn root(board: Board) -> Rc<SearchNode> {
        Rc::new(SearchNode {
            hash: board.structural_hash(),
            board,
            parent: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Structural hash of the board, computed once at construction.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode>> {
        self.parent.as_ref()
    }

    /// Number of moves between the root and this node.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Iterates over the predecessors of this node, nearest first, ending at the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// Generates the successor of `parent` reached by `mv`.
    ///
    /// Returns `None` when the move would leave the board, or when the resulting
    /// board matches one of `parent`'s own ancestors (the immediate parent is not
    /// checked). The guard only looks along this branch; the same board reached
    /// through another branch is still accepted.
    pub fn try_move(parent: &Rc<SearchNode>, mv: Move) -> Option<Rc<SearchNode>> {
        SearchNode::successor(parent, mv).ok()
    }

    /// Same as [`SearchNode::try_move`], but reports why a move was dropped.
    pub fn successor(parent: &Rc<SearchNode>, mv: Move) -> Result<Rc<SearchNode>, MoveRejection> {
        let board = parent
            .board
            .apply_move(mv)
            .ok_or(MoveRejection::InvalidMove)?;
        let hash = board.structural_hash();

        if parent.ancestors().any(|ancestor| ancestor.hash == hash) {
            return Err(MoveRejection::CyclicMove);
        }

        Ok(Rc::new(SearchNode {
            board,
            hash,
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Unwinds the parent chain into the boards from the root to this node.
    ///
    /// The returned iterator is consumed once; call `path` again for another pass.
    ///
    /// # Examples
    /// ```
    /// use block_puzzle_solver::engine::Move;
    /// use block_puzzle_solver::node::SearchNode;
    /// use block_puzzle_solver::utils::board_from_str;
    ///
    /// let root = SearchNode::root(board_from_str("*a              ").unwrap());
    /// let child = SearchNode::try_move(&root, Move::Right).unwrap();
    /// let boards: Vec<String> = child.path().map(|b| b.to_compact_string()).collect();
    /// assert_eq!(boards, ["*a              ", "a*              "]);
    /// ```
    pub fn path(&self) -> SolutionPath {
        let mut boards = vec![self.board];
        boards.extend(self.ancestors().map(|node| node.board));
        boards.reverse();
        SolutionPath {
            boards: boards.into_iter(),
        }
    }
}

impl Drop for SearchNode {
    // Unlink the parent chain iteratively; deep solution paths would otherwise
    // recurse once per ancestor when the last reference goes away.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut owned) => owned.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over a node's ancestors, see [`SearchNode::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a SearchNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// Boards of a solution, ordered from the start board to the terminal board.
#[derive(Debug)]
pub struct SolutionPath {
    boards: std::vec::IntoIter<Board>,
}

impl Iterator for SolutionPath {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.boards.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.boards.size_hint()
    }
}

impl ExactSizeIterator for SolutionPath {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str;

    fn root_of(text: &str) -> Rc<SearchNode> {
        SearchNode::root(board_from_str(text).unwrap())
    }

    #[test]
    fn test_root_has_no_parent() {
        let root = root_of("a   *    b c    ");
        assert!(root.parent().is_none());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.hash(), root.board().structural_hash());
    }

    #[test]
    fn test_try_move_links_parent() {
        let root = root_of("a   *    b c    ");
        let child = SearchNode::try_move(&root, Move::Right).unwrap();
        assert!(Rc::ptr_eq(child.parent().unwrap(), &root));
        assert_eq!(child.depth(), 1);
        assert_eq!(child.board().to_compact_string(), "a    *   b c    ");
        assert_eq!(Rc::strong_count(&root), 2);
    }

    #[test]
    fn test_try_move_rejects_out_of_bounds() {
        let root = root_of("a   *    b c    ");
        assert!(SearchNode::try_move(&root, Move::Left).is_none());
    }

    #[test]
    fn test_try_move_rejects_return_to_grandparent() {
        let root = root_of("a   *    b c    ");
        let child = SearchNode::try_move(&root, Move::Right).unwrap();
        assert!(SearchNode::try_move(&child, Move::Left).is_none());
        assert!(SearchNode::try_move(&child, Move::Right).is_some());
    }

    #[test]
    fn test_successor_reports_rejection_reason() {
        let root = root_of("a   *    b c    ");
        assert_eq!(
            SearchNode::successor(&root, Move::Left).unwrap_err(),
            MoveRejection::InvalidMove
        );
        let child = SearchNode::successor(&root, Move::Up).unwrap();
        assert_eq!(
            SearchNode::successor(&child, Move::Down).unwrap_err(),
            MoveRejection::CyclicMove
        );
    }

    #[test]
    fn test_try_move_rejects_older_ancestor() {
        // Right, Down, Left, Up walks the agent around a 2x2 square back to the root board.
        let root = root_of("*               ");
        let a = SearchNode::try_move(&root, Move::Right).unwrap();
        let b = SearchNode::try_move(&a, Move::Down).unwrap();
        let c = SearchNode::try_move(&b, Move::Left).unwrap();
        assert!(SearchNode::try_move(&c, Move::Up).is_none());
    }

    #[test]
    fn test_cycle_guard_is_per_branch() {
        // The same board reached along two different branches is accepted on both.
        let root = root_of("*               ");
        let right = SearchNode::try_move(&root, Move::Right).unwrap();
        let down = SearchNode::try_move(&root, Move::Down).unwrap();
        let via_right = SearchNode::try_move(&right, Move::Down).unwrap();
        let via_down = SearchNode::try_move(&down, Move::Right).unwrap();
        assert_eq!(via_right.board(), via_down.board());
    }

    #[test]
    fn test_path_runs_from_root_to_node() {
        let root = root_of("*               ");
        let a = SearchNode::try_move(&root, Move::Right).unwrap();
        let b = SearchNode::try_move(&a, Move::Down).unwrap();

        let path: Vec<Board> = b.path().collect();
        assert_eq!(path.len(), 3);
        assert_eq!(&path[0], root.board());
        assert_eq!(&path[1], a.board());
        assert_eq!(&path[2], b.board());
    }

    #[test]
    fn test_path_can_be_rebuilt() {
        let root = root_of("*               ");
        let a = SearchNode::try_move(&root, Move::Down).unwrap();
        let mut first = a.path();
        assert_eq!(first.len(), 2);
        first.by_ref().for_each(drop);
        assert_eq!(first.next(), None);
        assert_eq!(a.path().count(), 2);
    }

    #[test]
    fn test_dropping_long_chain() {
        let mut node = root_of("*               ");
        for i in 0..200_000 {
            let mv = if i % 2 == 0 { Move::Right } else { Move::Left };
            // Bypass the cycle guard to build an arbitrarily deep chain.
            let board = node.board().apply_move(mv).unwrap();
            node = Rc::new(SearchNode {
                hash: board.structural_hash(),
                board,
                parent: Some(Rc::clone(&node)),
            });
        }
        assert_eq!(node.depth(), 200_000);
        drop(node);
    }
}
