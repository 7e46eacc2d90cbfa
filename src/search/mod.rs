pub mod astar;
pub mod bfs;
pub mod dfs;

use crate::state::GameState;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Map from a state to the state it was first expanded from.
///
/// `None` marks the root of the search. Keys compare by payload, so every
/// position is recorded at most once and the map always encodes a tree even
/// when the underlying search graph has cycles.
pub type ParentMap<B, M> = HashMap<GameState<B, M>, Option<GameState<B, M>>>;

/// Result of a search invocation.
#[derive(Clone, PartialEq, Debug)]
pub struct SearchOutcome<B, M> {
    /// Whether a path to the goal was found.
    pub found: bool,
    /// Number of states expanded before termination.
    pub expanded: usize,
    /// Full path from the start to the goal, empty when no path was found.
    pub path: Vec<GameState<B, M>>,
}

impl<B, M> SearchOutcome<B, M> {
    /// Creates the outcome of an exhausted search.
    pub fn not_found(expanded: usize) -> Self {
        Self {
            found: false,
            expanded,
            path: Vec::new(),
        }
    }

    /// Total cost of the found path.
    pub fn total_cost(&self) -> Option<u32> {
        self.path.last().map(|state| state.cost)
    }

    /// Depth of the goal state on the found path.
    pub fn depth(&self) -> Option<u32> {
        self.path.last().map(|state| state.depth)
    }
}

/// Search algorithm selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    BreadthFirst,
    DepthFirstRecursive,
    DepthFirstIterative,
    AStar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Strategy::BreadthFirst => "breadth-first search",
            Strategy::DepthFirstRecursive => "depth-first search (recursive)",
            Strategy::DepthFirstIterative => "depth-first search (iterative)",
            Strategy::AStar => "A* search",
        };
        write!(f, "{}", s)
    }
}

/// Runs the selected strategy with a uniform signature.
///
/// The heuristic is consulted only by [`Strategy::AStar`]; uninformed
/// strategies ignore it, so call sites may pass [`astar::uniform`].
pub fn run<B, M, S, H>(
    strategy: Strategy,
    start: GameState<B, M>,
    goal: &GameState<B, M>,
    successors: S,
    heuristic: H,
) -> SearchOutcome<B, M>
where
    B: Clone + Eq + Hash,
    M: Clone,
    S: FnMut(&GameState<B, M>) -> Vec<GameState<B, M>>,
    H: Fn(&GameState<B, M>) -> u32,
{
    match strategy {
        Strategy::BreadthFirst => bfs::solve(start, goal, successors),
        Strategy::DepthFirstRecursive => dfs::solve_recursive(start, goal, successors),
        Strategy::DepthFirstIterative => dfs::solve_iterative(start, goal, successors),
        Strategy::AStar => astar::solve(start, goal, successors, heuristic),
    }
}

/// Reconstructs the start-to-goal path by following parent pointers from the
/// goal back to the root and reversing.
pub(crate) fn trace<B, M>(parents: &ParentMap<B, M>, goal: &GameState<B, M>) -> Vec<GameState<B, M>>
where
    B: Clone + Eq + Hash,
    M: Clone,
{
    let mut path = Vec::new();
    let mut current = goal;

    loop {
        path.push(current.clone());
        match parents.get(current) {
            Some(Some(parent)) => current = parent,
            _ => break,
        }
    }

    path.reverse();
    path
}
