use super::SearchOutcome;
use crate::state::GameState;
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;

/// Recursive depth-first search from `start` to `goal`.
///
/// Returns some path when one exists, with no optimality guarantee.
/// Recursion takes successors in reverse generation order, mirroring the pop
/// order of [`solve_iterative`]'s LIFO stack.
///
/// Call-stack depth is bounded by the deepest explored branch, so large or
/// cyclic-but-unpruned search spaces can overflow the stack. Use
/// [`solve_iterative`] when that is a concern.
pub fn solve_recursive<B, M, S>(
    start: GameState<B, M>,
    goal: &GameState<B, M>,
    mut successors: S,
) -> SearchOutcome<B, M>
where
    B: Clone + Eq + Hash,
    M: Clone,
    S: FnMut(&GameState<B, M>) -> Vec<GameState<B, M>>,
{
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    let mut expanded = 0;

    let found = visit(
        start,
        goal,
        &mut successors,
        &mut visited,
        &mut path,
        &mut expanded,
    );

    debug!("recursive depth-first search finished after {expanded} expansions (found: {found})");

    if found {
        SearchOutcome {
            found: true,
            expanded,
            path,
        }
    } else {
        SearchOutcome::not_found(expanded)
    }
}

/// Explores the branch rooted at `current`; `path` holds the states of the
/// branch currently on the call stack, in order.
fn visit<B, M, S>(
    current: GameState<B, M>,
    goal: &GameState<B, M>,
    successors: &mut S,
    visited: &mut HashSet<GameState<B, M>>,
    path: &mut Vec<GameState<B, M>>,
    expanded: &mut usize,
) -> bool
where
    B: Clone + Eq + Hash,
    M: Clone,
    S: FnMut(&GameState<B, M>) -> Vec<GameState<B, M>>,
{
    if visited.contains(&current) {
        return false;
    }

    visited.insert(current.clone());
    path.push(current.clone());
    *expanded += 1;

    if current == *goal {
        return true;
    }

    let mut neighbours = successors(&current);
    while let Some(neighbour) = neighbours.pop() {
        if visit(neighbour, goal, successors, visited, path, expanded) {
            return true;
        }
    }

    path.pop();
    false
}

/// Iterative depth-first search from `start` to `goal`.
///
/// Each stack entry is a full path prefix from the start to a frontier state,
/// so a goal hit returns its path directly with no parent bookkeeping. This
/// trades the recursion-depth limit of [`solve_recursive`] for higher memory
/// use, and need not return the same (valid) path as the recursive variant.
pub fn solve_iterative<B, M, S>(
    start: GameState<B, M>,
    goal: &GameState<B, M>,
    mut successors: S,
) -> SearchOutcome<B, M>
where
    B: Clone + Eq + Hash,
    M: Clone,
    S: FnMut(&GameState<B, M>) -> Vec<GameState<B, M>>,
{
    let mut visited = HashSet::new();
    let mut stack = vec![vec![start]];
    let mut expanded = 0;

    while let Some(prefix) = stack.pop() {
        // Entries are built non-empty below.
        let Some(current) = prefix.last().cloned() else {
            continue;
        };

        if visited.contains(&current) {
            continue;
        }

        visited.insert(current.clone());
        expanded += 1;

        if current == *goal {
            debug!("iterative depth-first search found the goal after {expanded} expansions");

            return SearchOutcome {
                found: true,
                expanded,
                path: prefix,
            };
        }

        for neighbour in successors(&current) {
            let mut extended = prefix.clone();
            extended.push(neighbour);
            stack.push(extended);
        }
    }

    debug!("iterative depth-first search exhausted the frontier after {expanded} expansions");

    SearchOutcome::not_found(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Finite graph with a cycle:
    //
    //   1 -> 2 -> 3
    //   1 -> 4
    //   3 -> 1
    fn graph(state: &GameState<i32, char>) -> Vec<GameState<i32, char>> {
        let edges: &[(i32, char)] = match state.board {
            1 => &[(2, 'a'), (4, 'd')],
            2 => &[(3, 'b')],
            3 => &[(1, 'c')],
            _ => &[],
        };
        edges
            .iter()
            .map(|&(board, label)| state.step(board, 1, label))
            .collect()
    }

    fn assert_valid_path(path: &[GameState<i32, char>], start: i32, goal: i32) {
        assert_eq!(path.first().map(|state| state.board), Some(start));
        assert_eq!(path.last().map(|state| state.board), Some(goal));
        for pair in path.windows(2) {
            let reachable = graph(&pair[0]);
            assert!(reachable.contains(&pair[1]));
        }
    }

    #[test]
    fn test_recursive_finds_some_path() {
        let outcome = solve_recursive(GameState::new(1), &GameState::new(3), graph);

        assert!(outcome.found);
        assert_valid_path(&outcome.path, 1, 3);
    }

    #[test]
    fn test_recursive_explores_last_generated_first() {
        // Successors of 1 are generated as [2, 4]; the branch through 4 is
        // explored first, so the goal is hit on the second expansion.
        let outcome = solve_recursive(GameState::new(1), &GameState::new(4), graph);

        assert!(outcome.found);
        assert_valid_path(&outcome.path, 1, 4);
        assert_eq!(outcome.expanded, 2);
    }

    #[test]
    fn test_recursive_unreachable_goal_terminates_on_cycle() {
        let outcome = solve_recursive(GameState::new(1), &GameState::new(9), graph);

        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.expanded, 4);
    }

    #[test]
    fn test_iterative_finds_some_path() {
        let outcome = solve_iterative(GameState::new(1), &GameState::new(3), graph);

        assert!(outcome.found);
        assert_valid_path(&outcome.path, 1, 3);
    }

    #[test]
    fn test_iterative_unreachable_goal_terminates_on_cycle() {
        let outcome = solve_iterative(GameState::new(1), &GameState::new(9), graph);

        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.expanded, 4);
    }

    #[test]
    fn test_variants_agree_on_reachability() {
        for goal in [2, 3, 4, 9] {
            let recursive = solve_recursive(GameState::new(1), &GameState::new(goal), graph);
            let iterative = solve_iterative(GameState::new(1), &GameState::new(goal), graph);
            assert_eq!(recursive.found, iterative.found);
        }
    }

    #[test]
    fn test_pure_across_invocations() {
        let first = solve_iterative(GameState::new(1), &GameState::new(3), graph);
        let second = solve_iterative(GameState::new(1), &GameState::new(3), graph);

        assert_eq!(first, second);
    }
}
