use super::{trace, ParentMap, SearchOutcome};
use crate::state::GameState;
use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

/// Breadth-first search from `start` to `goal`.
///
/// The frontier holds `(parent, state)` pairs in FIFO order; a state already
/// present in the parent map is dropped when dequeued instead of being
/// filtered out at enqueue time. The first dequeue of any state happens along
/// a shortest-edge-count path, so the returned path is depth-optimal under
/// uniform transition costs. An unreachable goal is a normal outcome: the
/// frontier empties and `found` is false.
pub fn solve<B, M, S>(
    start: GameState<B, M>,
    goal: &GameState<B, M>,
    mut successors: S,
) -> SearchOutcome<B, M>
where
    B: Clone + Eq + Hash,
    M: Clone,
    S: FnMut(&GameState<B, M>) -> Vec<GameState<B, M>>,
{
    let mut parents = ParentMap::new();
    let mut frontier = VecDeque::new();
    frontier.push_back((None, start));
    let mut expanded = 0;

    while let Some((parent, current)) = frontier.pop_front() {
        if parents.contains_key(&current) {
            continue;
        }

        expanded += 1;
        parents.insert(current.clone(), parent);

        if current == *goal {
            debug!("breadth-first search found the goal after {expanded} expansions");

            return SearchOutcome {
                found: true,
                expanded,
                path: trace(&parents, &current),
            };
        }

        for neighbour in successors(&current) {
            frontier.push_back((Some(current.clone()), neighbour));
        }
    }

    debug!("breadth-first search exhausted the frontier after {expanded} expansions");

    SearchOutcome::not_found(expanded)
}
