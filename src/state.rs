use std::hash::{Hash, Hasher};

/// A node in the search space: a domain payload plus the metadata describing
/// how this instance was reached.
///
/// `B` is the payload (for the puzzle, a board configuration) and `M` is the
/// move label attached by the successor function. Only the payload carries
/// identity: equality and hashing ignore `depth`, `cost` and `last_move`, so a
/// map keyed by `GameState` dedupes by position, not by the path taken to
/// reach it.
#[derive(Debug, Clone)]
pub struct GameState<B, M> {
    /// Domain payload.
    pub board: B,
    /// Number of transitions from the initial state along the producing path.
    pub depth: u32,
    /// Accumulated path cost along the producing path.
    pub cost: u32,
    /// Label of the last transition taken, `None` for the initial state.
    pub last_move: Option<M>,
}

impl<B, M> GameState<B, M> {
    /// Creates an initial state with zero depth and cost and no move.
    pub fn new(board: B) -> Self {
        Self {
            board,
            depth: 0,
            cost: 0,
            last_move: None,
        }
    }

    /// Creates a successor of this state with the given payload, transition
    /// weight and move label.
    pub fn step(&self, board: B, weight: u32, label: M) -> Self {
        Self {
            board,
            depth: self.depth + 1,
            cost: self.cost + weight,
            last_move: Some(label),
        }
    }
}

impl<B: PartialEq, M> PartialEq for GameState<B, M> {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl<B: Eq, M> Eq for GameState<B, M> {}

impl<B: Hash, M> Hash for GameState<B, M> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.board.hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_new() {
        let state: GameState<i32, char> = GameState::new(7);

        assert_eq!(state.board, 7);
        assert_eq!(state.depth, 0);
        assert_eq!(state.cost, 0);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_step() {
        let root: GameState<i32, char> = GameState::new(7);
        let child = root.step(8, 3, 'a');
        let grandchild = child.step(9, 1, 'b');

        assert_eq!(child.board, 8);
        assert_eq!(child.depth, 1);
        assert_eq!(child.cost, 3);
        assert_eq!(child.last_move, Some('a'));
        assert_eq!(grandchild.depth, 2);
        assert_eq!(grandchild.cost, 4);
        assert_eq!(grandchild.last_move, Some('b'));
    }

    #[test]
    fn test_identity_ignores_metadata() {
        let root: GameState<i32, char> = GameState::new(7);
        let via_long_path = GameState {
            board: 7,
            depth: 12,
            cost: 40,
            last_move: Some('z'),
        };
        let other: GameState<i32, char> = GameState::new(8);

        assert_eq!(root, via_long_path);
        assert_ne!(root, other);
    }

    #[test]
    fn test_map_key_dedupes_by_payload() {
        let mut map = HashMap::new();
        let root: GameState<i32, char> = GameState::new(7);
        map.insert(root, 1);

        let same_payload = GameState {
            board: 7,
            depth: 5,
            cost: 5,
            last_move: Some('x'),
        };
        assert_eq!(map.get(&same_payload), Some(&1));

        map.insert(same_payload, 2);
        assert_eq!(map.len(), 1);
    }
}
