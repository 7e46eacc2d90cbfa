//! Classical uninformed and informed graph search, demonstrated on the
//! 8-puzzle sliding-tile problem.
//!
//! The search algorithms ([`search::bfs`], [`search::dfs`],
//! [`search::astar`]) are generic over a [`state::GameState`] payload and a
//! caller-supplied successor function; the puzzle domain ([`puzzle`])
//! supplies boards, moves, validation and two heuristics on top of that
//! abstraction.

pub mod puzzle;
pub mod search;
pub mod state;

pub use puzzle::{Board, Move, Puzzle, PuzzleError, PuzzleState};
pub use search::{SearchOutcome, Strategy};
pub use state::GameState;
