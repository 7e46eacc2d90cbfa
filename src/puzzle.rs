use crate::state::GameState;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Marker for the empty space.
pub const EMPTY: u32 = 0;

/// A square grid of tile values; [`EMPTY`] marks the blank.
pub type Board = Vec<Vec<u32>>;

/// A search-space state over a puzzle board.
pub type PuzzleState = GameState<Board, Move>;

/// Direction the blank slides in a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Probe order for successor generation.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// `(row, column)` offset of the cell the blank swaps with.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Domain-validation failure for a puzzle board.
///
/// Always fatal for the input that produced it; search exhaustion is not an
/// error and never surfaces here.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid board dimensions, expected {size}x{size}:\n{board}")]
    Shape { size: usize, board: String },
    #[error("empty space not found in board:\n{board}")]
    MissingEmpty { board: String },
    #[error("board does not contain every value from 0 to {max}:\n{board}")]
    MissingTiles { max: u32, board: String },
    #[error("could not parse tile value `{token}`")]
    Parse { token: String },
}

/// Puzzle configuration: grid size and goal board.
///
/// Carrying the goal here instead of in a module-level constant lets several
/// sizes and goal labelings coexist in one process.
#[derive(Debug, Clone)]
pub struct Puzzle {
    size: usize,
    goal: Board,
}

impl Puzzle {
    /// Creates a puzzle with the row-major goal `0, 1, .., size * size - 1`.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        let goal = (0..size)
            .map(|i| (0..size).map(|j| (i * size + j) as u32).collect())
            .collect();
        Self::with_goal(goal)
    }

    /// Creates a puzzle with an explicit goal board.
    pub fn with_goal(goal: Board) -> Result<Self, PuzzleError> {
        let puzzle = Self {
            size: goal.len(),
            goal,
        };
        puzzle.validate(&puzzle.goal)?;
        Ok(puzzle)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// The goal board as an initial (zero-depth, zero-cost) state.
    pub fn goal_state(&self) -> PuzzleState {
        GameState::new(self.goal.clone())
    }

    /// Checks that the board has the configured dimensions, exactly one
    /// empty space, and every value from 0 to `size * size - 1`.
    pub fn validate(&self, board: &Board) -> Result<(), PuzzleError> {
        self.inspect(board).map(|_| ())
    }

    /// Validates the board and returns the position of the empty space.
    fn inspect(&self, board: &Board) -> Result<(usize, usize), PuzzleError> {
        let n = self.size;
        if board.len() != n || board.iter().any(|row| row.len() != n) {
            return Err(PuzzleError::Shape {
                size: n,
                board: render(board),
            });
        }

        let mut empty = None;
        for (i, row) in board.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value == EMPTY {
                    empty = Some((i, j));
                }
            }
        }
        let empty = empty.ok_or_else(|| PuzzleError::MissingEmpty {
            board: render(board),
        })?;

        let mut seen = vec![false; n * n];
        for &value in board.iter().flatten() {
            let slot = value as usize;
            if slot >= n * n || seen[slot] {
                return Err(PuzzleError::MissingTiles {
                    max: (n * n - 1) as u32,
                    board: render(board),
                });
            }
            seen[slot] = true;
        }

        Ok(empty)
    }

    /// Generates one successor per legal slide of the blank, in [`Move::ALL`]
    /// order, each carrying cost and depth incremented by one.
    ///
    /// # Panics
    ///
    /// Panics when handed an invalid board. The adapter never produces one,
    /// so this signals a caller bug rather than a recoverable condition.
    pub fn neighbours(&self, state: &PuzzleState) -> Vec<PuzzleState> {
        let empty = match self.inspect(&state.board) {
            Ok(position) => position,
            Err(error) => panic!("successor generation on an invalid board: {error}"),
        };

        let n = self.size as isize;
        let mut result = Vec::with_capacity(4);
        for direction in Move::ALL {
            let (di, dj) = direction.as_offset();
            let (to_i, to_j) = (empty.0 as isize + di, empty.1 as isize + dj);
            if (0..n).contains(&to_i) && (0..n).contains(&to_j) {
                let board = slide(&state.board, empty, (to_i as usize, to_j as usize));
                result.push(state.step(board, 1, direction));
            }
        }
        result
    }

    /// Sum over non-empty goal tiles of `|row offset| + |column offset|`
    /// between the tile's current and goal positions. Admissible.
    pub fn manhattan(&self, state: &PuzzleState) -> u32 {
        self.displacement(state, |di, dj| (di.unsigned_abs() + dj.unsigned_abs()) as u32)
    }

    /// Sum over non-empty goal tiles of the squared straight-line
    /// displacement between the tile's current and goal positions. Weaker
    /// guidance than [`Puzzle::manhattan`].
    pub fn euclidean_squared(&self, state: &PuzzleState) -> u32 {
        self.displacement(state, |di, dj| (di * di + dj * dj) as u32)
    }

    // Rescans the whole board once per goal tile. Quadratic in the cell
    // count per evaluation, which only passes because boards are tiny; an
    // incremental value-to-position index would be the fix for larger grids.
    fn displacement(&self, state: &PuzzleState, score: impl Fn(isize, isize) -> u32) -> u32 {
        let mut total = 0;
        for (i, row) in self.goal.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value == EMPTY {
                    continue;
                }
                if let Some((x, y)) = find_value(&state.board, value) {
                    total += score(x as isize - i as isize, y as isize - j as isize);
                }
            }
        }
        total
    }

    /// Generates a uniformly shuffled board. No solvability filtering is
    /// applied, so roughly half of the results admit no path to the goal.
    pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> PuzzleState {
        let n = self.size;
        let mut values: Vec<u32> = (0..(n * n) as u32).collect();
        values.shuffle(rng);

        let board = values.chunks(n).map(|chunk| chunk.to_vec()).collect();
        GameState::new(board)
    }

    /// Parses a board from whitespace-separated rows, one row per line, and
    /// validates it.
    pub fn parse_state(&self, input: &str) -> Result<PuzzleState, PuzzleError> {
        let board: Board = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse::<u32>().map_err(|_| PuzzleError::Parse {
                            token: token.to_string(),
                        })
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;

        self.validate(&board)?;
        Ok(GameState::new(board))
    }
}

fn slide(board: &Board, from: (usize, usize), to: (usize, usize)) -> Board {
    let mut next = board.clone();
    next[from.0][from.1] = next[to.0][to.1];
    next[to.0][to.1] = EMPTY;
    next
}

fn find_value(board: &Board, value: u32) -> Option<(usize, usize)> {
    board
        .iter()
        .enumerate()
        .find_map(|(i, row)| row.iter().position(|&cell| cell == value).map(|j| (i, j)))
}

/// Draws the board as boxed ASCII cells, the blank left blank.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (i, row) in board.iter().enumerate() {
        if i == 0 {
            out.push_str(&"____".repeat(row.len()));
            out.push_str("_\n");
        } else {
            out.push_str(&"|___".repeat(row.len()));
            out.push_str("|\n");
        }
        out.push_str(&"|   ".repeat(row.len()));
        out.push_str("|\n| ");
        let cells: Vec<String> = row
            .iter()
            .map(|&value| {
                if value == EMPTY {
                    " ".to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
    }
    if let Some(last) = board.last() {
        out.push_str(&"|___".repeat(last.len()));
        out.push_str("|\n");
    }
    out
}
