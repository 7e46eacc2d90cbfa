use anyhow::Context;
use crossterm::style::Stylize;
use log::info;
use puzzle_search::puzzle::{self, Puzzle, PuzzleState};
use puzzle_search::search::{self, astar, Strategy};
use std::io;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let puzzle = Puzzle::new(3).context("building the 3x3 puzzle")?;

    let start = if std::env::args().any(|arg| arg == "--random") {
        let state = puzzle.random_state(&mut rand::thread_rng());
        info!("generated a random start board (it may be unsolvable)");
        state
    } else {
        read_board_from_stdin(&puzzle)?
    };

    evaluate(&puzzle, &start, Strategy::AStar, Some("Manhattan"), |state| {
        puzzle.manhattan(state)
    });
    evaluate(
        &puzzle,
        &start,
        Strategy::AStar,
        Some("squared Euclidean"),
        |state| puzzle.euclidean_squared(state),
    );
    evaluate(&puzzle, &start, Strategy::BreadthFirst, None, astar::uniform);
    // Recursive DFS is left out here: an arbitrary board can drive it deep
    // enough to overflow the call stack. The iterative variant covers the
    // same ground with an explicit stack.
    evaluate(
        &puzzle,
        &start,
        Strategy::DepthFirstIterative,
        None,
        astar::uniform,
    );

    Ok(())
}

fn read_board_from_stdin(puzzle: &Puzzle) -> anyhow::Result<PuzzleState> {
    println!("Please enter the elements row by row separated by spaces.");
    println!("Use 0 to represent the empty space.");

    let mut input = String::new();
    for _ in 0..puzzle.size() {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("reading a board row")?;
        input.push_str(&line);
    }

    Ok(puzzle.parse_state(&input)?)
}

fn evaluate<H>(
    puzzle: &Puzzle,
    start: &PuzzleState,
    strategy: Strategy,
    heuristic_label: Option<&str>,
    heuristic: H,
) where
    H: Fn(&PuzzleState) -> u32,
{
    let title = match heuristic_label {
        Some(label) => format!("{strategy} with the {label} heuristic"),
        None => strategy.to_string(),
    };
    println!("{}", format!("Finding a path to the goal using {title}").bold());
    println!("{}", puzzle::render(&start.board));

    let clock = Instant::now();
    let outcome = search::run(
        strategy,
        start.clone(),
        &puzzle.goal_state(),
        |state| puzzle.neighbours(state),
        heuristic,
    );
    let elapsed = clock.elapsed();

    if !outcome.found {
        println!("{}", "Couldn't find a path to the goal.".red());
        println!("Expanded nodes: {}", outcome.expanded);
        println!("Running time: {:.3?}\n", elapsed);
        return;
    }

    info!(
        "{title} found a path of cost {} after {} expansions",
        outcome.total_cost().unwrap_or(0),
        outcome.expanded
    );

    for state in outcome.path.iter().skip(1) {
        if let Some(direction) = state.last_move {
            println!("Move: {direction}");
        }
        println!("{}", puzzle::render(&state.board));
    }

    println!("{}", format!("Result of {title}").green());
    println!("Total path cost: {}", outcome.total_cost().unwrap_or(0));
    println!("Depth: {}", outcome.depth().unwrap_or(0));
    println!("Expanded nodes: {}", outcome.expanded);
    println!("Running time: {:.3?}\n", elapsed);
}
