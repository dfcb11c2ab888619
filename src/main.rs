//! Sliding-Tile Puzzle Solver
//!
//! Solves 8-puzzle and 15-puzzle boards optimally with A* under a selectable
//! admissible heuristic. Boards come from a random-walk scrambler or from
//! explicit tile lists; a comparison mode runs repeated trials to contrast
//! how many states each heuristic expands.

use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fifteen::board::{BoardError, EIGHT_PUZZLE, FIFTEEN_PUZZLE};
use fifteen::heuristic::Heuristic;
use fifteen::scramble::DEFAULT_STEPS;
use fifteen::PuzzleOps;

/// Solves sliding-tile puzzles optimally and compares search heuristics.
#[derive(Parser)]
#[command(name = "fifteen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length (3 for the 8-puzzle, 4 for the 15-puzzle).
    #[arg(long, default_value_t = 4, global = true)]
    size: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scramble a board, solve it, and print the move sequence.
    Demo {
        #[arg(long, value_enum, default_value = "taxicab")]
        heuristic: HeuristicChoice,
        /// Number of random slides applied to the goal board.
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,
        /// Fixed RNG seed for reproducible scrambles.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run repeated trials solving each scramble with both heuristics.
    Compare {
        #[arg(long, default_value_t = 10)]
        trials: usize,
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a scrambled board together with its solvability verdict.
    Scramble {
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve an explicit board given as flat row-major tile labels (0 = blank).
    Solve {
        #[arg(long, value_enum, default_value = "taxicab")]
        heuristic: HeuristicChoice,
        #[arg(required = true)]
        tiles: Vec<u8>,
    },
}

/// CLI-facing heuristic names.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicChoice {
    /// Count of misplaced tiles.
    Mismatch,
    /// Sum of per-tile taxicab distances.
    Taxicab,
}

impl From<HeuristicChoice> for Heuristic {
    fn from(choice: HeuristicChoice) -> Self {
        match choice {
            HeuristicChoice::Mismatch => Heuristic::Mismatch,
            HeuristicChoice::Taxicab => Heuristic::Taxicab,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let puzzle = match puzzle_for_size(cli.size) {
        Some(puzzle) => puzzle,
        None => {
            eprintln!("unsupported board size {} (use 3 or 4)", cli.size);
            process::exit(2);
        }
    };

    let result = match cli.command {
        Some(Command::Demo {
            heuristic,
            steps,
            seed,
        }) => run_demo(puzzle.as_ref(), heuristic.into(), steps, seed),
        Some(Command::Compare {
            trials,
            steps,
            seed,
        }) => run_compare(puzzle.as_ref(), trials, steps, seed),
        Some(Command::Scramble { steps, seed }) => {
            run_scramble(puzzle.as_ref(), steps, seed)
        }
        Some(Command::Solve { heuristic, tiles }) => {
            run_solve(puzzle.as_ref(), heuristic.into(), &tiles)
        }
        // default: demonstrate a single solve on the chosen size
        None => run_demo(puzzle.as_ref(), Heuristic::Taxicab, DEFAULT_STEPS, None),
    };

    if let Err(e) = result {
        eprintln!("invalid board: {e}");
        process::exit(1);
    }
}

/// Boxes the puzzle definition matching the requested side length.
fn puzzle_for_size(size: usize) -> Option<Box<dyn PuzzleOps>> {
    match size {
        3 => Some(Box::new(EIGHT_PUZZLE)),
        4 => Some(Box::new(FIFTEEN_PUZZLE)),
        _ => None,
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Scrambles one board and walks through a full solve.
fn run_demo(
    puzzle: &dyn PuzzleOps,
    heuristic: Heuristic,
    steps: usize,
    seed: Option<u64>,
) -> Result<(), BoardError> {
    let mut rng = rng_from(seed);
    let tiles = puzzle.scramble(steps, &mut rng);

    println!("Start board ({} random slides from the goal):", steps);
    print!("{}", puzzle.render(&tiles)?);

    let started = Instant::now();
    let solution = puzzle.solve(&tiles, heuristic)?;
    let elapsed = started.elapsed();

    println!(
        "Solved in {} moves with {:?}, expanding {} states in {} ms",
        solution.moves.len(),
        heuristic,
        solution.visited,
        elapsed.as_millis()
    );
    if !solution.moves.is_empty() {
        let sequence: Vec<String> = solution.moves.iter().map(u8::to_string).collect();
        println!("Tiles to slide: {}", sequence.join(" "));
    }

    Ok(())
}

/// Runs `trials` scrambles, solving each with both heuristics, and prints
/// per-trial counters plus averages.
fn run_compare(
    puzzle: &dyn PuzzleOps,
    trials: usize,
    steps: usize,
    seed: Option<u64>,
) -> Result<(), BoardError> {
    let mut rng = rng_from(seed);
    let mut total_visited = [0usize; 2];
    let mut total_moves = [0usize; 2];

    println!(
        "Running {} trials on the {}x{} board...",
        trials,
        puzzle.size(),
        puzzle.size()
    );

    for trial in 1..=trials {
        let tiles = puzzle.scramble(steps, &mut rng);

        let mismatch = puzzle.solve(&tiles, Heuristic::Mismatch)?;
        let taxicab = puzzle.solve(&tiles, Heuristic::Taxicab)?;

        println!(
            "Trial {}: mismatch expanded {} states ({} moves), taxicab expanded {} states ({} moves)",
            trial,
            mismatch.visited,
            mismatch.moves.len(),
            taxicab.visited,
            taxicab.moves.len()
        );

        total_visited[0] += mismatch.visited;
        total_visited[1] += taxicab.visited;
        total_moves[0] += mismatch.moves.len();
        total_moves[1] += taxicab.moves.len();
    }

    if trials > 0 {
        let trials = trials as f64;
        println!("Average expanded states:");
        println!("  mismatch: {:.1}", total_visited[0] as f64 / trials);
        println!("  taxicab:  {:.1}", total_visited[1] as f64 / trials);
        println!("Average solution length:");
        println!("  mismatch: {:.1}", total_moves[0] as f64 / trials);
        println!("  taxicab:  {:.1}", total_moves[1] as f64 / trials);
    }

    Ok(())
}

/// Prints a scrambled board and cross-checks it against the parity oracle.
fn run_scramble(
    puzzle: &dyn PuzzleOps,
    steps: usize,
    seed: Option<u64>,
) -> Result<(), BoardError> {
    let mut rng = rng_from(seed);
    let tiles = puzzle.scramble(steps, &mut rng);

    print!("{}", puzzle.render(&tiles)?);
    println!("Solvable: {}", puzzle.is_solvable(&tiles)?);

    Ok(())
}

/// Solves a caller-supplied board, consulting the oracle first so an
/// unsolvable 15-puzzle does not grind through its whole half-orbit.
fn run_solve(
    puzzle: &dyn PuzzleOps,
    heuristic: Heuristic,
    tiles: &[u8],
) -> Result<(), BoardError> {
    print!("{}", puzzle.render(tiles)?);

    if !puzzle.is_solvable(tiles)? {
        println!("Board is not solvable");
        return Ok(());
    }

    let started = Instant::now();
    let solution = puzzle.solve(tiles, heuristic)?;
    let elapsed = started.elapsed();

    println!(
        "Solved in {} moves with {:?}, expanding {} states in {} ms",
        solution.moves.len(),
        heuristic,
        solution.visited,
        elapsed.as_millis()
    );
    if !solution.moves.is_empty() {
        let sequence: Vec<String> = solution.moves.iter().map(u8::to_string).collect();
        println!("Tiles to slide: {}", sequence.join(" "));
    }

    Ok(())
}
