//! Scrambled start boards derived from the goal by a random walk.
//!
//! Walking backwards from the goal keeps every intermediate board reachable,
//! so the solvability oracle never needs to be consulted here.

use rand::Rng;

use crate::board::{Board, Direction, Puzzle};

/// Default number of random slides applied to the goal board.
pub const DEFAULT_STEPS: usize = 50;

/// Produces a start board by applying exactly `steps` legal random slides
/// to the goal board.
///
/// At each step the walk rejects directions that run out of bounds and the
/// exact reverse of the immediately preceding slide; longer cycles are not
/// prevented. The result is solvable by construction.
pub fn scramble<const N: usize, const AREA: usize, R: Rng + ?Sized>(
    puzzle: &Puzzle<N, AREA>,
    steps: usize,
    rng: &mut R,
) -> Board<N, AREA> {
    let mut board = puzzle.goal_board();
    let mut previous: Option<Direction> = None;

    for _ in 0..steps {
        let mut candidates = [Direction::Up; 4];
        let mut count = 0;
        for direction in Direction::ALL {
            if previous == Some(direction.opposite()) {
                continue;
            }
            if board.slide(direction).is_some() {
                candidates[count] = direction;
                count += 1;
            }
        }
        // N >= 2 leaves at least one legal non-reversing direction
        let chosen = candidates[rng.gen_range(0..count)];

        if let Some((next, _)) = board.slide(chosen) {
            board = next;
        }
        previous = Some(chosen);
    }

    board
}
