//! Sliding-Tile Puzzle Solver Library
//!
//! Provides optimal solving for N x N sliding-tile puzzles (8-puzzle,
//! 15-puzzle) via A* search under interchangeable admissible heuristics,
//! plus a solvability oracle and a random-walk scrambler.

pub mod board;
pub mod heuristic;
pub mod scramble;
pub mod solver;

use rand::RngCore;

use board::{Board, BoardError, Puzzle};
use heuristic::Heuristic;
use solver::Solution;

/// Trait that erases the compile-time board parameters for dynamic dispatch.
///
/// The const generics (`N`, `AREA`) are hidden behind the vtable, so callers
/// can pick the puzzle size at runtime and pass boards as flat tile slices.
/// Slices are validated at this boundary; the typed core below it assumes
/// well-formed boards.
pub trait PuzzleOps {
    /// Board side length.
    fn size(&self) -> usize;
    /// The goal ordering as a flat tile list.
    fn goal_tiles(&self) -> Vec<u8>;
    /// A scrambled, guaranteed-solvable board as a flat tile list.
    fn scramble(&self, steps: usize, rng: &mut dyn RngCore) -> Vec<u8>;
    /// Whether the board can reach the goal ordering.
    fn is_solvable(&self, tiles: &[u8]) -> Result<bool, BoardError>;
    /// Optimal move list and visited-state count for the board.
    fn solve(&self, tiles: &[u8], heuristic: Heuristic) -> Result<Solution, BoardError>;
    /// Human-readable rendering of the board.
    fn render(&self, tiles: &[u8]) -> Result<String, BoardError>;
}

impl<const N: usize, const AREA: usize> PuzzleOps for Puzzle<N, AREA> {
    fn size(&self) -> usize {
        N
    }

    fn goal_tiles(&self) -> Vec<u8> {
        Puzzle::goal_tiles(self).to_vec()
    }

    fn scramble(&self, steps: usize, rng: &mut dyn RngCore) -> Vec<u8> {
        scramble::scramble(self, steps, rng).tiles().to_vec()
    }

    fn is_solvable(&self, tiles: &[u8]) -> Result<bool, BoardError> {
        let board = Board::<N, AREA>::from_tiles(tiles)?;
        Ok(board.is_solvable())
    }

    fn solve(&self, tiles: &[u8], heuristic: Heuristic) -> Result<Solution, BoardError> {
        let board = Board::<N, AREA>::from_tiles(tiles)?;
        Ok(solver::solve(self, &board, heuristic))
    }

    fn render(&self, tiles: &[u8]) -> Result<String, BoardError> {
        let board = Board::<N, AREA>::from_tiles(tiles)?;
        Ok(board::format_board(&board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::{EIGHT_PUZZLE, FIFTEEN_PUZZLE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_erased_puzzles_report_their_size() {
        let puzzles: [Box<dyn PuzzleOps>; 2] =
            [Box::new(EIGHT_PUZZLE), Box::new(FIFTEEN_PUZZLE)];
        assert_eq!(puzzles[0].size(), 3);
        assert_eq!(puzzles[1].size(), 4);
        assert_eq!(puzzles[0].goal_tiles(), vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);
    }

    #[test]
    fn test_erased_scramble_and_solve_roundtrip() {
        let puzzle: Box<dyn PuzzleOps> = Box::new(EIGHT_PUZZLE);
        let mut rng = StdRng::seed_from_u64(11);

        let tiles = puzzle.scramble(30, &mut rng);
        assert!(puzzle.is_solvable(&tiles).unwrap());

        let solution = puzzle.solve(&tiles, Heuristic::Taxicab).unwrap();
        assert!(solution.moves.len() <= 30);
    }

    #[test]
    fn test_erased_boundary_rejects_malformed_tiles() {
        let puzzle: Box<dyn PuzzleOps> = Box::new(EIGHT_PUZZLE);

        assert_eq!(
            puzzle.is_solvable(&[1, 2, 3]),
            Err(BoardError::WrongLength {
                expected: 9,
                found: 3
            })
        );
        assert!(puzzle
            .solve(&[9, 2, 3, 4, 5, 6, 7, 8, 0], Heuristic::Mismatch)
            .is_err());
    }
}
