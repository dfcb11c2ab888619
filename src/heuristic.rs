//! Admissible distance estimates for the A* search.
//!
//! Both heuristics never overestimate the true remaining slide count, and
//! both are consistent on this move graph, which is what lets the solver
//! skip reopening closed states.

use crate::board::{Board, Puzzle};

/// Selector for the heuristic driving a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of non-blank tiles that sit on the wrong cell.
    Mismatch,
    /// Sum of per-tile taxicab distances to the tile's goal cell.
    ///
    /// Dominates `Mismatch`: for the same board it estimates at least as
    /// much, so the search expands no more states.
    Taxicab,
}

impl Heuristic {
    /// Estimates the remaining slide count from `board` to the goal.
    pub fn evaluate<const N: usize, const AREA: usize>(
        self,
        puzzle: &Puzzle<N, AREA>,
        board: &Board<N, AREA>,
    ) -> u32 {
        match self {
            Heuristic::Mismatch => mismatch_count(puzzle, board),
            Heuristic::Taxicab => taxicab_sum::<N, AREA>(board),
        }
    }
}

/// Counts non-blank cells whose label differs from the goal table.
fn mismatch_count<const N: usize, const AREA: usize>(
    puzzle: &Puzzle<N, AREA>,
    board: &Board<N, AREA>,
) -> u32 {
    board
        .tiles()
        .iter()
        .zip(puzzle.goal_tiles())
        .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
        .count() as u32
}

/// Sums |row - goalRow| + |col - goalCol| over all non-blank tiles.
///
/// The goal cell of label `v` is computed arithmetically: row `(v-1) / N`,
/// col `(v-1) % N`.
fn taxicab_sum<const N: usize, const AREA: usize>(board: &Board<N, AREA>) -> u32 {
    let mut distance = 0u32;

    for (index, &tile) in board.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let (row, col) = (index / N, index % N);
        let goal_index = tile as usize - 1;
        let (goal_row, goal_col) = (goal_index / N, goal_index % N);

        distance += row.abs_diff(goal_row) as u32;
        distance += col.abs_diff(goal_col) as u32;
    }

    distance
}
