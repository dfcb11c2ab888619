//! A* search over board configurations.
//!
//! Bookkeeping layout:
//! - Best-known table: `FxHashMap` from board content to its search node;
//!   sole owner of every node created during one search, dropped wholesale
//!   when the search returns.
//! - Frontier: `BinaryHeap` of lightweight entries addressing table nodes by
//!   board content. Stale entries are skipped after popping (lazy deletion
//!   instead of decrease-key).
//! - Closed set: `FxHashSet` of expanded boards, never re-expanded. Both
//!   supplied heuristics are consistent on this move graph, so skipping
//!   reopening keeps solutions optimal.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::{Board, Direction, Puzzle};
use crate::heuristic::Heuristic;

/// Outcome of one search: the optimal move list and the instrumentation
/// counter.
///
/// `moves` holds the labels of the slid tiles in start-to-goal order and is
/// empty when the board cannot reach the goal. `visited` counts expanded
/// states, which is what the heuristics are compared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<u8>,
    pub visited: usize,
}

/// Per-board search bookkeeping, owned by the best-known table.
///
/// The parent link is the parent's board content, not a pointer; the table
/// is the only owner of nodes.
#[derive(Clone, Copy)]
struct Node<const AREA: usize> {
    g: u32,
    h: u32,
    parent: Option<[u8; AREA]>,
    moved: u8,
    blank: u8,
}

/// Frontier entry addressing a table node by board content.
///
/// Ordered for a min-heap on f, breaking ties by lower h and then by
/// insertion order so search output is deterministic.
#[derive(Clone, Copy, PartialEq, Eq)]
struct FrontierEntry<const AREA: usize> {
    f: u32,
    h: u32,
    seq: u64,
    tiles: [u8; AREA],
}

impl<const AREA: usize> Ord for FrontierEntry<AREA> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the std max-heap pops the smallest f first
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<const AREA: usize> PartialOrd for FrontierEntry<AREA> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-length slide sequence from `start` to the goal.
///
/// Returns an empty move list when the frontier exhausts without reaching
/// the goal, which is how unsolvable boards terminate. The caller is
/// responsible for submitting a well-formed board.
pub fn solve<const N: usize, const AREA: usize>(
    puzzle: &Puzzle<N, AREA>,
    start: &Board<N, AREA>,
    heuristic: Heuristic,
) -> Solution {
    let mut best: FxHashMap<[u8; AREA], Node<AREA>> = FxHashMap::default();
    let mut closed: FxHashSet<[u8; AREA]> = FxHashSet::default();
    let mut frontier: BinaryHeap<FrontierEntry<AREA>> = BinaryHeap::new();
    let mut seq = 0u64;
    let mut visited = 0usize;

    let start_h = heuristic.evaluate(puzzle, start);
    best.insert(
        *start.tiles(),
        Node {
            g: 0,
            h: start_h,
            parent: None,
            moved: 0,
            blank: start.blank_index() as u8,
        },
    );
    frontier.push(FrontierEntry {
        f: start_h,
        h: start_h,
        seq,
        tiles: *start.tiles(),
    });

    while let Some(entry) = frontier.pop() {
        if closed.contains(&entry.tiles) {
            // stale copy superseded by a cheaper path
            continue;
        }

        if entry.tiles == *puzzle.goal_tiles() {
            let moves = reconstruct_path(&best, entry.tiles);
            return Solution { moves, visited };
        }

        visited += 1;
        closed.insert(entry.tiles);

        let node = best[&entry.tiles];
        let board = Board::<N, AREA>::from_parts(entry.tiles, node.blank as usize);
        let successor_g = node.g + 1;

        for direction in Direction::ALL {
            let Some((successor, moved)) = board.slide(direction) else {
                continue;
            };
            if closed.contains(successor.tiles()) {
                continue;
            }

            match best.entry(*successor.tiles()) {
                Entry::Occupied(mut occupied) => {
                    let known = occupied.get_mut();
                    // same board content, so h carries over unchanged
                    if successor_g < known.g {
                        known.g = successor_g;
                        known.parent = Some(entry.tiles);
                        known.moved = moved;
                        seq += 1;
                        frontier.push(FrontierEntry {
                            f: successor_g + known.h,
                            h: known.h,
                            seq,
                            tiles: *successor.tiles(),
                        });
                    }
                }
                Entry::Vacant(vacant) => {
                    let h = heuristic.evaluate(puzzle, &successor);
                    vacant.insert(Node {
                        g: successor_g,
                        h,
                        parent: Some(entry.tiles),
                        moved,
                        blank: successor.blank_index() as u8,
                    });
                    seq += 1;
                    frontier.push(FrontierEntry {
                        f: successor_g + h,
                        h,
                        seq,
                        tiles: *successor.tiles(),
                    });
                }
            }
        }
    }

    // frontier exhausted without reaching the goal
    Solution {
        moves: Vec::new(),
        visited,
    }
}

/// Walks parent links from the goal back to the parentless start and
/// returns the moved-tile labels in start-to-goal order.
fn reconstruct_path<const AREA: usize>(
    best: &FxHashMap<[u8; AREA], Node<AREA>>,
    goal: [u8; AREA],
) -> Vec<u8> {
    let mut moves = Vec::new();
    let mut key = goal;

    while let Some(parent) = best[&key].parent {
        moves.push(best[&key].moved);
        key = parent;
    }

    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{EIGHT_PUZZLE, FIFTEEN_PUZZLE};
    use crate::scramble::scramble;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Brute-force shortest distance to the goal, for cross-checking.
    fn bfs_distance(start: &Board<3, 9>) -> Option<usize> {
        let mut seen: FxHashSet<[u8; 9]> = FxHashSet::default();
        let mut queue = VecDeque::new();

        seen.insert(*start.tiles());
        queue.push_back((*start, 0usize));

        while let Some((board, depth)) = queue.pop_front() {
            if EIGHT_PUZZLE.is_goal(&board) {
                return Some(depth);
            }
            for direction in Direction::ALL {
                if let Some((next, _)) = board.slide(direction) {
                    if seen.insert(*next.tiles()) {
                        queue.push_back((next, depth + 1));
                    }
                }
            }
        }

        None
    }

    /// Applies a solution's moved-tile labels to `start`, one slide each.
    fn replay(start: &Board<3, 9>, moves: &[u8]) -> Board<3, 9> {
        let mut board = *start;
        for &label in moves {
            let step = Direction::ALL.iter().find_map(|&direction| {
                board
                    .slide(direction)
                    .filter(|&(_, moved)| moved == label)
                    .map(|(next, _)| next)
            });
            board = step.expect("each listed tile must be adjacent to the blank");
        }
        board
    }

    #[test]
    fn test_already_solved_board_needs_no_moves() {
        let goal = EIGHT_PUZZLE.goal_board();
        let solution = solve(&EIGHT_PUZZLE, &goal, Heuristic::Taxicab);
        assert!(solution.moves.is_empty());
        assert_eq!(solution.visited, 0);
    }

    #[test]
    fn test_one_move_from_goal() {
        let board = Board::<3, 9>::from_tiles(&[1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();

        for heuristic in [Heuristic::Mismatch, Heuristic::Taxicab] {
            let solution = solve(&EIGHT_PUZZLE, &board, heuristic);
            assert_eq!(solution.moves, vec![6], "{heuristic:?}");
            assert_eq!(solution.visited, 1, "{heuristic:?}");
        }
    }

    #[test]
    fn test_two_moves_from_goal() {
        let board = Board::<3, 9>::from_tiles(&[1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();

        for heuristic in [Heuristic::Mismatch, Heuristic::Taxicab] {
            let solution = solve(&EIGHT_PUZZLE, &board, heuristic);
            assert_eq!(solution.moves.len(), 2, "{heuristic:?}");
            let finished = replay(&board, &solution.moves);
            assert!(EIGHT_PUZZLE.is_goal(&finished));
        }
    }

    #[test]
    fn test_solutions_match_bfs_distance() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = scramble(&EIGHT_PUZZLE, 14, &mut rng);
            let expected = bfs_distance(&board).expect("scrambles are solvable");

            for heuristic in [Heuristic::Mismatch, Heuristic::Taxicab] {
                let solution = solve(&EIGHT_PUZZLE, &board, heuristic);
                assert_eq!(
                    solution.moves.len(),
                    expected,
                    "seed {seed} under {heuristic:?}"
                );
            }
        }
    }

    #[test]
    fn test_solution_replays_to_goal() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = scramble(&EIGHT_PUZZLE, 25, &mut rng);
            let solution = solve(&EIGHT_PUZZLE, &board, Heuristic::Taxicab);

            let finished = replay(&board, &solution.moves);
            assert!(EIGHT_PUZZLE.is_goal(&finished), "seed {seed}");
        }
    }

    #[test]
    fn test_taxicab_expands_no_more_than_mismatch() {
        for seed in 0..6 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = scramble(&EIGHT_PUZZLE, 30, &mut rng);

            let mismatch = solve(&EIGHT_PUZZLE, &board, Heuristic::Mismatch);
            let taxicab = solve(&EIGHT_PUZZLE, &board, Heuristic::Taxicab);

            assert_eq!(mismatch.moves.len(), taxicab.moves.len(), "seed {seed}");
            assert!(
                taxicab.visited <= mismatch.visited,
                "seed {seed}: taxicab expanded {} states, mismatch {}",
                taxicab.visited,
                mismatch.visited
            );
        }
    }

    #[test]
    fn test_unsolvable_three_by_three_exhausts_frontier() {
        let board = Board::<3, 9>::from_tiles(&[2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!board.is_solvable());

        let solution = solve(&EIGHT_PUZZLE, &board, Heuristic::Taxicab);
        assert!(solution.moves.is_empty());
        // half of 9! permutations are reachable from any start
        assert_eq!(solution.visited, 181_440);
    }

    #[test]
    fn test_unsolvable_even_board_exhausts_frontier() {
        // 2x2 goal with the two top tiles exchanged; the full reachable
        // component is only 4!/2 = 12 states, so exhaustion is cheap
        let puzzle: Puzzle<2, 4> = Puzzle::new();
        let board = Board::<2, 4>::from_tiles(&[2, 1, 3, 0]).unwrap();
        assert!(!board.is_solvable());

        let solution = solve(&puzzle, &board, Heuristic::Taxicab);
        assert!(solution.moves.is_empty());
        assert_eq!(solution.visited, 12);
    }

    #[test]
    fn test_solvable_fifteen_puzzle_scramble() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = scramble(&FIFTEEN_PUZZLE, 20, &mut rng);

        let solution = solve(&FIFTEEN_PUZZLE, &board, Heuristic::Taxicab);
        assert!(solution.moves.len() <= 20, "walk length bounds the optimum");
        assert!(!solution.moves.is_empty() || FIFTEEN_PUZZLE.is_goal(&board));
    }
}
