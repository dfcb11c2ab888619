//! Board representation and operations for sliding-tile puzzles.
//!
//! Generic over board side length (`N`) and total cell count (`AREA = N^2`).
//! The board is stored as a flat array where each cell contains a tile label
//! (1-based) or 0 for the blank.

use std::fmt;

/// Possible slide directions, expressed as movements of the blank cell.
///
/// Sliding the blank in one direction moves the neighboring tile the
/// opposite way; the tile label is what callers report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (row, col) delta applied to the blank cell.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Rejected input at the board validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The flat tile list does not contain exactly `N * N` entries.
    WrongLength { expected: usize, found: usize },
    /// The tiles are not a permutation of `0..N*N`.
    NotAPermutation,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::WrongLength { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
            BoardError::NotAPermutation => {
                write!(f, "tiles must contain every label exactly once")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A board configuration: tile labels plus the tracked blank cell.
///
/// Uses a fixed-size array so boards are `Copy` and never touch the heap
/// in the solver's hot loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize, const AREA: usize> {
    tiles: [u8; AREA],
    blank: usize,
}

impl<const N: usize, const AREA: usize> Board<N, AREA> {
    /// Validates a flat tile list into a board.
    ///
    /// The list must hold exactly `AREA` entries forming a permutation of
    /// `0..AREA`, with 0 standing for the blank.
    pub fn from_tiles(flat: &[u8]) -> Result<Self, BoardError> {
        if flat.len() != AREA {
            return Err(BoardError::WrongLength {
                expected: AREA,
                found: flat.len(),
            });
        }

        let mut seen = [false; AREA];
        for &tile in flat {
            let label = tile as usize;
            if label >= AREA || seen[label] {
                return Err(BoardError::NotAPermutation);
            }
            seen[label] = true;
        }

        let mut tiles = [0u8; AREA];
        tiles.copy_from_slice(flat);
        // the permutation check above guarantees exactly one 0
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(AREA - 1);

        Ok(Self { tiles, blank })
    }

    /// Assembles a board from parts already known to be consistent.
    pub(crate) const fn from_parts(tiles: [u8; AREA], blank: usize) -> Self {
        Self { tiles, blank }
    }

    /// The flat tile array, row-major.
    #[inline]
    pub fn tiles(&self) -> &[u8; AREA] {
        &self.tiles
    }

    /// The flat index of the blank cell.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// The (row, col) position of the blank cell.
    #[inline]
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / N, self.blank % N)
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// Returns the resulting board and the label of the tile that moved,
    /// or `None` when the target cell is out of bounds. The receiver is
    /// left untouched.
    pub fn slide(&self, direction: Direction) -> Option<(Self, u8)> {
        let (row, col) = (self.blank / N, self.blank % N);
        let (delta_row, delta_col) = direction.offset();

        let target_row = row as isize + delta_row;
        let target_col = col as isize + delta_col;
        if target_row < 0
            || target_row >= N as isize
            || target_col < 0
            || target_col >= N as isize
        {
            return None;
        }

        let target = target_row as usize * N + target_col as usize;
        let mut tiles = self.tiles;
        let moved = tiles[target];
        tiles[self.blank] = moved;
        tiles[target] = 0;

        Some((
            Self {
                tiles,
                blank: target,
            },
            moved,
        ))
    }

    /// Decides whether this board can reach the goal ordering at all.
    ///
    /// Counts inversions among non-blank tiles in row-major order. For odd
    /// `N` the board is solvable iff the count is even; for even `N` it is
    /// solvable iff the count plus the blank's 1-indexed row from the
    /// bottom is odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();

        if N % 2 == 1 {
            inversions % 2 == 0
        } else {
            // 1-indexed row counted from the bottom edge
            let blank_row_from_bottom = N - self.blank / N;
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// Counts tile pairs whose relative order is reversed from goal order.
    fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < tile)
                    .count()
            })
            .sum()
    }
}

/// Puzzle definition with compile-time parameters.
///
/// - `N`: board side length (3 for the 8-puzzle, 4 for the 15-puzzle)
/// - `AREA`: total cells on the board (must equal `N^2`)
///
/// Owns the goal table, built once here and passed by reference into every
/// operation that needs it.
#[derive(Debug, Clone, Copy)]
pub struct Puzzle<const N: usize, const AREA: usize> {
    goal: [u8; AREA],
}

impl<const N: usize, const AREA: usize> Puzzle<N, AREA> {
    /// Creates a puzzle definition with compile-time validation.
    pub const fn new() -> Self {
        assert!(N >= 2, "the board needs at least one legal slide");
        assert!(N * N == AREA, "AREA must equal N^2");
        assert!(AREA <= 256, "AREA must be <= 256 (u8 tile labels)");

        // goal ordering: 1, 2, .., AREA-1 with the blank bottom-right
        let mut goal = [0u8; AREA];
        let mut i = 0;
        while i < AREA - 1 {
            goal[i] = (i + 1) as u8;
            i += 1;
        }

        Self { goal }
    }

    /// The goal tile table, row-major.
    #[inline]
    pub fn goal_tiles(&self) -> &[u8; AREA] {
        &self.goal
    }

    /// The solved board, with the blank at the bottom-right corner.
    pub fn goal_board(&self) -> Board<N, AREA> {
        Board::from_parts(self.goal, AREA - 1)
    }

    /// Whether `board` matches the goal ordering.
    #[inline]
    pub fn is_goal(&self, board: &Board<N, AREA>) -> bool {
        *board.tiles() == self.goal
    }
}

impl<const N: usize, const AREA: usize> Default for Puzzle<N, AREA> {
    fn default() -> Self {
        Self::new()
    }
}

/// The classic 3x3 8-puzzle.
pub const EIGHT_PUZZLE: Puzzle<3, 9> = Puzzle::new();

/// The classic 4x4 15-puzzle.
pub const FIFTEEN_PUZZLE: Puzzle<4, 16> = Puzzle::new();

/// Formats a board as a human-readable string.
///
/// Labels are right-justified to the width of the largest label and
/// separated by single spaces; the blank cell renders as spaces.
pub fn format_board<const N: usize, const AREA: usize>(board: &Board<N, AREA>) -> String {
    let width = (AREA - 1).to_string().len();
    let mut output = String::new();

    for row in 0..N {
        for col in 0..N {
            if col > 0 {
                output.push(' ');
            }
            let tile = board.tiles()[row * N + col];
            if tile == 0 {
                for _ in 0..width {
                    output.push(' ');
                }
            } else {
                output.push_str(&format!("{tile:>width$}"));
            }
        }
        output.push('\n');
    }

    output
}
