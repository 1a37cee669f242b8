//! Morris engine - Board Representation Module
//!
//! This module provides the core data structure for representing a Nine
//! Men's Morris position: a fixed 21-point board with the adjacency graph
//! and mill table as static data, mill detection, and the immutable
//! place/move/remove/flip transforms.

use crate::types::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Adjacency graph for the 21 board points (degree 3 or 4 per point).
/// Only slide moves consult this table; flying ignores it.
pub const NEIGHBOR_TABLE: [&[usize]; BOARD_POINTS] = [
    &[1, 2, 6],        // 0  a0
    &[0, 3, 11],       // 1  g0
    &[0, 3, 4, 7],     // 2  b1
    &[1, 2, 5, 10],    // 3  f1
    &[2, 5, 8],        // 4  c2
    &[3, 4, 9],        // 5  e2
    &[0, 7, 18],       // 6  a3
    &[2, 6, 8, 15],    // 7  b3
    &[4, 7, 12],       // 8  c3
    &[5, 10, 14],      // 9  e3
    &[3, 9, 11, 17],   // 10 f3
    &[1, 10, 20],      // 11 g3
    &[8, 13, 15],      // 12 c4
    &[12, 14, 16],     // 13 d4
    &[9, 13, 17],      // 14 e4
    &[7, 12, 16, 18],  // 15 b5
    &[13, 15, 17, 19], // 16 d5
    &[10, 14, 16, 20], // 17 f5
    &[6, 15, 19],      // 18 a6
    &[16, 18, 20],     // 19 d6
    &[11, 17, 19],     // 20 g6
];

/// The 16 straight-line triples on the board. Every mill check - detection,
/// counting, opportunity and blocking scans - goes through this one table.
pub const MILL_TABLE: [[usize; 3]; 16] = [
    // Horizontal lines
    [0, 2, 4],
    [1, 3, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    // Vertical lines
    [0, 6, 18],
    [1, 11, 20],
    [2, 7, 15],
    [3, 10, 17],
    [4, 8, 12],
    [5, 9, 14],
    [12, 15, 18],
    [13, 16, 19],
    [14, 17, 20],
];

/// Error raised when a board text string cannot be decoded
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("board position must be exactly 21 characters, got {0}")]
    BadLength(usize),
    #[error("invalid cell symbol '{symbol}' at point {point}")]
    BadSymbol { symbol: char, point: usize },
}

/// An immutable Nine Men's Morris position. Every transform returns a new
/// board; invalid transform requests return `None` instead of panicking.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; BOARD_POINTS],
}

impl Board {
    /// Create a board with all 21 points empty
    pub fn empty() -> Self {
        Board {
            cells: [EMPTY; BOARD_POINTS],
        }
    }

    /// Cell at the given point. Panics if the point is out of range.
    #[inline]
    pub fn get(&self, point: usize) -> u8 {
        self.cells[point]
    }

    /// Fixed ordered list of points adjacent to `point`
    pub fn neighbors(point: usize) -> &'static [usize] {
        NEIGHBOR_TABLE.get(point).copied().unwrap_or(&[])
    }

    /// Number of pieces of the given color on the board
    pub fn count(&self, color: u8) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// True iff the piece at `point` completes at least one mill triple.
    /// An empty or out-of-range point never closes a mill.
    pub fn closes_mill(&self, point: usize) -> bool {
        if point >= BOARD_POINTS {
            return false;
        }
        let piece = self.cells[point];
        if piece == EMPTY {
            return false;
        }
        MILL_TABLE
            .iter()
            .any(|mill| mill.contains(&point) && mill.iter().all(|&p| self.cells[p] == piece))
    }

    /// Place a piece of `color` on an empty point
    pub fn place(&self, point: usize, color: u8) -> Option<Board> {
        if point >= BOARD_POINTS || !is_piece(color) || self.cells[point] != EMPTY {
            return None;
        }
        let mut next = *self;
        next.cells[point] = color;
        Some(next)
    }

    /// Relocate the piece at `from` onto the empty point `to`. Adjacency is
    /// deliberately not checked here; slide legality belongs to the move
    /// generator.
    pub fn relocate(&self, from: usize, to: usize) -> Option<Board> {
        if from >= BOARD_POINTS
            || to >= BOARD_POINTS
            || self.cells[from] == EMPTY
            || self.cells[to] != EMPTY
        {
            return None;
        }
        let mut next = *self;
        next.cells[to] = next.cells[from];
        next.cells[from] = EMPTY;
        Some(next)
    }

    /// Clear an occupied point
    pub fn remove(&self, point: usize) -> Option<Board> {
        if point >= BOARD_POINTS || self.cells[point] == EMPTY {
            return None;
        }
        let mut next = *self;
        next.cells[point] = EMPTY;
        Some(next)
    }

    /// Board with white and black swapped everywhere, empty cells unchanged.
    /// Lets the white-side search machinery serve black by symmetry.
    pub fn flipped(&self) -> Board {
        let mut next = *self;
        for cell in next.cells.iter_mut() {
            *cell = opponent(*cell);
        }
        next
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_POINTS {
            return Err(ParseBoardError::BadLength(chars.len()));
        }
        let mut cells = [EMPTY; BOARD_POINTS];
        for (point, &symbol) in chars.iter().enumerate() {
            cells[point] =
                char_to_cell(symbol).ok_or(ParseBoardError::BadSymbol { symbol, point })?;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", cell_to_char(cell))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self)
    }
}
