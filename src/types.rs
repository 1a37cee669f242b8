//! Morris engine - Type definitions and constants
//!
//! This module provides the core type definitions and constants for
//! representing board cells, colors, and basic conversions.

/// Number of points on the board
pub const BOARD_POINTS: usize = 21;

/// Cell constants
pub const EMPTY: u8 = 0;
pub const WHITE: u8 = 1;
pub const BLACK: u8 = 2;

/// Text encoding of the three cell states
pub const EMPTY_CHAR: char = 'x';
pub const WHITE_CHAR: char = 'W';
pub const BLACK_CHAR: char = 'B';

/// Human-readable names for the 21 board points, in index order
pub const POINT_NAMES: [&str; BOARD_POINTS] = [
    "a0", "g0", "b1", "f1", "c2", "e2", "a3", "b3", "c3", "e3", "f3",
    "g3", "c4", "d4", "e4", "b5", "d5", "f5", "a6", "d6", "g6",
];

/// Check if a cell holds a piece
#[inline]
pub fn is_piece(cell: u8) -> bool {
    cell == WHITE || cell == BLACK
}

/// Opposing color for a piece cell
#[inline]
pub fn opponent(color: u8) -> u8 {
    match color {
        WHITE => BLACK,
        BLACK => WHITE,
        other => other,
    }
}

/// Cell value to board text character
pub fn cell_to_char(cell: u8) -> char {
    match cell {
        WHITE => WHITE_CHAR,
        BLACK => BLACK_CHAR,
        _ => EMPTY_CHAR,
    }
}

/// Board text character to cell value
pub fn char_to_cell(c: char) -> Option<u8> {
    match c {
        EMPTY_CHAR => Some(EMPTY),
        WHITE_CHAR => Some(WHITE),
        BLACK_CHAR => Some(BLACK),
        _ => None,
    }
}

/// Name of a board point for diagnostics
pub fn point_name(point: usize) -> &'static str {
    POINT_NAMES.get(point).copied().unwrap_or("??")
}
