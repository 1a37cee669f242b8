//! Morris engine - Move Generator Module
//!
//! This module expands a position into the set of legal successor boards
//! for one side, including the mill-capture branching step. Two generators
//! exist, one per game phase: piece placement for the opening, and sliding
//! along adjacency edges (or flying with exactly three pieces) afterwards.

use crate::board::Board;
use crate::types::*;
use log::trace;

/// A side with exactly this many pieces may fly to any empty point
pub const FLYING_PIECE_COUNT: usize = 3;

/// Phase-specific successor generator. The capability set is fixed, so the
/// hierarchy is a closed enum rather than a trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveGenerator {
    /// Opening phase: pieces are placed on empty points, never moved
    Placement,
    /// Midgame/endgame: pieces slide to adjacent empty points, or fly
    /// anywhere once the side is down to three pieces
    SlideOrFly,
}

impl MoveGenerator {
    /// Generate every legal successor board for the side to move, in
    /// deterministic order: ascending source point, then ascending
    /// destination, then ascending removal point. An empty result means the
    /// side has no legal move (a terminal position, not an error).
    pub fn generate(&self, board: &Board, white_to_move: bool) -> Vec<Board> {
        let color = if white_to_move { WHITE } else { BLACK };
        let successors = match self {
            MoveGenerator::Placement => Self::generate_placements(board, color),
            MoveGenerator::SlideOrFly => {
                if board.count(color) == FLYING_PIECE_COUNT {
                    Self::generate_flights(board, color)
                } else {
                    Self::generate_slides(board, color)
                }
            }
        };
        trace!(
            "{:?} generated {} successors for {}",
            self,
            successors.len(),
            if white_to_move { "white" } else { "black" }
        );
        successors
    }

    /// Place a piece on every empty point
    fn generate_placements(board: &Board, color: u8) -> Vec<Board> {
        let mut successors = Vec::new();
        for point in 0..BOARD_POINTS {
            if let Some(placed) = board.place(point, color) {
                Self::expand_capture(&placed, point, color, &mut successors);
            }
        }
        successors
    }

    /// Move each piece to an adjacent empty point
    fn generate_slides(board: &Board, color: u8) -> Vec<Board> {
        let mut successors = Vec::new();
        for from in 0..BOARD_POINTS {
            if board.get(from) != color {
                continue;
            }
            for &to in Board::neighbors(from) {
                if let Some(moved) = board.relocate(from, to) {
                    Self::expand_capture(&moved, to, color, &mut successors);
                }
            }
        }
        successors
    }

    /// Move each piece to any empty point, ignoring adjacency
    fn generate_flights(board: &Board, color: u8) -> Vec<Board> {
        let mut successors = Vec::new();
        for from in 0..BOARD_POINTS {
            if board.get(from) != color {
                continue;
            }
            for to in 0..BOARD_POINTS {
                if let Some(moved) = board.relocate(from, to) {
                    Self::expand_capture(&moved, to, color, &mut successors);
                }
            }
        }
        successors
    }

    /// Mill-capture branching: a move that closes a mill at `moved_to`
    /// yields one successor per eligible opponent piece removed. Opponent
    /// pieces inside a mill are not eligible; if every opponent piece is
    /// milled the move yields the post-move board with no removal. A move
    /// closing no mill yields the post-move board unchanged.
    fn expand_capture(board: &Board, moved_to: usize, color: u8, successors: &mut Vec<Board>) {
        if !board.closes_mill(moved_to) {
            successors.push(*board);
            return;
        }
        let enemy = opponent(color);
        let mut removed_any = false;
        for point in 0..BOARD_POINTS {
            if board.get(point) != enemy || board.closes_mill(point) {
                continue;
            }
            if let Some(after) = board.remove(point) {
                successors.push(after);
                removed_any = true;
            }
        }
        if !removed_any {
            successors.push(*board);
        }
    }
}
