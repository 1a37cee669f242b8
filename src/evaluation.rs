//! Morris engine - Position Evaluation Module
//!
//! This module provides the three static evaluators of increasing
//! sophistication:
//! - opening: raw material difference
//! - midgame/endgame: material scaled by 1000 with win/loss detection
//! - improved: weighted sum of material, mills, mill opportunities,
//!   mobility, center control, blocking and flying eligibility
//!
//! Every evaluation counts one leaf into a caller-owned counter; the
//! counter is never global state.

use crate::board::{Board, MILL_TABLE};
use crate::move_generator::MoveGenerator;
use crate::types::*;

/// Win/loss score returned by the midgame/endgame evaluator
pub const MIDGAME_WIN_SCORE: i32 = 10_000;
/// Win/loss score returned by the improved evaluator
pub const IMPROVED_WIN_SCORE: i32 = 50_000;

// ============================================================================
// IMPROVED EVALUATOR WEIGHTS
// ============================================================================

const MATERIAL_WEIGHT: i32 = 1_000;
const MILL_WEIGHT: i32 = 1_200;
const OPPORTUNITY_WEIGHT: i32 = 300;
const MOBILITY_WEIGHT: i32 = 150;
const CENTER_WEIGHT: i32 = 200;
const BLOCKING_WEIGHT: i32 = 250;
const FLYING_BONUS: i32 = 500;

/// Strategic subset of points scored for center control (b3 c3 e3 f3 d4 d5)
const CENTER_POINTS: [usize; 6] = [7, 8, 9, 10, 13, 16];

/// Static scoring function applied at search leaves. Positive values favor
/// white, negative favor black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluator {
    /// Opening phase: `white count - black count`
    Opening,
    /// Midgame/endgame: +-10000 once a side is down to two pieces, else
    /// material difference scaled by 1000
    MidgameEndgame,
    /// Weighted positional evaluation, see module docs
    Improved,
}

impl Evaluator {
    /// Score the board from white's point of view, counting one leaf
    /// evaluation into `positions_evaluated`.
    pub fn evaluate(&self, board: &Board, positions_evaluated: &mut u64) -> i32 {
        *positions_evaluated += 1;
        match self {
            Evaluator::Opening => board.count(WHITE) as i32 - board.count(BLACK) as i32,
            Evaluator::MidgameEndgame => midgame_endgame(board),
            Evaluator::Improved => improved(board),
        }
    }
}

fn midgame_endgame(board: &Board) -> i32 {
    let white_pieces = board.count(WHITE) as i32;
    let black_pieces = board.count(BLACK) as i32;

    // Win checks first; black before white
    if black_pieces <= 2 {
        return MIDGAME_WIN_SCORE;
    }
    if white_pieces <= 2 {
        return -MIDGAME_WIN_SCORE;
    }

    MATERIAL_WEIGHT * (white_pieces - black_pieces)
}

fn improved(board: &Board) -> i32 {
    let white_pieces = board.count(WHITE) as i32;
    let black_pieces = board.count(BLACK) as i32;

    if black_pieces <= 2 {
        return IMPROVED_WIN_SCORE;
    }
    if white_pieces <= 2 {
        return -IMPROVED_WIN_SCORE;
    }

    // A side with no moves loses. Black's move list is generated and checked
    // before white's, so a doubly-stuck position scores as a white win.
    let black_moves = MoveGenerator::SlideOrFly.generate(board, false);
    if black_moves.is_empty() {
        return IMPROVED_WIN_SCORE;
    }
    let white_moves = MoveGenerator::SlideOrFly.generate(board, true);
    if white_moves.is_empty() {
        return -IMPROVED_WIN_SCORE;
    }

    let mut evaluation = (white_pieces - black_pieces) * MATERIAL_WEIGHT;
    evaluation += (count_mills(board, WHITE) - count_mills(board, BLACK)) * MILL_WEIGHT;
    evaluation += (count_mill_opportunities(board, WHITE) - count_mill_opportunities(board, BLACK))
        * OPPORTUNITY_WEIGHT;
    evaluation += (white_moves.len() as i32 - black_moves.len() as i32) * MOBILITY_WEIGHT;
    evaluation += (count_center_control(board, WHITE) - count_center_control(board, BLACK))
        * CENTER_WEIGHT;
    evaluation += (count_blocking(board, WHITE) - count_blocking(board, BLACK)) * BLOCKING_WEIGHT;

    // Flying eligibility asymmetry
    if white_pieces == 3 && black_pieces > 3 {
        evaluation += FLYING_BONUS;
    }
    if black_pieces == 3 && white_pieces > 3 {
        evaluation -= FLYING_BONUS;
    }

    evaluation
}

/// Completed mills held by `color`
fn count_mills(board: &Board, color: u8) -> i32 {
    MILL_TABLE
        .iter()
        .filter(|mill| mill.iter().all(|&p| board.get(p) == color))
        .count() as i32
}

/// Mill lines one placement away: two own pieces plus one empty cell
fn count_mill_opportunities(board: &Board, color: u8) -> i32 {
    MILL_TABLE
        .iter()
        .filter(|mill| {
            let own = mill.iter().filter(|&&p| board.get(p) == color).count();
            let empty = mill.iter().filter(|&&p| board.get(p) == EMPTY).count();
            own == 2 && empty == 1
        })
        .count() as i32
}

/// Pieces of `color` on the strategic center points
fn count_center_control(board: &Board, color: u8) -> i32 {
    CENTER_POINTS
        .iter()
        .filter(|&&p| board.get(p) == color)
        .count() as i32
}

/// Mill lines where `color` blocks the opponent: two opponent pieces plus
/// one own piece
fn count_blocking(board: &Board, color: u8) -> i32 {
    let enemy = opponent(color);
    MILL_TABLE
        .iter()
        .filter(|mill| {
            let own = mill.iter().filter(|&&p| board.get(p) == color).count();
            let theirs = mill.iter().filter(|&&p| board.get(p) == enemy).count();
            own == 1 && theirs == 2
        })
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("test board must parse")
    }

    fn eval(evaluator: Evaluator, s: &str) -> i32 {
        let mut leaves = 0;
        let value = evaluator.evaluate(&board(s), &mut leaves);
        assert_eq!(leaves, 1);
        value
    }

    #[test]
    fn opening_scores_material_difference() {
        assert_eq!(eval(Evaluator::Opening, "xxxxxxxWxxxxxxBxxxxxx"), 0);
        assert_eq!(eval(Evaluator::Opening, "WxxxxxxWxxxxxxBxxxxxx"), 1);
        assert_eq!(eval(Evaluator::Opening, "xxxxxxxxxxxxxxBxxxxxB"), -2);
    }

    #[test]
    fn midgame_scores_scaled_material() {
        assert_eq!(eval(Evaluator::MidgameEndgame, "WWWWxxxxxBBBBxxxxxxxx"), 0);
        assert_eq!(
            eval(Evaluator::MidgameEndgame, "WWWWWxxxxBBBBxxxxxxxx"),
            1_000
        );
        assert_eq!(
            eval(Evaluator::MidgameEndgame, "WWWxxxxxxBBBBxxxxxxxx"),
            -1_000
        );
    }

    #[test]
    fn midgame_detects_wins() {
        assert_eq!(
            eval(Evaluator::MidgameEndgame, "WWWWxxxxxBBxxxxxxxxxx"),
            MIDGAME_WIN_SCORE
        );
        assert_eq!(
            eval(Evaluator::MidgameEndgame, "WWxxxxxxxBBBBxxxxxxxx"),
            -MIDGAME_WIN_SCORE
        );
        // black is checked first when both sides are down to two
        assert_eq!(
            eval(Evaluator::MidgameEndgame, "WBxxxxxxxxxxxxxxxxxxx"),
            MIDGAME_WIN_SCORE
        );
    }

    #[test]
    fn improved_detects_material_wins() {
        assert_eq!(
            eval(Evaluator::Improved, "WWWWxxxxxBBxxxxxxxxxx"),
            IMPROVED_WIN_SCORE
        );
        assert_eq!(
            eval(Evaluator::Improved, "WWxxxxxxxBBBBxxxxxxxx"),
            -IMPROVED_WIN_SCORE
        );
    }

    #[test]
    fn improved_detects_immobilized_sides() {
        // White pieces on 0,1,2,6 are fully blocked; black can still move.
        let blocked = "WWWBBxWBxxxBxxxxxxBxx";
        assert_eq!(eval(Evaluator::Improved, blocked), -IMPROVED_WIN_SCORE);
    }

    #[test]
    fn improved_weighs_position_features() {
        // Mirror setup: a white mill on 0-2-4 against a black mill on
        // 6-7-8. Material, mills, opportunities, mobility and blocking all
        // cancel; black holds two center points (7, 8), so the score is
        // -2 * CENTER_WEIGHT.
        assert_eq!(eval(Evaluator::Improved, "WxWxWxBBBxxxxxxxxxxxx"), -400);
    }

    #[test]
    fn mill_counting_uses_the_full_table() {
        // 12-15-18 and 14-17-20 are the two lines the original helper
        // missed; both must be counted.
        let mut b = Board::empty();
        for p in [12, 15, 18, 14, 17, 20] {
            b = b.place(p, WHITE).unwrap();
        }
        assert_eq!(count_mills(&b, WHITE), 2);
        assert_eq!(count_mills(&b, BLACK), 0);
    }

    #[test]
    fn opportunity_and_blocking_counters() {
        // White on 0 and 2 with 4 empty: one opportunity.
        let b = board("WxWxxxxxxxxxxxxxxxxxx");
        assert_eq!(count_mill_opportunities(&b, WHITE), 1);
        assert_eq!(count_mill_opportunities(&b, BLACK), 0);
        // Black takes point 4: white opportunity gone, black blocks the line.
        let b = board("WxWxBxxxxxxxxxxxxxxxx");
        assert_eq!(count_mill_opportunities(&b, WHITE), 0);
        assert_eq!(count_blocking(&b, BLACK), 1);
        assert_eq!(count_blocking(&b, WHITE), 0);
    }

    #[test]
    fn center_control_counts_the_fixed_subset() {
        let b = board("xxxxxxxWWxxxxBxxBxxxx");
        assert_eq!(count_center_control(&b, WHITE), 2); // 7, 8
        assert_eq!(count_center_control(&b, BLACK), 2); // 13, 16
    }

    #[test]
    fn every_evaluator_counts_one_leaf_per_call() {
        let b = board("WWWWxxxxxBBBBxxxxxxxx");
        let mut leaves = 0;
        for evaluator in [
            Evaluator::Opening,
            Evaluator::MidgameEndgame,
            Evaluator::Improved,
        ] {
            evaluator.evaluate(&b, &mut leaves);
        }
        assert_eq!(leaves, 3);
    }
}
