//! Morris engine - Search Module
//!
//! This module implements the two depth-limited tree searches:
//! - plain minimax, which visits every node
//! - alpha-beta pruning, which must back up the same value and choose the
//!   same successor as minimax for every input
//!
//! Both keep the first best-valued successor encountered: a candidate
//! replaces the running best only on a strict improvement, so the move
//! generator's deterministic order is observable in the chosen move.

use crate::board::Board;
use crate::evaluation::Evaluator;
use crate::move_generator::MoveGenerator;
use log::debug;

/// Tree-search strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

/// Chosen successor board paired with its backed-up value. At a terminal
/// node the "successor" is the searched position itself, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Board>,
    pub value: i32,
}

/// Depth-limited game-tree search over one generator/evaluator pairing.
/// White is always the maximizing side; black searches go through
/// `Board::flipped` instead of a side parameter.
pub struct SearchEngine {
    generator: MoveGenerator,
    evaluator: Evaluator,
    algorithm: Algorithm,
    /// Leaf evaluations performed by the most recent `search` call
    pub positions_evaluated: u64,
}

impl SearchEngine {
    pub fn new(generator: MoveGenerator, evaluator: Evaluator, algorithm: Algorithm) -> Self {
        SearchEngine {
            generator,
            evaluator,
            algorithm,
            positions_evaluated: 0,
        }
    }

    /// Run a top-level search. Resets the leaf counter, then recurses to
    /// `depth` plies with the configured algorithm.
    pub fn search(&mut self, board: &Board, depth: u32, maximizing: bool) -> SearchResult {
        self.positions_evaluated = 0;
        let result = match self.algorithm {
            Algorithm::Minimax => self.minimax(board, depth, maximizing),
            Algorithm::AlphaBeta => self.alpha_beta(board, depth, i32::MIN, i32::MAX, maximizing),
        };
        debug!(
            "{:?} depth {} value {} after {} leaf evaluations",
            self.algorithm, depth, result.value, self.positions_evaluated
        );
        result
    }

    /// Terminal node: score the position itself
    fn evaluate_leaf(&mut self, board: &Board) -> SearchResult {
        let value = self.evaluator.evaluate(board, &mut self.positions_evaluated);
        SearchResult {
            best: Some(*board),
            value,
        }
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> SearchResult {
        if depth == 0 {
            return self.evaluate_leaf(board);
        }
        let successors = self.generator.generate(board, maximizing);
        if successors.is_empty() {
            // No legal move: a terminal position, scored where it stands
            return self.evaluate_leaf(board);
        }
        if maximizing {
            self.max_value(&successors, depth)
        } else {
            self.min_value(&successors, depth)
        }
    }

    fn max_value(&mut self, successors: &[Board], depth: u32) -> SearchResult {
        let mut best_value = i32::MIN;
        let mut best = None;
        for successor in successors {
            let result = self.minimax(successor, depth - 1, false);
            if result.value > best_value {
                best_value = result.value;
                best = Some(*successor);
            }
        }
        SearchResult {
            best,
            value: best_value,
        }
    }

    fn min_value(&mut self, successors: &[Board], depth: u32) -> SearchResult {
        let mut best_value = i32::MAX;
        let mut best = None;
        for successor in successors {
            let result = self.minimax(successor, depth - 1, true);
            if result.value < best_value {
                best_value = result.value;
                best = Some(*successor);
            }
        }
        SearchResult {
            best,
            value: best_value,
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        if depth == 0 {
            return self.evaluate_leaf(board);
        }
        let successors = self.generator.generate(board, maximizing);
        if successors.is_empty() {
            return self.evaluate_leaf(board);
        }
        if maximizing {
            self.max_value_ab(&successors, depth, alpha, beta)
        } else {
            self.min_value_ab(&successors, depth, alpha, beta)
        }
    }

    fn max_value_ab(
        &mut self,
        successors: &[Board],
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> SearchResult {
        let mut best_value = i32::MIN;
        let mut best = None;
        for successor in successors {
            let result = self.alpha_beta(successor, depth - 1, alpha, beta, false);
            if result.value > best_value {
                best_value = result.value;
                best = Some(*successor);
            }
            alpha = alpha.max(best_value);
            if best_value >= beta {
                break; // beta cutoff
            }
        }
        SearchResult {
            best,
            value: best_value,
        }
    }

    fn min_value_ab(
        &mut self,
        successors: &[Board],
        depth: u32,
        alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        let mut best_value = i32::MAX;
        let mut best = None;
        for successor in successors {
            let result = self.alpha_beta(successor, depth - 1, alpha, beta, true);
            if result.value < best_value {
                best_value = result.value;
                best = Some(*successor);
            }
            beta = beta.min(best_value);
            if best_value <= alpha {
                break; // alpha cutoff
            }
        }
        SearchResult {
            best,
            value: best_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::MIDGAME_WIN_SCORE;
    use crate::types::{BLACK, WHITE};

    fn board(s: &str) -> Board {
        s.parse().expect("test board must parse")
    }

    fn engine(algorithm: Algorithm) -> SearchEngine {
        SearchEngine::new(MoveGenerator::Placement, Evaluator::Opening, algorithm)
    }

    #[test]
    fn depth_zero_reports_the_position_itself() {
        let b = board("xxxxxxxWxxxxxxBxxxxxx");
        let mut e = engine(Algorithm::Minimax);
        let result = e.search(&b, 0, true);
        assert_eq!(result.best, Some(b));
        assert_eq!(result.value, 0);
        assert_eq!(e.positions_evaluated, 1);
    }

    #[test]
    fn root_without_moves_reports_the_position_itself() {
        // Blocked white side under the slide generator
        let b = board("WWWBBxWBxxxBxxxxxxBxx");
        let mut e = SearchEngine::new(
            MoveGenerator::SlideOrFly,
            Evaluator::MidgameEndgame,
            Algorithm::AlphaBeta,
        );
        let result = e.search(&b, 3, true);
        assert_eq!(result.best, Some(b));
        assert_eq!(result.value, -1_000); // 4 white vs 5 black
        assert_eq!(e.positions_evaluated, 1);
    }

    #[test]
    fn equal_valued_successors_keep_the_first_one() {
        // Every opening placement from the empty board scores +1, so the
        // first generated successor (a piece on point 0) must win the tie.
        let mut e = engine(Algorithm::Minimax);
        let result = e.search(&Board::empty(), 1, true);
        assert_eq!(result.best, Some(board("Wxxxxxxxxxxxxxxxxxxxx")));
        assert_eq!(result.value, 1);
        assert_eq!(e.positions_evaluated, 21);

        let mut e = engine(Algorithm::AlphaBeta);
        let result_ab = e.search(&Board::empty(), 1, true);
        assert_eq!(result_ab, result);
        assert_eq!(e.positions_evaluated, 21);
    }

    #[test]
    fn minimax_leaf_count_is_exhaustive() {
        // 21 first placements, then 20 replies each; no mills can form with
        // at most one piece per side.
        let mut e = engine(Algorithm::Minimax);
        e.search(&Board::empty(), 2, true);
        assert_eq!(e.positions_evaluated, 21 * 20);
    }

    #[test]
    fn alpha_beta_prunes_uniform_trees_hard() {
        // Values are uniform, so every min node after the first is cut off
        // after a single leaf: 20 + 20 leaves instead of 420.
        let mut e = engine(Algorithm::AlphaBeta);
        e.search(&Board::empty(), 2, true);
        assert_eq!(e.positions_evaluated, 20 + 20);
    }

    #[test]
    fn alpha_beta_matches_minimax_on_the_opening_scenario() {
        let b = board("xxxxxxxWxxxxxxBxxxxxx");

        let mut mm = engine(Algorithm::Minimax);
        let mm_result = mm.search(&b, 3, true);
        let mut ab = engine(Algorithm::AlphaBeta);
        let ab_result = ab.search(&b, 3, true);

        assert_eq!(ab_result.best, mm_result.best);
        assert_eq!(ab_result.value, mm_result.value);
        assert!(ab.positions_evaluated < mm.positions_evaluated);
    }

    #[test]
    fn alpha_beta_matches_minimax_in_the_midgame() {
        let b = board("WWWWxxxxxBBBxxxxxxxxx");
        for depth in 1..=3 {
            for maximizing in [true, false] {
                let mut mm = SearchEngine::new(
                    MoveGenerator::SlideOrFly,
                    Evaluator::MidgameEndgame,
                    Algorithm::Minimax,
                );
                let mut ab = SearchEngine::new(
                    MoveGenerator::SlideOrFly,
                    Evaluator::MidgameEndgame,
                    Algorithm::AlphaBeta,
                );
                let mm_result = mm.search(&b, depth, maximizing);
                let ab_result = ab.search(&b, depth, maximizing);
                assert_eq!(ab_result, mm_result, "depth {depth} max {maximizing}");
                assert!(ab.positions_evaluated <= mm.positions_evaluated);
            }
        }
    }

    #[test]
    fn counter_resets_between_searches() {
        let b = board("xxxxxxxWxxxxxxBxxxxxx");
        let mut e = engine(Algorithm::Minimax);
        e.search(&b, 2, true);
        let first = e.positions_evaluated;
        e.search(&b, 2, true);
        assert_eq!(e.positions_evaluated, first);
    }

    #[test]
    fn search_prefers_completing_a_mill() {
        // White on 0 and 2 can close the 0-2-4 mill and cut black down to
        // two pieces, which the midgame evaluator scores as a win; every
        // other placement leaves the material level.
        let b = board("WxWxxxBBxBxxxxxxxxxxx");
        let mut e = SearchEngine::new(
            MoveGenerator::Placement,
            Evaluator::MidgameEndgame,
            Algorithm::AlphaBeta,
        );
        let result = e.search(&b, 1, true);
        let chosen = result.best.expect("search must choose a move");
        assert_eq!(chosen.get(4), WHITE);
        assert_eq!(chosen.count(BLACK), 2);
        assert_eq!(result.value, MIDGAME_WIN_SCORE);
    }
}
