//! # Evaluation Module
//!
//! Static evaluation of a `Board` from a fixed perspective side.
//!
//! ## Scoring Strategy
//! - **Material**: seeds banked in the perspective side's store minus the
//!   opponent's. This is the only term that survives the end-of-game sweep.
//! - **Weighted**: material, plus a bonus per extra playable pit (mobility)
//!   and per extra seed still on the perspective side's row (distribution).
//!
//! Weights are constants; they do not change with search depth.

use super::evaluator::Evaluator;
use crate::core::{Board, Side};

/// Bonus per playable pit over the opponent.
const MOBILITY_WEIGHT: f64 = 0.5;
/// Bonus per seed on own row over the opponent's row.
const DISTRIBUTION_WEIGHT: f64 = 0.3;

fn material(board: &Board, perspective: Side) -> f64 {
    board.store(perspective) as f64 - board.store(perspective.opponent()) as f64
}

/// Store difference only.
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Side) -> f64 {
        material(board, perspective)
    }

    fn name(&self) -> &str {
        "material"
    }
}

/// Store difference, mobility and seed distribution.
pub struct WeightedEvaluator;

impl Evaluator for WeightedEvaluator {
    fn evaluate(&self, board: &Board, perspective: Side) -> f64 {
        let opponent = perspective.opponent();

        let mobility =
            board.non_empty_pits(perspective) as f64 - board.non_empty_pits(opponent) as f64;
        let distribution =
            board.pit_total(perspective) as f64 - board.pit_total(opponent) as f64;

        material(board, perspective) + MOBILITY_WEIGHT * mobility + DISTRIBUTION_WEIGHT * distribution
    }

    fn name(&self) -> &str {
        "weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_str, Slot};
    use crate::logic::apply_move;
    use crate::player::ai::evaluator::EvaluatorKind;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_symmetric_start_is_balanced() {
        let board = Board::standard(4);
        for kind in [EvaluatorKind::Material, EvaluatorKind::Weighted] {
            assert_eq!(kind.evaluator().evaluate(&board, Side::A), 0.0);
            assert_eq!(kind.evaluator().evaluate(&board, Side::B), 0.0);
        }
    }

    #[test]
    fn test_material_is_store_difference() {
        let board = setup_from_str("1 0 0 0 0 0 12 / 0 3 0 0 0 0 7").unwrap();
        assert_eq!(MaterialEvaluator.evaluate(&board, Side::A), 5.0);
        assert_eq!(MaterialEvaluator.evaluate(&board, Side::B), -5.0);
    }

    #[test]
    fn test_weighted_terms() {
        // After A sows C: store +1, five playable pits vs six, 23 seeds vs 24.
        let mut board = Board::standard(4);
        apply_move(&mut board, Side::A, Slot::C).unwrap();

        let score = WeightedEvaluator.evaluate(&board, Side::A);
        assert!(approx_eq(score, 1.0 - 0.5 - 0.3), "score was {}", score);
        assert!(approx_eq(WeightedEvaluator.evaluate(&board, Side::B), -score));
    }

    #[test]
    fn test_evaluation_has_no_side_effects() {
        let board = setup_from_str("2 0 5 0 0 1 9 / 0 4 0 0 2 0 11").unwrap();
        let before = board.clone();
        let _ = WeightedEvaluator.evaluate(&board, Side::B);
        let _ = MaterialEvaluator.evaluate(&board, Side::A);
        assert_eq!(board, before);
    }
}
