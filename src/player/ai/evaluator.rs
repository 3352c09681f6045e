//! Evaluator trait for board evaluation
//!
//! Defines a common interface for the evaluation strategies used by the search.

use crate::core::{Board, Side};
use serde::{Deserialize, Serialize};

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the board from `perspective`'s point of view.
    ///
    /// Higher is better for `perspective`. Must not depend on whose turn it
    /// is and must be callable on terminal and non-terminal boards alike.
    fn evaluate(&self, board: &Board, perspective: Side) -> f64;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}

/// Selects one of the built-in evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluatorKind {
    /// Store difference only.
    Material,
    /// Store difference plus mobility and seed-distribution terms.
    Weighted,
}

impl EvaluatorKind {
    pub fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            EvaluatorKind::Material => &super::eval::MaterialEvaluator,
            EvaluatorKind::Weighted => &super::eval::WeightedEvaluator,
        }
    }
}
