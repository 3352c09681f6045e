use super::evaluator::{Evaluator, EvaluatorKind};
use crate::core::{Board, Side, Slot};
use crate::logic::{finalize, is_terminal, legal_moves, sow};

use rayon::prelude::*;
use std::time::Instant;

/// Outcome of a search from one root position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Minimax value of the root, from the root side's perspective.
    pub value: f64,
    /// First pit (in canonical order) achieving `value`. `None` at a leaf.
    pub best_pit: Option<Slot>,
    pub nodes: u64,
}

/// Scores a leaf from the root side's perspective.
///
/// Terminal boards are swept first so the score reflects the final stores.
pub(crate) fn score_leaf(board: &Board, root: Side, evaluator: &dyn Evaluator) -> f64 {
    if is_terminal(board) {
        let mut swept = board.clone();
        finalize(&mut swept);
        evaluator.evaluate(&swept, root)
    } else {
        evaluator.evaluate(board, root)
    }
}

/// Plays `pit` on a copy of `board`; returns the child and the side to move next.
pub(crate) fn child_position(board: &Board, to_move: Side, pit: Slot) -> (Board, Side) {
    let mut child = board.clone();
    let sowing = sow(&mut child, to_move, pit);
    let next = if sowing.extra_turn {
        to_move
    } else {
        to_move.opponent()
    };
    (child, next)
}

/// Fixed-depth minimax with alpha-beta pruning for one side.
///
/// The evaluator is always applied from `side`'s perspective: nodes where
/// `side` moves maximise, nodes where the opponent moves minimise. An extra
/// turn keeps the same side to move but still costs one ply.
pub struct AlphaBetaAI {
    side: Side,
    name: String,
    evaluator: EvaluatorKind,
    depth: u32,
    parallel_root: bool,
}

impl AlphaBetaAI {
    pub fn new(side: Side, name: &str, evaluator: EvaluatorKind, depth: u32) -> Self {
        Self {
            side,
            name: name.to_string(),
            evaluator,
            depth,
            parallel_root: false,
        }
    }

    /// Search root moves on separate rayon workers.
    ///
    /// Workers do not share bounds, so each root child is searched with a
    /// full window. Value and chosen pit match the sequential search; only
    /// pruning is reduced.
    pub fn with_parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn evaluator(&self) -> EvaluatorKind {
        self.evaluator
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn search(&self, board: &Board) -> SearchResult {
        let start_time = Instant::now();

        let result = if self.parallel_root {
            self.search_root_parallel(board)
        } else {
            let mut nodes = 0;
            let (value, best_pit) = self.alpha_beta(
                board,
                self.side,
                self.depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                &mut nodes,
            );
            SearchResult {
                value,
                best_pit,
                nodes,
            }
        };

        tracing::debug!(
            ai = %self.name,
            side = %self.side,
            evaluator = self.evaluator.evaluator().name(),
            depth = self.depth,
            nodes = result.nodes,
            value = result.value,
            pit = ?result.best_pit,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "search finished"
        );

        result
    }

    // --- Alpha-Beta Search ---
    fn alpha_beta(
        &self,
        board: &Board,
        to_move: Side,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        nodes: &mut u64,
    ) -> (f64, Option<Slot>) {
        *nodes += 1;

        let evaluator = self.evaluator.evaluator();
        if depth == 0 || is_terminal(board) {
            return (score_leaf(board, self.side, evaluator), None);
        }

        let maximizing = to_move == self.side;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_pit = None;

        for pit in legal_moves(board, to_move) {
            let (child, next) = child_position(board, to_move, pit);
            let (value, _) = self.alpha_beta(&child, next, depth - 1, alpha, beta, nodes);

            // 同値なら先に見つけた手を優先
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_pit = Some(pit);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_pit = Some(pit);
                }
                beta = beta.min(best_value);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_value, best_pit)
    }

    fn search_root_parallel(&self, board: &Board) -> SearchResult {
        let evaluator = self.evaluator.evaluator();
        if self.depth == 0 || is_terminal(board) {
            return SearchResult {
                value: score_leaf(board, self.side, evaluator),
                best_pit: None,
                nodes: 1,
            };
        }

        let moves = legal_moves(board, self.side);
        let children: Vec<(Slot, f64, u64)> = moves
            .par_iter()
            .map(|&pit| {
                let (child, next) = child_position(board, self.side, pit);
                let mut nodes = 0;
                let (value, _) = self.alpha_beta(
                    &child,
                    next,
                    self.depth - 1,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    &mut nodes,
                );
                (pit, value, nodes)
            })
            .collect();

        let mut result = SearchResult {
            value: f64::NEG_INFINITY,
            best_pit: None,
            nodes: 1,
        };
        for (pit, value, nodes) in children {
            result.nodes += nodes;
            if value > result.value {
                result.value = value;
                result.best_pit = Some(pit);
            }
        }
        result
    }
}
