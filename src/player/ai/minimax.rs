//! Exhaustive fixed-perspective minimax without pruning.
//!
//! Walks the same tree as [`AlphaBetaAI`](super::alpha_beta::AlphaBetaAI) and
//! serves as the reference its pruned results are checked against.

use super::alpha_beta::{child_position, score_leaf, SearchResult};
use super::evaluator::Evaluator;
use crate::core::{Board, Side, Slot};
use crate::logic::{is_terminal, legal_moves};

fn minimax(
    board: &Board,
    to_move: Side,
    root: Side,
    depth: u32,
    evaluator: &dyn Evaluator,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;
    if depth == 0 || is_terminal(board) {
        return score_leaf(board, root, evaluator);
    }

    let values = legal_moves(board, to_move).into_iter().map(|pit| {
        let (child, next) = child_position(board, to_move, pit);
        minimax(&child, next, root, depth - 1, evaluator, &mut *nodes)
    });

    if to_move == root {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// Value of every root move for `root`, in canonical order.
pub fn root_move_values(
    board: &Board,
    root: Side,
    depth: u32,
    evaluator: &dyn Evaluator,
) -> Vec<(Slot, f64)> {
    if depth == 0 || is_terminal(board) {
        return Vec::new();
    }
    let mut nodes = 0;
    legal_moves(board, root)
        .into_iter()
        .map(|pit| {
            let (child, next) = child_position(board, root, pit);
            (pit, minimax(&child, next, root, depth - 1, evaluator, &mut nodes))
        })
        .collect()
}

/// Full-width search; the chosen pit is the first one reaching the best value.
pub fn exhaustive_search(
    board: &Board,
    root: Side,
    depth: u32,
    evaluator: &dyn Evaluator,
) -> SearchResult {
    let mut nodes = 1;
    if depth == 0 || is_terminal(board) {
        return SearchResult {
            value: score_leaf(board, root, evaluator),
            best_pit: None,
            nodes,
        };
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_pit = None;
    for pit in legal_moves(board, root) {
        let (child, next) = child_position(board, root, pit);
        let value = minimax(&child, next, root, depth - 1, evaluator, &mut nodes);
        if value > best_value {
            best_value = value;
            best_pit = Some(pit);
        }
    }

    SearchResult {
        value: best_value,
        best_pit,
        nodes,
    }
}
