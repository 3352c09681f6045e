pub mod terminal;

pub use terminal::{finalize, is_terminal, outcome, GameOutcome, MatchResult};

use crate::core::{Board, Side, Slot, Sowing};
use crate::error::{GameError, GameResult, InvalidMoveReason};

/// 合法手生成
///
/// Non-empty pits of `side`, in canonical order. The order is what the search
/// uses to break ties, so it must stay stable.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Slot> {
    side.pits()
        .into_iter()
        .filter(|&pit| board.seeds(pit) > 0)
        .collect()
}

/// Checks that `side` may sow `pit` on `board`.
pub fn validate_move(board: &Board, side: Side, pit: Slot) -> GameResult<()> {
    let reason = if pit.is_store() {
        Some(InvalidMoveReason::Store)
    } else if pit.owner() != side {
        Some(InvalidMoveReason::NotOwned)
    } else if board.seeds(pit) == 0 {
        Some(InvalidMoveReason::Empty)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(GameError::InvalidMove { side, pit, reason }),
        None => Ok(()),
    }
}

/// 移動適用
///
/// Validates the move, then sows it in place. On error the board is untouched.
pub fn apply_move(board: &mut Board, side: Side, pit: Slot) -> GameResult<Sowing> {
    validate_move(board, side, pit)?;
    Ok(sow(board, side, pit))
}

/// Sows `pit` without validation. Callers must pass a pit from
/// [`legal_moves`].
pub(crate) fn sow(board: &mut Board, side: Side, pit: Slot) -> Sowing {
    let skipped = side.opponent().store();
    let mut seeds = board.take_seeds(pit);
    let mut current = pit;

    while seeds > 0 {
        current = current.succ();
        if current == skipped {
            continue;
        }
        board.add_seeds(current, 1);
        seeds -= 1;
    }

    let landing = current;
    let mut captured = 0;

    // 空の自陣ピットに着地し、向かいにタネがあれば捕獲
    if !landing.is_store() && landing.owner() == side && board.seeds(landing) == 1 {
        if let Some(across) = landing.opposite() {
            if board.seeds(across) > 0 {
                captured = board.take_seeds(landing) + board.take_seeds(across);
                board.add_seeds(side.store(), captured);
            }
        }
    }

    Sowing {
        side,
        pit,
        landing,
        extra_turn: landing == side.store(),
        captured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_str;

    fn board(layout: &str) -> Board {
        setup_from_str(layout).unwrap()
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let b = board("0 3 0 1 0 2 0 / 1 0 0 0 0 5 0");
        assert_eq!(legal_moves(&b, Side::A), vec![Slot::B, Slot::D, Slot::F]);
        assert_eq!(legal_moves(&b, Side::B), vec![Slot::G, Slot::L]);
    }

    #[test]
    fn test_opening_move_from_first_pit() {
        let mut b = Board::standard(4);
        let sowing = apply_move(&mut b, Side::A, Slot::A).unwrap();
        assert_eq!(sowing.landing, Slot::E);
        assert!(!sowing.extra_turn);
        assert_eq!(sowing.captured, 0);
        assert_eq!(b, board("0 5 5 5 5 4 0 / 4 4 4 4 4 4 0"));
    }

    #[test]
    fn test_extra_turn_when_last_seed_hits_own_store() {
        let mut b = Board::standard(4);
        let sowing = apply_move(&mut b, Side::A, Slot::C).unwrap();
        assert_eq!(sowing.landing, Slot::StoreA);
        assert!(sowing.extra_turn);
        assert_eq!(b, board("4 4 0 5 5 5 1 / 4 4 4 4 4 4 0"));

        let mut b = board("1 1 1 1 1 1 0 / 6 0 0 0 0 0 0");
        let sowing = apply_move(&mut b, Side::B, Slot::G).unwrap();
        assert!(sowing.extra_turn);
        assert_eq!(b.store(Side::B), 1);
    }

    #[test]
    fn test_sowing_past_own_store_into_opponent_row() {
        let mut b = Board::standard(4);
        let sowing = apply_move(&mut b, Side::A, Slot::F).unwrap();
        assert_eq!(sowing.landing, Slot::I);
        assert!(!sowing.extra_turn);
        assert_eq!(b, board("4 4 4 4 4 0 1 / 5 5 5 4 4 4 0"));
    }

    #[test]
    fn test_opponent_store_is_skipped() {
        // Ten seeds from F wrap around past Store B and capture at C.
        let mut b = board("0 0 0 0 0 10 0 / 1 1 1 1 1 1 0");
        let sowing = apply_move(&mut b, Side::A, Slot::F).unwrap();
        assert_eq!(sowing.landing, Slot::C);
        assert_eq!(sowing.captured, 3);
        assert_eq!(b, board("1 1 0 0 0 0 4 / 2 2 2 0 2 2 0"));

        let mut b = board("1 1 1 1 1 1 0 / 0 2 0 0 0 9 0");
        let sowing = apply_move(&mut b, Side::B, Slot::L).unwrap();
        assert_eq!(sowing.landing, Slot::H);
        assert_eq!(b.store(Side::A), 0);
        assert_eq!(b, board("2 2 2 2 2 2 0 / 1 3 0 0 0 0 1"));
    }

    #[test]
    fn test_full_lap_lands_back_in_source_pit() {
        let mut b = board("13 0 0 0 0 0 0 / 0 0 0 0 0 0 0");
        let sowing = apply_move(&mut b, Side::A, Slot::A).unwrap();
        assert_eq!(sowing.landing, Slot::A);
        assert_eq!(sowing.captured, 2);
        assert_eq!(b, board("0 1 1 1 1 1 3 / 1 1 1 1 1 0 0"));
    }

    #[test]
    fn test_capture_single_seed_into_empty_pit() {
        let mut b = board("1 0 0 0 0 0 0 / 2 0 0 0 3 0 0");
        let sowing = apply_move(&mut b, Side::A, Slot::A).unwrap();
        assert_eq!(sowing.landing, Slot::B);
        assert_eq!(sowing.captured, 4);
        assert_eq!(b, board("0 0 0 0 0 0 4 / 2 0 0 0 0 0 0"));

        let mut b = board("0 0 0 0 5 0 0 / 1 0 0 0 0 0 0");
        let sowing = apply_move(&mut b, Side::B, Slot::G).unwrap();
        assert_eq!(sowing.captured, 6);
        assert_eq!(b, board("0 0 0 0 0 0 0 / 0 0 0 0 0 0 6"));
    }

    #[test]
    fn test_no_capture_when_opposite_is_empty() {
        let mut b = board("1 0 0 0 0 0 0 / 2 0 0 0 0 0 0");
        let sowing = apply_move(&mut b, Side::A, Slot::A).unwrap();
        assert_eq!(sowing.captured, 0);
        assert_eq!(b, board("0 1 0 0 0 0 0 / 2 0 0 0 0 0 0"));
    }

    #[test]
    fn test_no_capture_on_occupied_or_opponent_pit() {
        // Lands on B which already held seeds.
        let mut b = board("1 2 0 0 0 0 0 / 2 0 0 0 3 0 0");
        assert_eq!(apply_move(&mut b, Side::A, Slot::A).unwrap().captured, 0);
        assert_eq!(b.seeds(Slot::B), 3);

        // Lands on an empty opponent pit.
        let mut b = board("0 0 0 0 0 3 0 / 0 0 4 0 0 0 0");
        let sowing = apply_move(&mut b, Side::A, Slot::F).unwrap();
        assert_eq!(sowing.landing, Slot::H);
        assert_eq!(sowing.captured, 0);
        assert_eq!(b, board("0 0 0 0 0 0 1 / 1 1 4 0 0 0 0"));
    }

    #[test]
    fn test_landing_in_store_never_captures() {
        let mut b = board("0 0 0 0 0 1 0 / 7 0 0 0 0 0 0");
        let sowing = apply_move(&mut b, Side::A, Slot::F).unwrap();
        assert!(sowing.extra_turn);
        assert_eq!(sowing.captured, 0);
        assert_eq!(b.seeds(Slot::G), 7);
        assert_eq!(b.store(Side::A), 1);
    }

    #[test]
    fn test_invalid_moves_leave_board_untouched() {
        let mut b = board("0 3 0 0 0 0 0 / 4 0 0 0 0 0 0");
        let before = b.clone();

        let err = apply_move(&mut b, Side::A, Slot::A).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                side: Side::A,
                pit: Slot::A,
                reason: InvalidMoveReason::Empty
            }
        );
        assert!(matches!(
            apply_move(&mut b, Side::A, Slot::G),
            Err(GameError::InvalidMove {
                reason: InvalidMoveReason::NotOwned,
                ..
            })
        ));
        assert!(matches!(
            apply_move(&mut b, Side::B, Slot::StoreB),
            Err(GameError::InvalidMove {
                reason: InvalidMoveReason::Store,
                ..
            })
        ));
        assert_eq!(b, before);
    }
}
