use crate::core::{Board, Side, Slot};

/// プレイヤー操作のtrait
///
/// Supplies moves for sides the session does not search for itself.
/// Returning `None` resigns the game.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, side: Side, legal_moves: &[Slot]) -> Option<Slot>;
    fn name(&self) -> &str;
}
