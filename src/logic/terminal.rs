use crate::core::{Board, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    SideAWins,
    SideBWins,
    Tie,
}

/// Final result of a game, with both store counts after the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: MatchResult,
    pub store_a: u32,
    pub store_b: u32,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self.result {
            MatchResult::SideAWins => Some(Side::A),
            MatchResult::SideBWins => Some(Side::B),
            MatchResult::Tie => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{} wins", side)?,
            None => write!(f, "Tie")?,
        }
        write!(f, " ({} - {})", self.store_a, self.store_b)
    }
}

/// 終局判定: one side has no seeds left in any pit.
pub fn is_terminal(board: &Board) -> bool {
    board.pit_total(Side::A) == 0 || board.pit_total(Side::B) == 0
}

/// Sweeps every side's remaining pit seeds into its own store.
///
/// Returns the number of seeds moved. Calling it again is a no-op.
pub fn finalize(board: &mut Board) -> u32 {
    let mut swept = 0;
    for side in [Side::A, Side::B] {
        let remaining: u32 = side.pits().iter().map(|&pit| board.take_seeds(pit)).sum();
        board.add_seeds(side.store(), remaining);
        swept += remaining;
    }
    swept
}

/// Ranks the two stores. Meaningful once the board has been finalized.
pub fn outcome(board: &Board) -> GameOutcome {
    let store_a = board.store(Side::A);
    let store_b = board.store(Side::B);
    let result = if store_a > store_b {
        MatchResult::SideAWins
    } else if store_b > store_a {
        MatchResult::SideBWins
    } else {
        MatchResult::Tie
    };
    GameOutcome {
        result,
        store_a,
        store_b,
    }
}
