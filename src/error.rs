//! Error types for the rules engine and game sessions
//!
//! Every error here is a recoverable rejection: validation happens before the
//! board is touched, so a rejected request leaves the game exactly as it was.

use crate::core::{Side, Slot};
use std::fmt;

/// Why a pit cannot be sown by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The pit belongs to the other side.
    NotOwned,
    /// Stores are never sown from.
    Store,
    /// The pit holds no seeds.
    Empty,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidMoveReason::NotOwned => write!(f, "pit belongs to the opponent"),
            InvalidMoveReason::Store => write!(f, "stores cannot be sown"),
            InvalidMoveReason::Empty => write!(f, "pit is empty"),
        }
    }
}

/// Who is expected to supply the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    External,
    Computer,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveSource::External => write!(f, "an external player"),
            MoveSource::Computer => write!(f, "the computer"),
        }
    }
}

/// Errors that can occur while playing moves
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {side} cannot sow {pit} ({reason})")]
    InvalidMove {
        side: Side,
        pit: Slot,
        reason: InvalidMoveReason,
    },

    #[error("the game is already over")]
    MoveAfterGameOver,

    #[error("not your turn: {side} is controlled by {expected}")]
    NotYourTurn { side: Side, expected: MoveSource },
}

/// Errors reported when a session is created from a bad configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("seeds per pit must be at least 1")]
    ZeroSeeds,

    #[error("search depth for {side} must be at least 1")]
    ZeroDepth { side: Side },

    #[error("starting board has no seeds in any pit")]
    EmptyBoard,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidMove {
            side: Side::A,
            pit: Slot::G,
            reason: InvalidMoveReason::NotOwned,
        };
        assert_eq!(
            err.to_string(),
            "invalid move: Side A cannot sow G (pit belongs to the opponent)"
        );

        let err = GameError::NotYourTurn {
            side: Side::B,
            expected: MoveSource::Computer,
        };
        assert_eq!(
            err.to_string(),
            "not your turn: Side B is controlled by the computer"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ZeroDepth { side: Side::B };
        assert_eq!(err.to_string(), "search depth for Side B must be at least 1");
    }
}
