//! Kalah (6 pits per side) rules engine and fixed-depth alpha-beta players.
//!
//! The presentation layer only needs [`game::Session`]: create it with
//! [`game::new_game`], read [`game::Session::snapshot`] to draw the board,
//! call [`game::Session::step_computer`] for AI turns and
//! [`game::Session::submit_move`] for everyone else.

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{Board, Side, Slot};
pub use error::{ConfigError, GameError};
pub use game::{new_game, Controller, Session, SessionConfig};
pub use logic::{GameOutcome, MatchResult};
pub use player::ai::EvaluatorKind;
