pub mod record;
pub mod session;

pub use record::GameRecord;
pub use session::{Controller, Phase, Session, SessionConfig};

use crate::core::Sowing;
use crate::error::ConfigError;
use crate::logic::GameOutcome;
use crate::player::PlayerController;

pub fn new_game(config: SessionConfig) -> Result<Session, ConfigError> {
    Session::new(config)
}

/// Runs a session until it finishes.
///
/// Computer sides are stepped by the session itself; every other side asks
/// `external`. `on_move` sees the session after each move. Returns `None` if
/// the external player resigns.
pub fn drive<F>(
    session: &mut Session,
    external: &dyn PlayerController,
    mut on_move: F,
) -> anyhow::Result<Option<GameOutcome>>
where
    F: FnMut(&Session, &Sowing),
{
    while let Some(side) = session.current_side() {
        if session.is_computer(side) {
            session.step_computer()?;
        } else {
            let moves = session.legal_moves();
            match external.choose_move(session.board(), side, &moves) {
                Some(pit) => {
                    session.submit_move(pit)?;
                }
                None => {
                    tracing::info!("{} resigned ({})", external.name(), side);
                    return Ok(None);
                }
            }
        }

        if let Some(last) = session.history().last().copied() {
            on_move(session, &last);
        }
    }

    Ok(session.outcome())
}
