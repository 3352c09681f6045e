use super::session::Session;
use crate::core::{Board, Side, Sowing};
use crate::logic::{apply_move, finalize, is_terminal, GameOutcome};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 棋譜: everything needed to replay a finished or running game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub label: String,
    pub initial: Board,
    pub first_to_move: Side,
    pub moves: Vec<Sowing>,
    pub outcome: Option<GameOutcome>,
}

impl GameRecord {
    pub fn from_session(session: &Session, label: &str) -> Self {
        GameRecord {
            label: label.to_string(),
            initial: session.initial_board().clone(),
            first_to_move: session.config().first_to_move,
            moves: session.history().to_vec(),
            outcome: session.outcome(),
        }
    }

    /// Rebuilds every position of the game, starting with the initial board.
    ///
    /// Each recorded move is re-sown and must reproduce the recorded landing,
    /// capture and extra turn. A final terminal position is swept.
    pub fn replay(&self) -> anyhow::Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial.clone();
        let mut side = self.first_to_move;
        boards.push(board.clone());

        for (i, recorded) in self.moves.iter().enumerate() {
            if is_terminal(&board) {
                anyhow::bail!("move {} played after the game ended", i + 1);
            }
            if recorded.side != side {
                anyhow::bail!(
                    "move {} was played by {} but {} was to move",
                    i + 1,
                    recorded.side,
                    side
                );
            }
            let sowing = apply_move(&mut board, side, recorded.pit)?;
            if sowing != *recorded {
                anyhow::bail!("move {} does not match the record: {} vs {}", i + 1, sowing, recorded);
            }
            if is_terminal(&board) {
                finalize(&mut board);
            }
            if !sowing.extra_turn {
                side = side.opponent();
            }
            boards.push(board.clone());
        }

        Ok(boards)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(file, self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
