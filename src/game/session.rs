//! Game session: the single authoritative board and the turn state machine.
//!
//! A session moves through `AwaitingMove(side)` until a move leaves one row
//! empty, at which point the board is swept once and the session is
//! `Finished`. Computer-controlled sides are advanced with
//! [`Session::step_computer`]; all other sides with [`Session::submit_move`].

use crate::core::{Board, Side, Slot, Sowing};
use crate::error::{ConfigError, GameError, GameResult, MoveSource};
use crate::logic::{self, apply_move, finalize, is_terminal, GameOutcome};
use crate::player::ai::config::SearchConfig;
use crate::player::ai::{AlphaBetaAI, EvaluatorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Who plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Moves arrive through `submit_move`.
    Human,
    /// Moves are searched by the session.
    Computer { evaluator: EvaluatorKind, depth: u32 },
}

impl Controller {
    /// Computer personality using the configured depth for `evaluator`.
    pub fn personality(evaluator: EvaluatorKind, search: &SearchConfig) -> Self {
        Controller::Computer {
            evaluator,
            depth: search.depth_for(evaluator),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub seeds_per_pit: u32,
    pub side_a: Controller,
    pub side_b: Controller,
    pub first_to_move: Side,
    pub parallel_search: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seeds_per_pit: 4,
            side_a: Controller::Human,
            side_b: Controller::Human,
            first_to_move: Side::A,
            parallel_search: false,
        }
    }
}

impl SessionConfig {
    pub fn new(side_a: Controller, side_b: Controller) -> Self {
        SessionConfig {
            side_a,
            side_b,
            ..Self::default()
        }
    }

    pub fn controller(&self, side: Side) -> Controller {
        match side {
            Side::A => self.side_a,
            Side::B => self.side_b,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::ZeroSeeds);
        }
        for side in [Side::A, Side::B] {
            if let Controller::Computer { depth: 0, .. } = self.controller(side) {
                return Err(ConfigError::ZeroDepth { side });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Side),
    Finished(GameOutcome),
}

pub struct Session {
    config: SessionConfig,
    initial: Board,
    board: Board,
    phase: Phase,
    history: Vec<Sowing>,
    ai_a: Option<AlphaBetaAI>,
    ai_b: Option<AlphaBetaAI>,
}

impl Session {
    /// Starts a game from the canonical position.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::standard(config.seeds_per_pit);
        let first = config.first_to_move;
        Self::with_board(config, board, first)
    }

    /// Starts a game from a custom position with `to_move` on turn.
    pub fn with_board(config: SessionConfig, board: Board, to_move: Side) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.pit_total(Side::A) + board.pit_total(Side::B) == 0 {
            return Err(ConfigError::EmptyBoard);
        }

        let engine = |side: Side| match config.controller(side) {
            Controller::Computer { evaluator, depth } => Some(
                AlphaBetaAI::new(
                    side,
                    &format!("{} AI ({})", evaluator.evaluator().name(), side),
                    evaluator,
                    depth,
                )
                .with_parallel_root(config.parallel_search),
            ),
            Controller::Human => None,
        };
        let ai_a = engine(Side::A);
        let ai_b = engine(Side::B);

        let mut session = Session {
            initial: board.clone(),
            board,
            phase: Phase::AwaitingMove(to_move),
            history: Vec::new(),
            ai_a,
            ai_b,
            config,
        };
        if is_terminal(&session.board) {
            session.finish();
        }
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &[Sowing] {
        &self.history
    }

    pub fn current_side(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingMove(side) => Some(side),
            Phase::Finished(_) => None,
        }
    }

    pub fn is_computer(&self, side: Side) -> bool {
        self.engine(side).is_some()
    }

    pub fn engine(&self, side: Side) -> Option<&AlphaBetaAI> {
        match side {
            Side::A => self.ai_a.as_ref(),
            Side::B => self.ai_b.as_ref(),
        }
    }

    /// Legal pits for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Slot> {
        match self.phase {
            Phase::AwaitingMove(side) => logic::legal_moves(&self.board, side),
            Phase::Finished(_) => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<Slot, u32> {
        self.board.snapshot()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Plays an externally chosen pit. Returns whether an extra turn was granted.
    pub fn submit_move(&mut self, pit: Slot) -> GameResult<bool> {
        let side = self.awaiting()?;
        if self.is_computer(side) {
            return Err(GameError::NotYourTurn {
                side,
                expected: MoveSource::Computer,
            });
        }
        self.play(side, pit).map(|sowing| sowing.extra_turn)
    }

    /// Searches and plays the move for a computer-controlled side.
    pub fn step_computer(&mut self) -> GameResult<(Slot, bool)> {
        let side = self.awaiting()?;
        let engine = self.engine(side).ok_or(GameError::NotYourTurn {
            side,
            expected: MoveSource::External,
        })?;

        // 非終局なら合法手は必ず存在する
        let pit = engine
            .search(&self.board)
            .best_pit
            .ok_or(GameError::MoveAfterGameOver)?;
        let sowing = self.play(side, pit)?;
        Ok((pit, sowing.extra_turn))
    }

    fn awaiting(&self) -> GameResult<Side> {
        self.current_side().ok_or(GameError::MoveAfterGameOver)
    }

    fn play(&mut self, side: Side, pit: Slot) -> GameResult<Sowing> {
        let sowing = apply_move(&mut self.board, side, pit)?;
        self.history.push(sowing);
        tracing::debug!(move_no = self.history.len(), "{}", sowing);

        if is_terminal(&self.board) {
            self.finish();
        } else if sowing.extra_turn {
            self.phase = Phase::AwaitingMove(side);
        } else {
            self.phase = Phase::AwaitingMove(side.opponent());
        }
        Ok(sowing)
    }

    fn finish(&mut self) {
        let swept = finalize(&mut self.board);
        let outcome = logic::outcome(&self.board);
        tracing::info!(
            moves = self.history.len(),
            swept,
            "game over: {}",
            outcome
        );
        self.phase = Phase::Finished(outcome);
    }
}
