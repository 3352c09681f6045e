use crate::core::Side;
use crate::game::{drive, Controller, GameRecord, Session, SessionConfig};
use crate::player::ai::EvaluatorKind;
use crate::player::RandomAI;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Who plays a side in a self-play match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contender {
    Computer { evaluator: EvaluatorKind, depth: u32 },
    Random,
}

impl Contender {
    fn controller(self) -> Controller {
        match self {
            Contender::Computer { evaluator, depth } => Controller::Computer { evaluator, depth },
            Contender::Random => Controller::Human,
        }
    }
}

impl fmt::Display for Contender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Contender::Computer { evaluator, depth } => {
                write!(f, "{}@{}", evaluator.evaluator().name(), depth)
            }
            Contender::Random => write!(f, "random"),
        }
    }
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub side_a: Contender,
    pub side_b: Contender,
    pub seeds_per_pit: u32,
    /// Play games on the rayon pool.
    pub parallel: bool,
    /// Directory for JSON game records, if they should be kept.
    pub record_dir: Option<PathBuf>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub store_a: u32,
    pub store_b: u32,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub avg_margin: f64,
    pub side_a: String,
    pub side_b: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self {
            total_games: 0,
            a_wins: 0,
            b_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            avg_margin: 0.0,
            side_a: String::new(),
            side_b: String::new(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Side::A) => self.a_wins += 1,
            Some(Side::B) => self.b_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        let total_margin: i64 = self
            .games
            .iter()
            .map(|g| g.store_a as i64 - g.store_b as i64)
            .sum();
        self.avg_moves = total_moves as f64 / n;
        self.avg_time_ms = total_time as f64 / n;
        self.avg_margin = total_margin as f64 / n;
    }
}

impl Default for SelfPlayStats {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_selfplay(config: SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    stats.side_a = config.side_a.to_string();
    stats.side_b = config.side_b.to_string();

    if let Some(dir) = &config.record_dir {
        std::fs::create_dir_all(dir)?;
    }

    let games = 1..=config.num_games;
    let results: Vec<(GameResult, GameRecord)> = if config.parallel {
        games
            .into_par_iter()
            .map(|game_num| play_game(&config, game_num))
            .collect::<anyhow::Result<_>>()?
    } else {
        games
            .map(|game_num| play_game(&config, game_num))
            .collect::<anyhow::Result<_>>()?
    };

    for (game_num, (result, record)) in results.into_iter().enumerate() {
        if let Some(dir) = &config.record_dir {
            save_record(dir, &record, game_num + 1)?;
        }
        stats.add_result(result);
    }

    tracing::info!(
        games = stats.total_games,
        a_wins = stats.a_wins,
        b_wins = stats.b_wins,
        draws = stats.draws,
        "self-play finished: {} vs {}",
        stats.side_a,
        stats.side_b
    );
    Ok(stats)
}

fn play_game(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<(GameResult, GameRecord)> {
    let start_time = Instant::now();
    let session_config = SessionConfig {
        seeds_per_pit: config.seeds_per_pit,
        side_a: config.side_a.controller(),
        side_b: config.side_b.controller(),
        first_to_move: Side::A,
        parallel_search: false,
    };
    let mut session = Session::new(session_config)?;

    let random = RandomAI::new("Random");
    let outcome = drive(&mut session, &random, |_, _| {})?
        .ok_or_else(|| anyhow::anyhow!("game {} ended without an outcome", game_num))?;

    let elapsed = start_time.elapsed();
    tracing::info!(
        game = game_num,
        moves = session.history().len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "{}",
        outcome
    );

    let result = GameResult {
        winner: outcome.winner(),
        store_a: outcome.store_a,
        store_b: outcome.store_b,
        moves: session.history().len(),
        time_ms: elapsed.as_millis(),
    };
    let label = format!("{} vs {}", config.side_a, config.side_b);
    Ok((result, GameRecord::from_session(&session, &label)))
}

fn save_record(dir: &Path, record: &GameRecord, game_num: usize) -> anyhow::Result<()> {
    let filename = dir.join(format!(
        "game_{:04}_{}.json",
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));
    record.save(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winner: Option<Side>, store_a: u32, store_b: u32, moves: usize) -> GameResult {
        GameResult {
            winner,
            store_a,
            store_b,
            moves,
            time_ms: 10,
        }
    }

    #[test]
    fn test_stats_accounting() {
        let mut stats = SelfPlayStats::new();
        stats.add_result(result(Some(Side::A), 30, 18, 40));
        stats.add_result(result(Some(Side::B), 20, 28, 30));
        stats.add_result(result(None, 24, 24, 50));

        assert_eq!(stats.total_games, 3);
        assert_eq!((stats.a_wins, stats.b_wins, stats.draws), (1, 1, 1));
        assert_eq!(stats.avg_moves, 40.0);
        assert_eq!(stats.avg_margin, (12.0 - 8.0 + 0.0) / 3.0);
    }

    #[test]
    fn test_selfplay_against_random() {
        let config = SelfPlayConfig {
            num_games: 4,
            side_a: Contender::Computer {
                evaluator: EvaluatorKind::Material,
                depth: 2,
            },
            side_b: Contender::Random,
            seeds_per_pit: 3,
            parallel: true,
            record_dir: None,
        };
        let stats = run_selfplay(config).unwrap();

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.a_wins + stats.b_wins + stats.draws, 4);
        assert_eq!(stats.side_a, "material@2");
        assert!(stats.games.iter().all(|g| g.store_a + g.store_b == 36));
    }

    #[test]
    fn test_selfplay_writes_records() {
        let dir = std::env::temp_dir().join(format!("mancala_selfplay_{}", std::process::id()));
        let config = SelfPlayConfig {
            num_games: 2,
            side_a: Contender::Computer {
                evaluator: EvaluatorKind::Weighted,
                depth: 1,
            },
            side_b: Contender::Computer {
                evaluator: EvaluatorKind::Material,
                depth: 1,
            },
            seeds_per_pit: 4,
            parallel: false,
            record_dir: Some(dir.clone()),
        };
        run_selfplay(config).unwrap();

        let files: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(files.len(), 2);
        for entry in files {
            let record = GameRecord::load(entry.unwrap().path()).unwrap();
            assert!(record.outcome.is_some());
            record.replay().unwrap();
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
