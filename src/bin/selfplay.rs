//! Headless self-play between engine personalities.
//!
//! Usage: selfplay [games] [side_a] [side_b] [--parallel] [--records <dir>]
//!
//! A contender is `material`, `weighted`, `random`, or `material@<depth>` /
//! `weighted@<depth>`. Depths default to `mancala_config.json`.

use mancala_ai::core::Board;
use mancala_ai::display::board_text;
use mancala_ai::player::ai::config::AIConfig;
use mancala_ai::player::ai::EvaluatorKind;
use mancala_ai::selfplay::{run_selfplay, Contender, SelfPlayConfig};
use mancala_ai::Side;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn parse_contender(arg: &str, config: &AIConfig) -> anyhow::Result<Contender> {
    let (name, depth) = match arg.split_once('@') {
        Some((name, depth)) => (name, Some(depth.parse::<u32>()?)),
        None => (arg, None),
    };
    let evaluator = match name {
        "random" => return Ok(Contender::Random),
        "material" => EvaluatorKind::Material,
        "weighted" => EvaluatorKind::Weighted,
        _ => anyhow::bail!("unknown contender: {}", arg),
    };
    Ok(Contender::Computer {
        evaluator,
        depth: depth.unwrap_or_else(|| config.search.depth_for(evaluator)),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AIConfig::get();
    let mut positional = Vec::new();
    let mut parallel = false;
    let mut record_dir = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--parallel" => parallel = true,
            "--records" => match args.next() {
                Some(dir) => record_dir = Some(PathBuf::from(dir)),
                None => anyhow::bail!("--records needs a directory"),
            },
            _ => positional.push(arg),
        }
    }

    let num_games = match positional.first() {
        Some(n) => n.parse()?,
        None => 10,
    };
    let side_a = parse_contender(positional.get(1).map_or("material", String::as_str), config)?;
    let side_b = parse_contender(positional.get(2).map_or("weighted", String::as_str), config)?;

    println!("{}", board_text(&Board::standard(config.game.seeds_per_pit), Side::A));
    println!("{} vs {}, {} games", side_a, side_b, num_games);

    let stats = run_selfplay(SelfPlayConfig {
        num_games,
        side_a,
        side_b,
        seeds_per_pit: config.game.seeds_per_pit,
        parallel,
        record_dir,
    })?;

    println!("Side A ({}) wins: {}", stats.side_a, stats.a_wins);
    println!("Side B ({}) wins: {}", stats.side_b, stats.b_wins);
    println!("Draws: {}", stats.draws);
    println!("Average moves: {:.1}", stats.avg_moves);
    println!("Average store margin (A - B): {:.2}", stats.avg_margin);
    println!("Average time: {:.0} ms", stats.avg_time_ms);
    Ok(())
}
