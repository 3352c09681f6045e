use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use mancala_ai::core::Sowing;
use mancala_ai::display::{render_board, DisplayState};
use mancala_ai::game::{drive, new_game, Controller, Session, SessionConfig};
use mancala_ai::player::ai::config::AIConfig;
use mancala_ai::player::ai::EvaluatorKind;
use mancala_ai::player::TuiController;
use mancala_ai::Side;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay off unless RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(io::stderr)
        .init();

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn wait_for_choice(choices: &[char]) -> anyhow::Result<Option<char>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(None),
                    KeyCode::Char(c) if choices.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let ai_config = AIConfig::get();
    let search = &ai_config.search;

    print!("=== Kalah Mancala ===\r\n");
    print!("\r\nSelect players:\r\n");
    print!("1. Human vs Material AI (depth {})\r\n", search.material_depth);
    print!("2. Human vs Weighted AI (depth {})\r\n", search.weighted_depth);
    print!("3. Material AI vs Weighted AI\r\n");
    print!("4. Human vs Human\r\n");

    let material = Controller::personality(EvaluatorKind::Material, search);
    let weighted = Controller::personality(EvaluatorKind::Weighted, search);
    let (side_a, side_b) = match wait_for_choice(&['1', '2', '3', '4'])? {
        Some('1') => (Controller::Human, material),
        Some('2') => (Controller::Human, weighted),
        Some('3') => (material, weighted),
        Some(_) => (Controller::Human, Controller::Human),
        None => return Ok(()),
    };

    print!("\r\nWho moves first?\r\n");
    print!("1. Side A\r\n");
    print!("2. Side B\r\n");
    let first_to_move = match wait_for_choice(&['1', '2'])? {
        Some('2') => Side::B,
        Some(_) => Side::A,
        None => return Ok(()),
    };

    let config = SessionConfig {
        seeds_per_pit: ai_config.game.seeds_per_pit,
        side_a,
        side_b,
        first_to_move,
        parallel_search: search.parallel_root,
    };
    let mut session = new_game(config)?;

    // A lone human always sees their own row at the bottom.
    let perspective = if side_a == Controller::Human || side_b != Controller::Human {
        Side::A
    } else {
        Side::B
    };

    let human = TuiController::new("Human");
    let outcome = drive(&mut session, &human, |session, sowing| {
        show_move(session, sowing, perspective);
    })?;

    let mut state = DisplayState::default();
    state.perspective = perspective;
    state.last_move = session.history().last().map(|s| s.pit);
    state.status_msg = Some(match outcome {
        Some(outcome) => format!("Game over: {}", outcome),
        None => "Resigned".to_string(),
    });
    render_board(session.board(), &state)?;
    print!("Press any key to exit\r\n");
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                break;
            }
        }
    }

    Ok(())
}

fn show_move(session: &Session, sowing: &Sowing, perspective: Side) {
    let mut state = DisplayState::default();
    state.perspective = perspective;
    state.last_move = Some(sowing.pit);
    state.status_msg = Some(match (sowing.extra_turn, sowing.captured) {
        (true, _) => format!("{} sowed {}: extra turn", sowing.side, sowing.pit),
        (false, 0) => format!("{} sowed {}", sowing.side, sowing.pit),
        (false, n) => format!("{} sowed {} and captured {}", sowing.side, sowing.pit, n),
    });
    if let Err(e) = render_board(session.board(), &state) {
        tracing::warn!("failed to render board: {}", e);
    }

    // AIの手は少し見せる
    if session.is_computer(sowing.side) {
        std::thread::sleep(Duration::from_millis(600));
    }
}
