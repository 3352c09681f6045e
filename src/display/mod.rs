use crate::core::{Board, Side, Slot, PITS_PER_SIDE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

pub struct DisplayState {
    /// Ordinal (0..6) of the pit under the cursor on the perspective side.
    pub cursor: usize,
    pub highlights: Vec<Slot>,
    pub status_msg: Option<String>,
    pub last_move: Option<Slot>,
    pub perspective: Side,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: 0,
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            perspective: Side::default(),
            show_cursor: false,
        }
    }
}

/// Pits in screen order: the opponent's row runs right-to-left on top,
/// the perspective side's row left-to-right at the bottom.
fn screen_rows(perspective: Side) -> ([Slot; PITS_PER_SIDE], [Slot; PITS_PER_SIDE]) {
    let mut top = perspective.opponent().pits();
    top.reverse();
    (top, perspective.pits())
}

/// Uncoloured board diagram, as used in logs and self-play output.
pub fn board_text(board: &Board, perspective: Side) -> String {
    let (top, bottom) = screen_rows(perspective);
    let cells = |row: &[Slot]| {
        row.iter()
            .map(|&pit| format!("{:>3}", board.seeds(pit)))
            .collect::<String>()
    };
    let labels = |row: &[Slot]| {
        row.iter()
            .map(|&pit| format!("{:>3}", pit.to_string()))
            .collect::<String>()
    };

    let mut out = String::new();
    out.push_str(&format!("     {}\n", labels(&top)));
    out.push_str(&format!("     {}\n", cells(&top)));
    out.push_str(&format!(
        "{:>3} {} {:<3}\n",
        board.store(perspective.opponent()),
        " ".repeat(3 * PITS_PER_SIDE),
        board.store(perspective)
    ));
    out.push_str(&format!("     {}\n", cells(&bottom)));
    out.push_str(&format!("     {}\n", labels(&bottom)));
    out
}

pub fn render_board(board: &Board, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Mancala (Kalah) ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    let (top, bottom) = screen_rows(state.perspective);

    print!("        ");
    for pit in top {
        print!("  {} ", pit);
    }
    print!("\r\n");
    print!("       +{}+\r\n", "----".repeat(PITS_PER_SIDE));

    print!("       |");
    for pit in top {
        print!("{}", cell(board, pit, state));
    }
    print!("|\r\n");

    let opponent_store = format!("{:>4}", board.store(state.perspective.opponent()));
    let own_store = format!("{:<4}", board.store(state.perspective));
    print!(
        "  {} |{}| {}\r\n",
        opponent_store.magenta(),
        " ".repeat(4 * PITS_PER_SIDE),
        own_store.cyan()
    );

    print!("       |");
    for pit in bottom {
        print!("{}", cell(board, pit, state));
    }
    print!("|\r\n");
    print!("       +{}+\r\n", "----".repeat(PITS_PER_SIDE));

    print!("        ");
    for pit in bottom {
        print!("  {} ", pit);
    }
    print!("\r\n\r\n");

    out.flush()
}

fn cell(board: &Board, pit: Slot, state: &DisplayState) -> String {
    let is_cursor = state.show_cursor
        && pit.owner() == state.perspective
        && pit.ordinal() == Some(state.cursor);
    let is_highlight = state.highlights.contains(&pit);
    let is_last_move = state.last_move == Some(pit);

    let (prefix, suffix) = if is_cursor {
        ("[", "]")
    } else if is_highlight {
        ("(", ")")
    } else if is_last_move {
        ("{", "}")
    } else {
        (" ", " ")
    };
    let text = format!("{}{:>2}{}", prefix, board.seeds(pit), suffix);

    if is_cursor {
        text.yellow().to_string()
    } else if is_highlight {
        text.green().to_string()
    } else if is_last_move {
        text.red().to_string()
    } else if pit.owner() == state.perspective {
        text.cyan().to_string()
    } else {
        text.magenta().to_string()
    }
}
