use crate::core::{Board, Side, Slot, PITS_PER_SIDE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// Keyboard pit picker for a human at the terminal.
pub struct TuiController {
    name: String,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn read_key() -> Option<KeyCode> {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(KeyEvent { code, .. })) => Some(code),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("failed to read terminal event: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::warn!("failed to poll terminal events: {}", e);
                None
            }
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, side: Side, legal_moves: &[Slot]) -> Option<Slot> {
        let mut state = DisplayState::default();
        state.perspective = side;
        state.show_cursor = true;
        state.highlights = legal_moves.to_vec();
        state.status_msg = Some(format!("{}'s turn ({})", self.name, side));

        // 初期カーソルを最初の合法手に合わせる
        if let Some(ordinal) = legal_moves.first().and_then(|pit| pit.ordinal()) {
            state.cursor = ordinal;
        }

        loop {
            if let Err(e) = render_board(board, &state) {
                tracing::warn!("failed to render board: {}", e);
            }
            print!("[Left/Right]: Move | [Enter]: Sow | [q]: Resign\r\n");

            match Self::read_key() {
                Some(KeyCode::Char('q')) => return None,
                Some(KeyCode::Left) => {
                    if state.cursor > 0 {
                        state.cursor -= 1;
                    }
                }
                Some(KeyCode::Right) => {
                    if state.cursor < PITS_PER_SIDE - 1 {
                        state.cursor += 1;
                    }
                }
                Some(KeyCode::Char(c)) if c.is_ascii_digit() => {
                    // 1-6 jumps straight to a pit
                    if let Some(n) = c.to_digit(10) {
                        if (1..=PITS_PER_SIDE as u32).contains(&n) {
                            state.cursor = n as usize - 1;
                        }
                    }
                }
                Some(KeyCode::Enter) | Some(KeyCode::Char(' ')) => {
                    let pit = side.pits()[state.cursor];
                    if legal_moves.contains(&pit) {
                        return Some(pit);
                    }
                    state.status_msg = Some(format!("{} is empty, pick another pit", pit));
                }
                _ => {}
            }
        }
    }
}
