pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{AlphaBetaAI, EvaluatorKind, RandomAI};
pub use controller::PlayerController;
pub use tui::TuiController;
