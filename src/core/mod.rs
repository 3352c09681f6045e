pub mod board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::Board;
pub use r#move::Sowing;
pub use setup::setup_from_str;
pub use types::{Side, Slot, PITS_PER_SIDE, SLOT_COUNT};
