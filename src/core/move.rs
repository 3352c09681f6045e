use super::types::{Side, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of sowing one pit: where the last seed ended up and what it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sowing {
    pub side: Side,
    pub pit: Slot,
    pub landing: Slot,
    pub extra_turn: bool,
    /// Seeds moved into the store by a capture (0 if none).
    pub captured: u32,
}

impl fmt::Display for Sowing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.side, self.pit, self.landing)?;
        if self.captured > 0 {
            write!(f, " (captures {})", self.captured)?;
        }
        if self.extra_turn {
            write!(f, " (extra turn)")?;
        }
        Ok(())
    }
}
