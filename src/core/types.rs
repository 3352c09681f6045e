use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pits on each side of the board.
pub const PITS_PER_SIDE: usize = 6;
/// Total number of slots (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 2 * PITS_PER_SIDE + 2;

/// 手番側
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A, // 先手 (通常)
    B, // 後手 (通常)
}

impl Default for Side {
    fn default() -> Self {
        Side::A
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Pits of this side in canonical (sowing) order.
    pub fn pits(self) -> [Slot; PITS_PER_SIDE] {
        match self {
            Side::A => [Slot::A, Slot::B, Slot::C, Slot::D, Slot::E, Slot::F],
            Side::B => [Slot::G, Slot::H, Slot::I, Slot::J, Slot::K, Slot::L],
        }
    }

    pub fn store(self) -> Slot {
        match self {
            Side::A => Slot::StoreA,
            Side::B => Slot::StoreB,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// 盤上のスロット
///
/// Declared in sowing order, so the successor of a slot is simply the next
/// variant (wrapping from `StoreB` back to `A`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Slot {
    A,
    B,
    C,
    D,
    E,
    F,
    StoreA,
    G,
    H,
    I,
    J,
    K,
    L,
    StoreB,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::A,
        Slot::B,
        Slot::C,
        Slot::D,
        Slot::E,
        Slot::F,
        Slot::StoreA,
        Slot::G,
        Slot::H,
        Slot::I,
        Slot::J,
        Slot::K,
        Slot::L,
        Slot::StoreB,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Slot> {
        Slot::ALL.get(index).copied()
    }

    pub fn owner(self) -> Side {
        if self.index() <= Slot::StoreA.index() {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn is_store(self) -> bool {
        matches!(self, Slot::StoreA | Slot::StoreB)
    }

    /// Position of a pit within its side's row (0..6). Stores have none.
    pub fn ordinal(self) -> Option<usize> {
        if self.is_store() {
            return None;
        }
        match self.owner() {
            Side::A => Some(self.index()),
            Side::B => Some(self.index() - Slot::G.index()),
        }
    }

    /// The pit directly across the board.
    pub fn opposite(self) -> Option<Slot> {
        if self.is_store() {
            return None;
        }
        Slot::from_index(2 * PITS_PER_SIDE - self.index())
    }

    /// Next slot in sowing order.
    pub fn succ(self) -> Slot {
        Slot::ALL[(self.index() + 1) % SLOT_COUNT]
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::StoreA => write!(f, "Store A"),
            Slot::StoreB => write!(f, "Store B"),
            pit => write!(f, "{:?}", pit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succ_cycles_through_every_slot() {
        let mut slot = Slot::A;
        for expected in Slot::ALL.iter().skip(1) {
            slot = slot.succ();
            assert_eq!(slot, *expected);
        }
        assert_eq!(slot.succ(), Slot::A);
    }

    #[test]
    fn test_opposite_pits() {
        assert_eq!(Slot::A.opposite(), Some(Slot::L));
        assert_eq!(Slot::C.opposite(), Some(Slot::J));
        assert_eq!(Slot::F.opposite(), Some(Slot::G));
        assert_eq!(Slot::StoreA.opposite(), None);
        for side in [Side::A, Side::B] {
            for pit in side.pits() {
                let across = pit.opposite().unwrap();
                assert_eq!(across.owner(), side.opponent());
                assert_eq!(across.opposite(), Some(pit));
            }
        }
    }

    #[test]
    fn test_ownership_and_ordinals() {
        assert_eq!(Slot::StoreA.owner(), Side::A);
        assert_eq!(Slot::StoreB.owner(), Side::B);
        for side in [Side::A, Side::B] {
            for (i, pit) in side.pits().iter().enumerate() {
                assert_eq!(pit.owner(), side);
                assert_eq!(pit.ordinal(), Some(i));
                assert!(!pit.is_store());
            }
            assert!(side.store().is_store());
            assert_eq!(side.store().owner(), side);
        }
    }
}
