use super::types::{Side, Slot, PITS_PER_SIDE, SLOT_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 盤面
///
/// Seed counts for all 14 slots, indexed by [`Slot::index`]. Cloning a board
/// yields a fully independent copy, which is what the search explores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    seeds: [u32; SLOT_COUNT],
}

impl Board {
    /// Canonical starting position: `seeds_per_pit` in every pit, empty stores.
    pub fn standard(seeds_per_pit: u32) -> Self {
        let mut seeds = [seeds_per_pit; SLOT_COUNT];
        seeds[Slot::StoreA.index()] = 0;
        seeds[Slot::StoreB.index()] = 0;
        Board { seeds }
    }

    pub fn from_counts(seeds: [u32; SLOT_COUNT]) -> Self {
        Board { seeds }
    }

    pub fn counts(&self) -> &[u32; SLOT_COUNT] {
        &self.seeds
    }

    pub fn seeds(&self, slot: Slot) -> u32 {
        self.seeds[slot.index()]
    }

    pub fn set_seeds(&mut self, slot: Slot, count: u32) {
        self.seeds[slot.index()] = count;
    }

    pub fn add_seeds(&mut self, slot: Slot, count: u32) {
        self.seeds[slot.index()] += count;
    }

    /// Empties a slot and returns what it held.
    pub fn take_seeds(&mut self, slot: Slot) -> u32 {
        std::mem::take(&mut self.seeds[slot.index()])
    }

    pub fn store(&self, side: Side) -> u32 {
        self.seeds(side.store())
    }

    /// Seeds still in play on `side`'s row.
    pub fn pit_total(&self, side: Side) -> u32 {
        side.pits().iter().map(|&pit| self.seeds(pit)).sum()
    }

    pub fn non_empty_pits(&self, side: Side) -> usize {
        side.pits().iter().filter(|&&pit| self.seeds(pit) > 0).count()
    }

    pub fn total(&self) -> u32 {
        self.seeds.iter().sum()
    }

    /// Slot-to-count view handed to renderers.
    pub fn snapshot(&self) -> BTreeMap<Slot, u32> {
        Slot::ALL.iter().map(|&slot| (slot, self.seeds(slot))).collect()
    }

    /// Seeds in `side`'s pits, in canonical order.
    pub fn row(&self, side: Side) -> [u32; PITS_PER_SIDE] {
        side.pits().map(|pit| self.seeds(pit))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board() {
        let board = Board::standard(4);
        assert_eq!(board.total(), 48);
        assert_eq!(board.store(Side::A), 0);
        assert_eq!(board.store(Side::B), 0);
        assert_eq!(board.row(Side::B), [4; PITS_PER_SIDE]);
        assert_eq!(board.pit_total(Side::A), 24);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::standard(3);
        let mut copy = board.clone();
        copy.take_seeds(Slot::C);
        copy.add_seeds(Slot::StoreA, 3);
        assert_eq!(board.seeds(Slot::C), 3);
        assert_eq!(board.store(Side::A), 0);
        assert_eq!(copy.total(), board.total());
    }

    #[test]
    fn test_snapshot_covers_all_slots() {
        let snapshot = Board::standard(4).snapshot();
        assert_eq!(snapshot.len(), SLOT_COUNT);
        assert_eq!(snapshot[&Slot::L], 4);
        assert_eq!(snapshot[&Slot::StoreB], 0);
    }
}
