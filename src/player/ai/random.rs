use crate::core::{Board, Side, Slot};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// Baseline opponent that picks a legal pit uniformly at random.
pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, _side: Side, legal_moves: &[Slot]) -> Option<Slot> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::legal_moves;

    #[test]
    fn test_random_picks_a_legal_pit() {
        let board = crate::core::setup_from_str("0 2 0 0 1 0 0 / 4 4 4 4 4 4 0").unwrap();
        let moves = legal_moves(&board, Side::A);
        let ai = RandomAI::new("Random");
        for _ in 0..20 {
            let pit = ai.choose_move(&board, Side::A, &moves).unwrap();
            assert!(moves.contains(&pit));
        }
        assert_eq!(ai.choose_move(&board, Side::A, &[]), None);
    }
}
