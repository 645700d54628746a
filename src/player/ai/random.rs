use crate::core::{EngineError, EngineResult, Move, Position};
use crate::logic::generate_moves;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// 探索せずに合法手から一様に選ぶ
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        Self::with_rng(name, StdRng::from_entropy())
    }

    pub fn seeded(name: &str, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: &str, rng: StdRng) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(rng),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, position: &Position) -> EngineResult<Move> {
        let moves = generate_moves(position);
        let mut rng = self.rng.borrow_mut();
        moves
            .choose(&mut *rng)
            .copied()
            .ok_or(EngineError::NoLegalMove {
                side: position.to_move(),
            })
    }
}
