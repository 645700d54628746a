//! # Evaluation Module
//!
//! Static evaluation of a [`Position`], always relative to the side to move
//! (positive = mover advantage). The negamax search relies on this.
//!
//! ## Scoring Strategy
//! 1. **Material Balance**: mover's piece weights minus the opponent's
//!    (pawn 10, bishop 21, rook 35).
//! 2. **Pawn Grudge**: a penalty looked up by remaining pawn count, so that
//!    running out of pawns is heavily punished
//!    (`table[mover_pawns] - table[opponent_pawns]`).
//!
//! No color-based sign is applied here; the search converts between the
//! mover's view and a side's view itself.

use super::config::EvaluationConfig;
use super::evaluator::Evaluator;
use crate::core::Position;

const MAX_PAWNS: usize = 8;

/// Material difference between the mover's pieces and the opponent's.
pub fn material_balance(position: &Position) -> i32 {
    let mover: i32 = position
        .mover_pieces()
        .iter()
        .map(|p| p.evaluation_weight())
        .sum();
    let opponent: i32 = position
        .opponent_pieces()
        .iter()
        .map(|p| p.evaluation_weight())
        .sum();
    mover - opponent
}

/// Pawn-count asymmetry bonus from the mover's perspective.
pub fn pawn_grudge(position: &Position, table: &[i32; 9]) -> i32 {
    let mover = position.pawn_count(position.to_move()).min(MAX_PAWNS);
    let opponent = position
        .pawn_count(position.to_move().opponent())
        .min(MAX_PAWNS);
    table[mover] - table[opponent]
}

/// Material plus pawn grudge.
#[derive(Debug, Clone, Default)]
pub struct PawnGrudgeEvaluator {
    config: EvaluationConfig,
}

impl PawnGrudgeEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }
}

impl Evaluator for PawnGrudgeEvaluator {
    fn evaluate(&self, position: &Position) -> i32 {
        material_balance(position) + pawn_grudge(position, &self.config.pawn_grudge)
    }

    fn name(&self) -> &str {
        "pawn-grudge"
    }
}
