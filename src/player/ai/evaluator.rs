//! Evaluator trait for position scoring
//!
//! Defines a common interface so the search can be run against
//! different scoring strategies.

use crate::core::Position;

/// Trait for evaluating positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the position from the side to move's perspective
    ///
    /// Returns:
    ///   - Positive score: the mover is ahead
    ///   - Negative score: the opponent is ahead
    fn evaluate(&self, position: &Position) -> i32;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}

/// Score from `Side::First`'s point of view (mover-relative score times the mover's color)
pub fn absolute_score<E: Evaluator + ?Sized>(evaluator: &E, position: &Position) -> i32 {
    position.to_move().sign() * evaluator.evaluate(position)
}
