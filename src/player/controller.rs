use crate::core::{EngineResult, Move, Position};

/// 指し手を選ぶ戦略の共通trait
///
/// 手番側に指し手がなければ `EngineError::NoLegalMove` を返す。
pub trait PlayerController {
    fn choose_move(&self, position: &Position) -> EngineResult<Move>;
    fn name(&self) -> &str;
}
