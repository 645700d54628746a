use crate::core::{EngineError, EngineResult, Move, Position, Side};
use crate::logic::apply_move;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// 対局の終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// 手番側に指し手がない (その側の負け)
    NoLegalMove,
    /// 手数上限 (引き分け)
    PlyLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<Side>,
    pub end: GameEnd,
    pub plies: usize,
}

/// 画面なしの対局進行
pub struct Game {
    pub position: Position,
    pub history: Vec<Move>,
}

impl Game {
    pub fn new(position: Position) -> Self {
        Game {
            position,
            history: Vec::new(),
        }
    }

    /// `first` は `Side::First`、`second` は `Side::Second` を持つ
    pub fn play(
        &mut self,
        first: &dyn PlayerController,
        second: &dyn PlayerController,
        max_plies: usize,
    ) -> EngineResult<GameOutcome> {
        loop {
            let plies = self.history.len();
            if plies >= max_plies {
                return Ok(GameOutcome {
                    winner: None,
                    end: GameEnd::PlyLimit,
                    plies,
                });
            }

            let current = self.position.to_move();
            let controller = match current {
                Side::First => first,
                Side::Second => second,
            };

            match controller.choose_move(&self.position) {
                Ok(mv) => {
                    tracing::trace!(ply = plies + 1, player = controller.name(), %mv, "move");
                    self.position = apply_move(&self.position, mv);
                    self.history.push(mv);
                }
                Err(EngineError::NoLegalMove { side }) => {
                    tracing::debug!(?side, plies, "no legal move, game over");
                    return Ok(GameOutcome {
                        winner: Some(side.opponent()),
                        end: GameEnd::NoLegalMove,
                        plies,
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup::default_position;
    use crate::core::{PieceKind, Square};
    use crate::player::{NegamaxAI, RandomAI};

    #[test]
    fn test_ply_limit_is_a_draw() {
        let first = RandomAI::seeded("R1", 1);
        let second = RandomAI::seeded("R2", 2);
        let mut game = Game::new(default_position().unwrap());
        let outcome = game.play(&first, &second, 6).unwrap();
        assert_eq!(outcome.end, GameEnd::PlyLimit);
        assert_eq!(outcome.winner, None);
        assert_eq!(game.history.len(), 6);
        assert!(game.position.is_consistent());
    }

    #[test]
    fn test_side_without_moves_loses() {
        // Second の唯一の駒を取れば Second は指せない
        let mut pos = Position::empty(Side::First);
        pos.place(PieceKind::Rook, Side::First, Square::new(0, 0));
        pos.place(PieceKind::Bishop, Side::Second, Square::new(0, 5));

        let first = NegamaxAI::new("AI");
        let second = RandomAI::seeded("Random", 4);
        let mut game = Game::new(pos);
        let outcome = game.play(&first, &second, 10).unwrap();
        assert_eq!(outcome.winner, Some(Side::First));
        assert_eq!(outcome.end, GameEnd::NoLegalMove);
        assert_eq!(outcome.plies, 1);
    }
}
