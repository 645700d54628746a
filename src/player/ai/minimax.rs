use super::config::DEFAULT_DEPTH;
use super::eval::PawnGrudgeEvaluator;
use super::evaluator::{absolute_score, Evaluator};
use super::negamax::{SearchStats, SCORE_BOUND};
use super::noise::Noise;
use crate::core::{EngineError, EngineResult, Move, Position};
use crate::logic::{generate_moves, make_move, unmake_move};
use crate::player::PlayerController;
use std::cell::RefCell;

/// 枝刈りなしの全幅 negamax
///
/// 遅いが、alpha-beta 版の結果を確かめる基準として使う。
pub struct MinimaxAI<E: Evaluator = PawnGrudgeEvaluator> {
    name: String,
    depth: usize,
    evaluator: E,
    noise: RefCell<Noise>,
    stats: RefCell<SearchStats>,
}

impl MinimaxAI<PawnGrudgeEvaluator> {
    pub fn new(name: &str) -> Self {
        Self::with_evaluator(name, PawnGrudgeEvaluator::default(), Noise::Disabled)
    }
}

impl<E: Evaluator> MinimaxAI<E> {
    pub fn with_evaluator(name: &str, evaluator: E, noise: Noise) -> Self {
        Self {
            name: name.to_string(),
            depth: DEFAULT_DEPTH,
            evaluator,
            noise: RefCell::new(noise),
            stats: RefCell::new(SearchStats::default()),
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn last_stats(&self) -> SearchStats {
        *self.stats.borrow()
    }

    /// 全ての子を読む。`sign` の意味は `NegamaxAI::search` と同じ
    pub fn search(&self, position: &mut Position, depth: usize, sign: i32) -> (f64, Option<Move>) {
        self.stats.borrow_mut().nodes += 1;

        let moves = generate_moves(position);
        if depth == 0 || moves.is_empty() {
            let score = sign * absolute_score(&self.evaluator, position);
            return (score as f64, None);
        }

        let mut best_score = -SCORE_BOUND;
        let mut best_move = None;
        for mv in moves {
            let undo = make_move(position, mv);
            let (child_score, _) = self.search(position, depth - 1, -sign);
            unmake_move(position, undo);

            let score = -child_score + self.noise.borrow_mut().sample();
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_score, best_move)
    }
}

impl<E: Evaluator> PlayerController for MinimaxAI<E> {
    fn choose_move(&self, position: &Position) -> EngineResult<Move> {
        let side = position.to_move();
        *self.stats.borrow_mut() = SearchStats::default();

        let mut work = position.clone();
        let (score, best) = self.search(&mut work, self.depth.max(1), side.sign());
        self.stats.borrow_mut().score = score;
        best.ok_or(EngineError::NoLegalMove { side })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceKind, Side, Square};

    #[test]
    fn test_minimax_sees_recapture() {
        // ルークでポーンを取ると、相手のビショップに取り返される
        // (ポーンは両者5本以上にしてポーン減点を中立にしておく)
        let mut pos = Position::empty(Side::First);
        pos.place(PieceKind::Rook, Side::First, Square::new(2, 4));
        for col in [0, 1, 2, 3, 5, 6] {
            pos.place(PieceKind::Pawn, Side::First, Square::new(1, col));
        }
        pos.place(PieceKind::Pawn, Side::Second, Square::new(4, 4));
        for col in [0, 1, 5, 6, 7] {
            pos.place(PieceKind::Pawn, Side::Second, Square::new(6, col));
        }
        pos.place(PieceKind::Bishop, Side::Second, Square::new(6, 2));

        let ai = MinimaxAI::new("Minimax").with_depth(2);
        assert_eq!(ai.depth(), 2);
        let mv = ai.choose_move(&pos).unwrap();
        assert_ne!(mv, Move::new(Square::new(2, 4), Square::new(4, 4)));

        let greedy = MinimaxAI::new("Greedy").with_depth(1);
        assert_eq!(
            greedy.choose_move(&pos).unwrap(),
            Move::new(Square::new(2, 4), Square::new(4, 4))
        );
    }
}
