use super::config::{AIConfig, DEFAULT_DEPTH};
use super::eval::PawnGrudgeEvaluator;
use super::evaluator::{absolute_score, Evaluator};
use super::noise::Noise;
use crate::core::{EngineError, EngineResult, Move, Position};
use crate::logic::{generate_moves, make_move, unmake_move};
use crate::player::PlayerController;

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

/// ルートの探索窓 (評価値がこれを超えることはない)
pub const SCORE_BOUND: f64 = 10_000_000.0;

/// 直前の探索の統計
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    pub nodes: usize,
    pub deadline_hit: bool,
    pub score: f64,
}

/// 固定深さの negamax + alpha-beta
pub struct NegamaxAI<E: Evaluator = PawnGrudgeEvaluator> {
    name: String,
    depth: usize,
    evaluator: E,
    noise: RefCell<Noise>,
    time_limit: Option<Duration>,
    deadline: Cell<Option<Instant>>,
    stats: RefCell<SearchStats>,
}

impl NegamaxAI<PawnGrudgeEvaluator> {
    pub fn new(name: &str) -> Self {
        Self::from_config(name, &AIConfig::default())
    }

    pub fn from_config(name: &str, config: &AIConfig) -> Self {
        let evaluator = PawnGrudgeEvaluator::new(config.evaluation.clone());
        let mut ai = Self::with_evaluator(name, evaluator, Noise::from_config(&config.search));
        ai.depth = config.search.depth;
        ai.time_limit = config.search.deadline_ms.map(Duration::from_millis);
        ai
    }
}

impl<E: Evaluator> NegamaxAI<E> {
    pub fn with_evaluator(name: &str, evaluator: E, noise: Noise) -> Self {
        Self {
            name: name.to_string(),
            depth: DEFAULT_DEPTH,
            evaluator,
            noise: RefCell::new(noise),
            time_limit: None,
            deadline: Cell::new(None),
            stats: RefCell::new(SearchStats::default()),
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn last_stats(&self) -> SearchStats {
        *self.stats.borrow()
    }

    pub fn reset_stats(&self) {
        *self.stats.borrow_mut() = SearchStats::default();
    }

    fn deadline_passed(&self) -> bool {
        match self.deadline.get() {
            Some(deadline) if Instant::now() >= deadline => {
                self.stats.borrow_mut().deadline_hit = true;
                true
            }
            _ => false,
        }
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// `sign` is the color of the side to move at this node (`+1` for
    /// `Side::First`), so a leaf scores `sign * absolute_score`, i.e. the
    /// mover's view. Returns the best move found, `None` at leaves or when no
    /// move beats `alpha`. The position is restored before returning.
    pub fn search(
        &self,
        position: &mut Position,
        depth: usize,
        mut alpha: f64,
        beta: f64,
        sign: i32,
    ) -> (f64, Option<Move>) {
        self.stats.borrow_mut().nodes += 1;

        let moves = generate_moves(position);
        if depth == 0 || moves.is_empty() || self.deadline_passed() {
            let score = sign * absolute_score(&self.evaluator, position);
            return (score as f64, None);
        }

        let mut best_score = alpha;
        let mut best_move = None;

        for mv in moves {
            let undo = make_move(position, mv);
            let (child_score, _) = self.search(position, depth - 1, -beta, -alpha, -sign);
            unmake_move(position, undo);

            let score = -child_score + self.noise.borrow_mut().sample();
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);

            if alpha >= beta {
                break; // Beta Cutoff
            }
        }

        (best_score, best_move)
    }

    fn search_root(&self, position: &Position) -> EngineResult<Move> {
        let side = position.to_move();
        let moves = generate_moves(position);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMove { side });
        }

        self.reset_stats();
        self.deadline
            .set(self.time_limit.map(|limit| Instant::now() + limit));

        // 深さ0ではルートで手が選べないので最低1手読む
        let depth = self.depth.max(1);
        let mut work = position.clone();
        let (score, best) = self.search(&mut work, depth, -SCORE_BOUND, SCORE_BOUND, side.sign());
        self.deadline.set(None);

        let mut stats = self.stats.borrow_mut();
        stats.score = score;
        if stats.deadline_hit {
            tracing::warn!(nodes = stats.nodes, "search deadline reached");
        }

        // 時間切れでルートごと葉になった場合は先頭の手
        let mv = best.unwrap_or(moves[0]);
        tracing::debug!(
            ai = %self.name,
            evaluator = self.evaluator.name(),
            ?side,
            depth,
            nodes = stats.nodes,
            score,
            %mv,
            "negamax decision"
        );
        Ok(mv)
    }
}

impl<E: Evaluator> PlayerController for NegamaxAI<E> {
    fn choose_move(&self, position: &Position) -> EngineResult<Move> {
        self.search_root(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
