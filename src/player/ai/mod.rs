pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod negamax;
pub mod noise;
pub mod random;

pub use config::AIConfig;
pub use eval::PawnGrudgeEvaluator;
pub use evaluator::Evaluator;
pub use minimax::MinimaxAI;
pub use negamax::{NegamaxAI, SearchStats};
pub use noise::Noise;
pub use random::RandomAI;
