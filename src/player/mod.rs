pub mod ai;
pub mod controller;

pub use ai::{MinimaxAI, NegamaxAI, RandomAI};
pub use controller::PlayerController;
