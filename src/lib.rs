//! Move selection for a pawn / rook / bishop chess variant on an 8×8 board.
//!
//! A [`core::Position`] is built from the server's 64-character snapshot,
//! and a [`player::PlayerController`] (negamax search or uniform random)
//! picks the move to send back.

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
mod logic_tests;
pub mod player;
pub mod selfplay;

pub use crate::core::{EngineError, Move, ParseError, Position, Side, Square};
pub use crate::player::PlayerController;
