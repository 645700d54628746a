pub mod board;
pub mod error;
pub mod r#move;
pub mod piece;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::Position;
pub use error::{EngineError, EngineResult, ParseError};
pub use piece::{MoveStep, Piece, PieceKind};
pub use r#move::Move;
pub use serialization::{MoveReply, Snapshot};
pub use setup::{position_from_board_str, position_from_wire};
pub use types::{Side, Square, BOARD_SIZE};
