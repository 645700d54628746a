use super::error::{EngineResult, ParseError};
use super::setup::position_from_wire;
use crate::core::{Move, Position};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// ゲームサーバーから届く局面のスナップショット
///
/// サーバーが付ける他のフィールド (`bad_move`, `winner` など) は無視する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: String,
    pub who_moves: i64,
}

impl Snapshot {
    pub fn to_position(&self) -> Result<Position, ParseError> {
        position_from_wire(&self.board, self.who_moves)
    }
}

/// スナップショット1つに対して1手決める
///
/// 盤面が読めなければ `MalformedPosition`、手番側に手がなければ `NoLegalMove`。
pub fn decide(snapshot: &Snapshot, controller: &dyn PlayerController) -> EngineResult<Move> {
    let position = snapshot.to_position()?;
    tracing::debug!("\n{}", render_board(&position, &DisplayState::new()));
    controller.choose_move(&position)
}

/// サーバーへ返す指し手 (`[row, col]` の組)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReply {
    pub from: [usize; 2],
    pub to: [usize; 2],
}

impl From<Move> for MoveReply {
    fn from(mv: Move) -> Self {
        MoveReply {
            from: [mv.from.row, mv.from.col],
            to: [mv.to.row, mv.to.col],
        }
    }
}
