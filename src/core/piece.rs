use super::board::Position;
use super::types::{Side, Square};
use serde::{Deserialize, Serialize};

/// 駒の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
}

impl PieceKind {
    /// 盤面文字列の1文字から駒の種類と持ち主を得る (大文字 = First)
    pub fn from_char(c: char) -> Option<(PieceKind, Side)> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            _ => return None,
        };
        let side = if c.is_ascii_uppercase() {
            Side::First
        } else {
            Side::Second
        };
        Some((kind, side))
    }

    pub fn display_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
        }
    }

    /// 駒の静的価値
    pub fn evaluation_weight(&self) -> i32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Rook => 35,
            PieceKind::Bishop => 21,
        }
    }
}

/// 移動の特性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStep {
    Slide(i32, i32), // (行, 列) 方向へ障害物があるまで移動
}

/// 駒の定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Piece { kind, side, square }
    }

    /// スライド駒の方向。生成順 = この並び順
    pub fn movement_rules(&self) -> Vec<MoveStep> {
        match self.kind {
            // 右, 左, 上, 下
            PieceKind::Rook => vec![
                MoveStep::Slide(0, 1),
                MoveStep::Slide(0, -1),
                MoveStep::Slide(1, 0),
                MoveStep::Slide(-1, 0),
            ],
            // 右上, 左上, 左下, 右下
            PieceKind::Bishop => vec![
                MoveStep::Slide(1, 1),
                MoveStep::Slide(1, -1),
                MoveStep::Slide(-1, -1),
                MoveStep::Slide(-1, 1),
            ],
            PieceKind::Pawn => {
                // Pawnは「移動」と「取り」が違うため、手生成側で特殊処理する
                vec![]
            }
        }
    }

    /// この駒が移動できるマスを列挙する
    pub fn generate(&self, position: &Position) -> Vec<Square> {
        crate::logic::piece_destinations(position, self)
    }

    pub fn evaluation_weight(&self) -> i32 {
        self.kind.evaluation_weight()
    }

    pub fn is_opponent(&self, other: Option<&Piece>) -> bool {
        other.map_or(false, |p| p.side != self.side)
    }

    pub fn display_char(&self) -> char {
        let c = self.kind.display_char();
        match self.side {
            Side::First => c.to_ascii_uppercase(),
            Side::Second => c,
        }
    }
}
