use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 8;

/// 手番側
///
/// `First` は大文字の駒 (サーバー上の値は `1`)、`Second` は小文字の駒 (`-1`)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,  // 白 / 大文字
    Second, // 黒 / 小文字
}

impl Default for Side {
    fn default() -> Self {
        Side::First
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// 評価値の符号 (+1 / -1)
    pub fn sign(self) -> i32 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// ポーンの前進方向 (行の増減)
    pub fn forward(self) -> i32 {
        self.sign()
    }

    /// サーバーの `who_moves` 値から変換する
    pub fn from_wire(value: i64) -> Option<Side> {
        match value {
            1 => Some(Side::First),
            -1 => Some(Side::Second),
            _ => None,
        }
    }

    pub fn to_wire(self) -> i64 {
        self.sign() as i64
    }
}

/// 盤面座標 (0-indexed, row 0 が一段目)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// 相対移動。盤外なら None
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_range(row) && in_range(col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

fn in_range(v: i32) -> bool {
    v >= 0 && v < BOARD_SIZE as i32
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
