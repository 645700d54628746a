use crate::core::{Move, Position, Side, Square, BOARD_SIZE};
use std::fmt::Write;

#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub last_move: Option<Move>,
    pub status_msg: Option<String>,
    /// 盤の下側に来る側
    pub perspective: Side,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 盤面をテキストにする (ログ・CLI 用、色なし)
///
/// 直前の手の移動元と移動先は `{ }` で囲む。
pub fn render_board(position: &Position, state: &DisplayState) -> String {
    let mut out = String::new();

    if let Some(msg) = &state.status_msg {
        let _ = writeln!(out, "{}", msg);
    }
    let _ = writeln!(out, "{:?} to move", position.to_move());

    let columns: Vec<usize> = match state.perspective {
        Side::First => (0..BOARD_SIZE).collect(),
        Side::Second => (0..BOARD_SIZE).rev().collect(),
    };
    let rows: Vec<usize> = match state.perspective {
        Side::First => (0..BOARD_SIZE).rev().collect(),
        Side::Second => (0..BOARD_SIZE).collect(),
    };

    // 列ラベル
    out.push_str("   ");
    for &col in &columns {
        let _ = write!(out, " {} ", col);
    }
    out.push('\n');

    for &row in &rows {
        let _ = write!(out, "{:2} ", row);
        for &col in &columns {
            let square = Square::new(row, col);
            let c = position
                .occupant(square)
                .map_or('.', |piece| piece.display_char());

            let is_last_move = state
                .last_move
                .map_or(false, |mv| mv.from == square || mv.to == square);

            if is_last_move {
                let _ = write!(out, "{{{}}}", c);
            } else {
                let _ = write!(out, " {} ", c);
            }
        }
        out.push('\n');
    }
    out
}
