use super::error::ParseError;
use crate::core::{PieceKind, Position, Side, Square, BOARD_SIZE};

/// 空きマスの文字
pub const EMPTY_CELL: char = '.';

/// 64文字の盤面表記と手番から局面を作る
///
/// 文字列は8段目 (row 7) から1段目 (row 0) の順、各段は左から右。
/// 駒リストの順序はこの走査順になる。
pub fn position_from_board_str(board: &str, to_move: Side) -> Result<Position, ParseError> {
    let cells: Vec<char> = board.chars().collect();
    if cells.len() != BOARD_SIZE * BOARD_SIZE {
        return Err(ParseError::BoardLength { len: cells.len() });
    }

    let mut position = Position::empty(to_move);
    for (index, &c) in cells.iter().enumerate() {
        if c == EMPTY_CELL {
            continue;
        }
        let (kind, side) =
            PieceKind::from_char(c).ok_or(ParseError::UnknownPiece { index, found: c })?;
        let row = BOARD_SIZE - 1 - index / BOARD_SIZE;
        let col = index % BOARD_SIZE;
        position.place(kind, side, Square::new(row, col));
    }
    Ok(position)
}

/// サーバーの `who_moves` 値付きで局面を作る
pub fn position_from_wire(board: &str, who_moves: i64) -> Result<Position, ParseError> {
    let side = Side::from_wire(who_moves).ok_or(ParseError::UnknownSide { value: who_moves })?;
    position_from_board_str(board, side)
}

/// 文字列配列 (8段目から) を1本の盤面表記にまとめる
pub fn board_str_from_rows(rows: &[&str]) -> String {
    rows.concat()
}

/// 自己対戦用の初期配置
pub fn get_default_setup() -> Vec<&'static str> {
    vec![
        "r.b..b.r", // Second (小文字)
        "pppppppp",
        "........",
        "........",
        "........",
        "........",
        "PPPPPPPP",
        "R.B..B.R", // First (大文字)
    ]
}

pub fn default_position() -> Result<Position, ParseError> {
    position_from_board_str(&board_str_from_rows(&get_default_setup()), Side::First)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_places_rows_top_down() {
        let pos = default_position().unwrap();
        let rook = pos.occupant(Square::new(0, 0)).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert_eq!(rook.side, Side::First);
        let pawn = pos.occupant(Square::new(6, 3)).unwrap();
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert_eq!(pawn.side, Side::Second);
        assert_eq!(pos.mover_pieces().len(), 12);
        assert_eq!(pos.opponent_pieces().len(), 12);
        assert!(pos.is_consistent());
    }

    #[test]
    fn test_mover_list_follows_scan_order() {
        let pos = default_position().unwrap();
        // First の駒は row 1 (ポーン) が row 0 より先に走査される
        assert_eq!(pos.mover_pieces()[0].square, Square::new(1, 0));
        assert_eq!(pos.mover_pieces()[8].square, Square::new(0, 0));
    }

    #[test]
    fn test_round_trip_board_string() {
        let board = board_str_from_rows(&get_default_setup());
        let pos = position_from_board_str(&board, Side::Second).unwrap();
        assert_eq!(pos.to_board_string(), board);
    }

    #[test]
    fn test_unknown_piece_is_rejected() {
        let mut board = ".".repeat(64);
        board.replace_range(10..11, "k");
        assert_eq!(
            position_from_board_str(&board, Side::First),
            Err(ParseError::UnknownPiece {
                index: 10,
                found: 'k'
            })
        );
    }

    #[test]
    fn test_wrong_length_and_side_are_rejected() {
        assert_eq!(
            position_from_board_str("....", Side::First),
            Err(ParseError::BoardLength { len: 4 })
        );
        assert_eq!(
            position_from_wire(&".".repeat(64), 0),
            Err(ParseError::UnknownSide { value: 0 })
        );
        let pos = position_from_wire(&".".repeat(64), -1).unwrap();
        assert_eq!(pos.to_move(), Side::Second);
    }
}
