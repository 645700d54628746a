use crate::core::{Move, MoveStep, Piece, PieceKind, Position, Square};

/// 手番側の指し手生成 (王手などの概念はないので疑似合法手 = 合法手)
pub fn generate_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in position.mover_pieces() {
        moves.extend(
            piece_destinations(position, piece)
                .into_iter()
                .map(|to| Move::new(piece.square, to)),
        );
    }
    moves
}

/// 駒1つの移動先
pub fn piece_destinations(position: &Position, piece: &Piece) -> Vec<Square> {
    if piece.kind == PieceKind::Pawn {
        return get_pawn_destinations(position, piece);
    }

    let mut destinations = Vec::new();
    for step in piece.movement_rules() {
        match step {
            MoveStep::Slide(dr, dc) => {
                let mut curr = piece.square;
                while let Some(to) = curr.offset(dr, dc) {
                    match position.occupant(to) {
                        Some(target) => {
                            if target.side != piece.side {
                                destinations.push(to);
                            }
                            break;
                        }
                        None => {
                            destinations.push(to);
                            curr = to;
                        }
                    }
                }
            }
        }
    }
    destinations
}

fn get_pawn_destinations(position: &Position, piece: &Piece) -> Vec<Square> {
    let mut destinations = Vec::new();
    let forward = piece.side.forward();

    // 1マス前進 (取りなし、2マス前進・成りなし)
    if let Some(to) = piece.square.offset(forward, 0) {
        if position.is_empty(to) {
            destinations.push(to);
        }
    }

    // 斜め取り: 右, 左。盤外の照会は「駒なし」になるので取りは生成されない
    let row = piece.square.row as i32 + forward;
    for dc in [1, -1] {
        let col = piece.square.col as i32 + dc;
        if piece.is_opponent(position.occupant_at(row, col)) {
            if let Some(to) = piece.square.offset(forward, dc) {
                destinations.push(to);
            }
        }
    }
    destinations
}

/// 1手を戻すための記録
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    mv: Move,
    /// 動いた駒の (mover リスト内の位置)。None なら何もしていない
    moved_index: Option<usize>,
    /// 取った駒と opponent リスト内の元の位置
    captured: Option<(usize, Piece)>,
}

impl Undo {
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, p)| p)
    }
}

/// 移動適用 (その場で盤面を書き換える)
///
/// 合法性の再検証はしない。`generate_moves` が返した手だけを渡すこと。
pub fn make_move(position: &mut Position, mv: Move) -> Undo {
    let Some(moved_index) = position.mover_index_at(mv.from) else {
        tracing::warn!(%mv, "no mover piece on origin square, move ignored");
        return Undo {
            mv,
            moved_index: None,
            captured: None,
        };
    };

    let captured = position
        .opponent_index_at(mv.to)
        .map(|index| (index, position.take_opponent(index)));

    position.relocate_mover(moved_index, mv.to);
    position.swap_roles();

    Undo {
        mv,
        moved_index: Some(moved_index),
        captured,
    }
}

/// `make_move` を完全に巻き戻す (駒リストの順序も元通り)
pub fn unmake_move(position: &mut Position, undo: Undo) {
    let Some(moved_index) = undo.moved_index else {
        return;
    };

    position.swap_roles();
    position.relocate_mover(moved_index, undo.mv.from);
    if let Some((index, piece)) = undo.captured {
        position.restore_opponent(index, piece);
    }
}

/// 移動適用 (コピーを返す)
pub fn apply_move(position: &Position, mv: Move) -> Position {
    let mut next = position.clone();
    make_move(&mut next, mv);
    next
}
