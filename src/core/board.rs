use super::piece::{Piece, PieceKind};
use super::r#move::Move;
use super::types::{Side, Square, BOARD_SIZE};

/// 盤面
///
/// 駒リストは色ではなく手番で分けて持つ。`mover_pieces` は常に `to_move` の駒。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    mover_pieces: Vec<Piece>,
    opponent_pieces: Vec<Piece>,
    to_move: Side,
}

impl Position {
    /// 駒のない盤面
    pub fn empty(to_move: Side) -> Self {
        Position {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            mover_pieces: Vec::new(),
            opponent_pieces: Vec::new(),
            to_move,
        }
    }

    /// 駒を置く。同じマスに既に駒があれば置き換える
    pub fn place(&mut self, kind: PieceKind, side: Side, square: Square) {
        if !square.is_on_board() {
            return;
        }
        if self.occupant(square).is_some() {
            self.remove_at(square);
        }
        let piece = Piece::new(kind, side, square);
        self.grid[square.row][square.col] = Some(piece);
        if side == self.to_move {
            self.mover_pieces.push(piece);
        } else {
            self.opponent_pieces.push(piece);
        }
    }

    fn remove_at(&mut self, square: Square) {
        self.grid[square.row][square.col] = None;
        self.mover_pieces.retain(|p| p.square != square);
        self.opponent_pieces.retain(|p| p.square != square);
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn mover_pieces(&self) -> &[Piece] {
        &self.mover_pieces
    }

    pub fn opponent_pieces(&self) -> &[Piece] {
        &self.opponent_pieces
    }

    /// マスの駒。盤外は常に None (パニックしない)
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.grid[square.row][square.col].as_ref()
    }

    /// 生の座標版。負の値や 8 以上でも None を返すだけ
    pub fn occupant_at(&self, row: i32, col: i32) -> Option<&Piece> {
        if row < 0 || col < 0 {
            return None;
        }
        self.occupant(Square::new(row as usize, col as usize))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// 手番側の全指し手 (駒リスト順 → 駒ごとの生成順)
    pub fn generate_moves(&self) -> Vec<Move> {
        crate::logic::generate_moves(self)
    }

    pub fn pieces_of(&self, side: Side) -> &[Piece] {
        if side == self.to_move {
            &self.mover_pieces
        } else {
            &self.opponent_pieces
        }
    }

    pub fn material(&self, side: Side) -> i32 {
        self.pieces_of(side)
            .iter()
            .map(|p| p.evaluation_weight())
            .sum()
    }

    pub fn pawn_count(&self, side: Side) -> usize {
        self.pieces_of(side)
            .iter()
            .filter(|p| p.kind == PieceKind::Pawn)
            .count()
    }

    /// 64文字の盤面表記 (8段目から1段目、各段は左から右)
    pub fn to_board_string(&self) -> String {
        let mut s = String::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in (0..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                s.push(match &self.grid[row][col] {
                    Some(piece) => piece.display_char(),
                    None => '.',
                });
            }
        }
        s
    }

    // --- Move Applicator から使う内部操作 ---

    pub(crate) fn mover_index_at(&self, square: Square) -> Option<usize> {
        self.mover_pieces.iter().position(|p| p.square == square)
    }

    pub(crate) fn opponent_index_at(&self, square: Square) -> Option<usize> {
        self.opponent_pieces.iter().position(|p| p.square == square)
    }

    pub(crate) fn take_opponent(&mut self, index: usize) -> Piece {
        let piece = self.opponent_pieces.remove(index);
        self.grid[piece.square.row][piece.square.col] = None;
        piece
    }

    pub(crate) fn restore_opponent(&mut self, index: usize, piece: Piece) {
        self.grid[piece.square.row][piece.square.col] = Some(piece);
        self.opponent_pieces.insert(index, piece);
    }

    pub(crate) fn relocate_mover(&mut self, index: usize, to: Square) {
        let from = self.mover_pieces[index].square;
        self.mover_pieces[index].square = to;
        self.grid[from.row][from.col] = None;
        self.grid[to.row][to.col] = Some(self.mover_pieces[index]);
    }

    /// 手番交代 (駒リストの役割も入れ替える)
    pub(crate) fn swap_roles(&mut self) {
        self.to_move = self.to_move.opponent();
        std::mem::swap(&mut self.mover_pieces, &mut self.opponent_pieces);
    }

    /// 同じ盤で手番だけを入れ替えた局面 (視点の反転)
    pub fn with_roles_swapped(&self) -> Position {
        let mut next = self.clone();
        next.swap_roles();
        next
    }

    /// 盤面と駒リストが一致しているか
    pub fn is_consistent(&self) -> bool {
        let listed = self.mover_pieces.len() + self.opponent_pieces.len();
        let on_grid = self.grid.iter().flatten().filter(|c| c.is_some()).count();
        listed == on_grid
            && self.mover_pieces.iter().all(|p| p.side == self.to_move)
            && self.opponent_pieces.iter().all(|p| p.side != self.to_move)
            && self
                .mover_pieces
                .iter()
                .chain(self.opponent_pieces.iter())
                .all(|p| self.occupant(p.square) == Some(p))
    }
}
