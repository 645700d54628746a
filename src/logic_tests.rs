#[cfg(test)]
mod tests {
    use crate::core::setup::default_position;
    use crate::core::{Move, PieceKind, Position, Side, Square};
    use crate::logic::{apply_move, generate_moves, make_move, unmake_move};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    fn destinations_from(position: &Position, from: Square) -> Vec<Square> {
        generate_moves(position)
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }

    #[test]
    fn test_rook_stops_on_capture_square() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Rook, Side::First, sq(0, 0));
        board.place(PieceKind::Pawn, Side::Second, sq(0, 3));

        let moves = destinations_from(&board, sq(0, 0));
        let along_row: Vec<Square> = moves.iter().copied().filter(|s| s.row == 0).collect();
        assert_eq!(along_row, vec![sq(0, 1), sq(0, 2), sq(0, 3)]);
        // 上方向は盤端まで7マス
        assert_eq!(moves.iter().filter(|s| s.col == 0).count(), 7);
    }

    #[test]
    fn test_rook_stops_before_own_piece() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Rook, Side::First, sq(3, 3));
        board.place(PieceKind::Bishop, Side::First, sq(3, 6));

        let right: Vec<Square> = destinations_from(&board, sq(3, 3))
            .into_iter()
            .filter(|s| s.row == 3 && s.col > 3)
            .collect();
        assert_eq!(right, vec![sq(3, 4), sq(3, 5)]);
    }

    #[test]
    fn test_rook_generation_order() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Rook, Side::First, sq(1, 1));
        let moves = destinations_from(&board, sq(1, 1));
        // 右6, 左1, 上6, 下1
        assert_eq!(moves.len(), 14);
        assert_eq!(moves[0], sq(1, 2));
        assert_eq!(moves[6], sq(1, 0));
        assert_eq!(moves[7], sq(2, 1));
        assert_eq!(moves[13], sq(0, 1));
    }

    #[test]
    fn test_bishop_stays_on_board() {
        for row in 0..8 {
            for col in 0..8 {
                let mut board = Position::empty(Side::Second);
                board.place(PieceKind::Bishop, Side::Second, sq(row, col));
                let moves = destinations_from(&board, sq(row, col));
                assert!(!moves.is_empty());
                assert!(moves.iter().all(|s| s.is_on_board()));
                assert!(moves.iter().all(|s| {
                    (s.row as i32 - row as i32).abs() == (s.col as i32 - col as i32).abs()
                }));
            }
        }
    }

    #[test]
    fn test_bishop_captures_and_blocks() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Bishop, Side::First, sq(0, 0));
        board.place(PieceKind::Rook, Side::Second, sq(2, 2));
        assert_eq!(destinations_from(&board, sq(0, 0)), vec![sq(1, 1), sq(2, 2)]);

        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Bishop, Side::First, sq(0, 0));
        board.place(PieceKind::Pawn, Side::First, sq(2, 2));
        assert_eq!(destinations_from(&board, sq(0, 0)), vec![sq(1, 1)]);
    }

    #[test]
    fn test_pawn_forward_and_captures() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Pawn, Side::First, sq(3, 3));
        board.place(PieceKind::Rook, Side::Second, sq(4, 4));
        board.place(PieceKind::Bishop, Side::Second, sq(4, 2));
        assert_eq!(
            destinations_from(&board, sq(3, 3)),
            vec![sq(4, 3), sq(4, 4), sq(4, 2)]
        );
    }

    #[test]
    fn test_pawn_blocked_and_no_forward_capture() {
        let mut board = Position::empty(Side::Second);
        board.place(PieceKind::Pawn, Side::Second, sq(5, 0));
        board.place(PieceKind::Pawn, Side::First, sq(4, 0));
        board.place(PieceKind::Pawn, Side::Second, sq(4, 1));
        // 前は塞がれ、右斜めは味方、左斜めは盤外
        assert!(destinations_from(&board, sq(5, 0)).is_empty());
    }

    #[test]
    fn test_pawn_on_last_row_has_no_moves() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Pawn, Side::First, sq(7, 0));
        assert!(destinations_from(&board, sq(7, 0)).is_empty());

        let mut board = Position::empty(Side::Second);
        board.place(PieceKind::Pawn, Side::Second, sq(0, 7));
        assert!(destinations_from(&board, sq(0, 7)).is_empty());
    }

    #[test]
    fn test_moves_follow_piece_list_order() {
        let board = default_position().unwrap();
        let moves = generate_moves(&board);
        // ポーン8つ (各1手) の後に両端のルーク (各1手)、ビショップは動けない
        assert_eq!(moves.len(), 8 + 1 + 1);
        for (i, mv) in moves.iter().take(8).enumerate() {
            assert_eq!(*mv, Move::new(sq(1, i), sq(2, i)));
        }
        assert_eq!(moves[8], Move::new(sq(0, 0), sq(0, 1)));
        assert_eq!(moves[9], Move::new(sq(0, 7), sq(0, 6)));
    }

    #[test]
    fn test_apply_capture_and_flip() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Rook, Side::First, sq(0, 0));
        board.place(PieceKind::Pawn, Side::Second, sq(0, 3));
        board.place(PieceKind::Bishop, Side::Second, sq(7, 7));

        let next = apply_move(&board, Move::new(sq(0, 0), sq(0, 3)));
        assert_eq!(next.to_move(), Side::Second);
        assert_eq!(next.mover_pieces().len(), 1);
        assert_eq!(next.mover_pieces()[0].kind, PieceKind::Bishop);
        assert_eq!(next.opponent_pieces()[0].square, sq(0, 3));
        assert!(next.is_empty(sq(0, 0)));
        assert_eq!(next.occupant(sq(0, 3)).unwrap().kind, PieceKind::Rook);
        assert!(next.is_consistent());
        // 元の盤面はそのまま
        assert_eq!(board.to_move(), Side::First);
        assert_eq!(board.opponent_pieces().len(), 2);
    }

    #[test]
    fn test_apply_then_inspect_random_games() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = default_position().unwrap();
        for _ in 0..60 {
            let moves = generate_moves(&board);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            let target = board.occupant(mv.to).copied();
            let next = apply_move(&board, mv);

            // 手番を戻して見ると、動いた駒は移動先にいて、取られた駒はどこにもない
            let back = next.with_roles_swapped();
            assert!(back
                .mover_pieces()
                .iter()
                .any(|p| p.square == mv.to && p.side == board.to_move()));
            if let Some(captured) = target {
                assert!(!back
                    .opponent_pieces()
                    .iter()
                    .chain(back.mover_pieces())
                    .any(|p| *p == captured));
                assert_eq!(back.opponent_pieces().len(), board.opponent_pieces().len() - 1);
            }
            assert!(next.is_consistent());
            board = next;
        }
    }

    #[test]
    fn test_unmake_restores_exactly() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = default_position().unwrap();
        for _ in 0..80 {
            let moves = generate_moves(&board);
            for &mv in &moves {
                let before = board.clone();
                let undo = make_move(&mut board, mv);
                assert_eq!(undo.captured(), before.occupant(mv.to).copied());
                assert_eq!(board, apply_move(&before, mv));
                unmake_move(&mut board, undo);
                assert_eq!(board, before);
                assert_eq!(generate_moves(&board), moves);
            }
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            make_move(&mut board, mv);
        }
    }

    #[test]
    fn test_make_move_ignores_empty_origin() {
        let mut board = Position::empty(Side::First);
        board.place(PieceKind::Rook, Side::First, sq(0, 0));
        let before = board.clone();
        let undo = make_move(&mut board, Move::new(sq(5, 5), sq(5, 6)));
        assert_eq!(board, before);
        unmake_move(&mut board, undo);
        assert_eq!(board, before);
    }
}
