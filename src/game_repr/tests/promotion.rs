use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_white_man_promotes_on_row_zero() {
    let mut pos = empty_board();
    place_piece(&mut pos, 1, 2, Piece::WhiteMan);

    pos.mk_move(Move::new(Square::new(1, 2), Square::new(0, 1)));

    assert_eq!(pos.at(Square::new(0, 1)), Piece::WhiteKing);
    assert_eq!(pos.at(Square::new(1, 2)), Piece::Empty);
}

#[test]
fn test_black_man_promotes_on_row_seven() {
    let mut pos = empty_board();
    place_piece(&mut pos, 6, 1, Piece::BlackMan);

    pos.mk_move(Move::new(Square::new(6, 1), Square::new(7, 0)));

    assert_eq!(pos.at(Square::new(7, 0)), Piece::BlackKing);
}

#[test]
fn test_man_does_not_promote_elsewhere() {
    let mut pos = empty_board();
    place_piece(&mut pos, 2, 3, Piece::WhiteMan);

    pos.mk_move(Move::new(Square::new(2, 3), Square::new(1, 4)));

    assert_eq!(pos.at(Square::new(1, 4)), Piece::WhiteMan);
}

#[test]
fn test_promotion_on_capture() {
    let mut pos = empty_board();
    place_piece(&mut pos, 2, 3, Piece::WhiteMan);
    place_piece(&mut pos, 1, 4, Piece::BlackMan);

    let mv = pos.moves_for_piece(Square::new(2, 3)).as_slice()[0];
    pos.mk_move(mv);

    assert_eq!(pos.at(Square::new(0, 5)), Piece::WhiteKing);
    assert_eq!(pos.at(Square::new(1, 4)), Piece::Empty);
}

#[test]
fn test_man_promoted_mid_chain_continues_with_king_reach() {
    let mut pos = empty_board();
    place_piece(&mut pos, 2, 1, Piece::WhiteMan);
    place_piece(&mut pos, 1, 2, Piece::BlackMan);
    place_piece(&mut pos, 3, 6, Piece::BlackMan);

    let first = pos.moves_for_piece(Square::new(2, 1));
    assert!(first.captures);
    let next = pos.after(first.as_slice()[0]);
    assert_eq!(next.at(Square::new(0, 3)), Piece::WhiteKing);

    // (3,6) is three cells away: only a king reaches it
    let continuation = next.moves_for_piece(Square::new(0, 3));
    assert!(continuation.captures);
    assert!(has_move(continuation.as_slice(), (0, 3), (4, 7)));
}

#[test]
fn test_king_stays_king_on_far_row() {
    let mut pos = empty_board();
    place_piece(&mut pos, 1, 2, Piece::BlackKing);

    pos.mk_move(Move::new(Square::new(1, 2), Square::new(0, 1)));

    assert_eq!(pos.at(Square::new(0, 1)), Piece::BlackKing);
}
