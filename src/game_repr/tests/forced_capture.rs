use super::*;

// ==================== FORCED CAPTURE TESTS ====================

#[test]
fn test_starting_position_white_has_seven_quiet_moves() {
    let pos = Position::default();

    let set = pos.moves_for_side(Color::White);

    assert!(!set.captures);
    assert_eq!(set.len(), 7);
    assert_eq!(count_captures(set.as_slice()), 0);
    // every move starts on row 5 and ends on row 4
    assert!(set.iter().all(|m| m.from.x == 5 && m.to.x == 4));
}

#[test]
fn test_starting_position_black_has_seven_quiet_moves() {
    let pos = Position::default();

    let set = pos.moves_for_side(Color::Black);

    assert_eq!(set.len(), 7);
    assert!(set.iter().all(|m| m.from.x == 2 && m.to.x == 3));
}

#[test]
fn test_single_capturing_piece_suppresses_quiet_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, 5, 2, Piece::WhiteMan);
    place_piece(&mut pos, 5, 6, Piece::WhiteMan);
    place_piece(&mut pos, 6, 1, Piece::WhiteMan);
    place_piece(&mut pos, 7, 4, Piece::WhiteMan);
    place_piece(&mut pos, 4, 3, Piece::BlackMan);
    place_piece(&mut pos, 0, 1, Piece::BlackMan);

    let set = pos.moves_for_side(Color::White);

    assert!(set.captures);
    assert_eq!(set.len(), 1);
    assert!(has_move(set.as_slice(), (5, 2), (3, 4)));
    // quiet moves exist for the other men but are excluded
    assert!(!pos.moves_for_piece(Square::new(5, 6)).is_empty());
}

#[test]
fn test_all_capturing_pieces_are_kept() {
    let mut pos = empty_board();
    place_piece(&mut pos, 5, 0, Piece::WhiteMan);
    place_piece(&mut pos, 4, 1, Piece::BlackMan);
    place_piece(&mut pos, 7, 6, Piece::WhiteKing);
    place_piece(&mut pos, 5, 4, Piece::BlackMan);
    place_piece(&mut pos, 6, 1, Piece::WhiteMan);

    let set = pos.moves_for_side(Color::White);

    // one jump for the man, four landings behind (5,4) for the king
    assert!(set.captures);
    assert_eq!(set.len(), 5);
    assert!(set.iter().all(|m| m.is_capture()));
    assert!(has_move(set.as_slice(), (5, 0), (3, 2)));
    assert!(has_move(set.as_slice(), (7, 6), (1, 0)));
    assert!(set.iter().all(|m| m.from != Square::new(6, 1)));
}

#[test]
fn test_no_moves_when_side_is_blocked() {
    let mut pos = empty_board();
    place_piece(&mut pos, 0, 1, Piece::BlackMan);
    place_piece(&mut pos, 1, 0, Piece::WhiteMan);
    place_piece(&mut pos, 1, 2, Piece::WhiteMan);
    place_piece(&mut pos, 2, 3, Piece::WhiteMan);

    let set = pos.moves_for_side(Color::Black);

    assert!(set.is_empty());
    assert!(!set.captures);
}

#[test]
fn test_side_without_pieces_has_no_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, 4, 3, Piece::WhiteKing);

    assert!(pos.moves_for_side(Color::Black).is_empty());
    assert!(!pos.moves_for_side(Color::White).is_empty());
}
