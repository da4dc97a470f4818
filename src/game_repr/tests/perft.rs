use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(Color::White, 1), 7);
    assert_eq!(pos.perft(Color::Black, 1), 7);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(Color::White, 2), 49);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(Color::White, 3), 302);
}

#[test]
fn test_perft_counts_chain_as_one_turn() {
    let mut pos = Position::empty();
    pos.set(Square::new(6, 1), Piece::WhiteMan);
    pos.set(Square::new(5, 2), Piece::BlackMan);
    pos.set(Square::new(3, 4), Piece::BlackMan);

    // (6,1)x(5,2)->(4,3) then x(3,4)->(2,5): one turn
    assert_eq!(pos.perft(Color::White, 1), 1);
}
