use super::*;
use crate::error::EngineError;

// ==================== DIAGRAM PARSING TESTS ====================

#[test]
fn test_start_diagram_matches_default() {
    let parsed = Position::from_diagram(Position::start_diagram()).unwrap();
    assert_eq!(parsed, Position::default());
    assert_eq!(parsed.count(Piece::WhiteMan), 12);
    assert_eq!(parsed.count(Piece::BlackMan), 12);

    // dots are accepted for empty cells too
    let dotted = Position::from_diagram(".b.b.b.b/b.b.b.b./.b.b.b.b/8/8/w.w.w.w./.w.w.w.w/w.w.w.w.").unwrap();
    assert_eq!(dotted, parsed);
}

#[test]
fn test_diagram_round_trip() {
    let pos = Position::from_diagram("8/1B6/8/3w4/4b3/8/6W1/8").unwrap();
    assert_eq!(pos.at(Square::new(1, 1)), Piece::BlackKing);
    assert_eq!(pos.at(Square::new(3, 3)), Piece::WhiteMan);
    assert_eq!(pos.at(Square::new(4, 4)), Piece::BlackMan);
    assert_eq!(pos.at(Square::new(6, 6)), Piece::WhiteKing);

    assert_eq!(pos.to_diagram(), "8/1B6/8/3w4/4b3/8/6W1/8");
    assert_eq!(Position::from_diagram(&Position::default().to_diagram()).unwrap(), Position::default());
    assert_eq!(Position::default().to_diagram(), Position::start_diagram());
}

#[test]
fn test_diagram_wrong_row_count() {
    let err = Position::from_diagram("8/8/8").unwrap_err();
    assert_eq!(err, EngineError::RowCount { rows: 3 });
}

#[test]
fn test_diagram_wrong_row_width() {
    let err = Position::from_diagram("8/8/8/8/8/8/8/w6").unwrap_err();
    assert_eq!(err, EngineError::RowWidth { row: 7, cells: 7 });
}

#[test]
fn test_diagram_invalid_character() {
    let err = Position::from_diagram("8/8/8/3q4/8/8/8/8").unwrap_err();
    assert_eq!(err, EngineError::InvalidPieceChar { ch: 'q', row: 3 });
}
