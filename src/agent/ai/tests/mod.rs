use crate::game_repr::Position;


/// Parse a diagram that the test knows to be valid
pub fn diagram(d: &str) -> Position {
    Position::from_diagram(d).unwrap()
}
