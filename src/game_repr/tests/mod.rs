use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, x: u8, y: u8, piece: Piece) {
    pos.set(Square::new(x, y), piece);
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: (u8, u8), to: (u8, u8)) -> bool {
    moves
        .iter()
        .any(|m| m.from == Square::new(from.0, from.1) && m.to == Square::new(to.0, to.1))
}

/// Helper function to count captures in a move list
pub fn count_captures(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.is_capture()).count()
}

// ==================== TEST MODULES ====================

mod forced_capture;
mod promotion;
mod diagram_parsing;
mod perft;
