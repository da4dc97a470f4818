use smallvec::SmallVec;

use super::super::{Move, Position, Square};
use super::DIAGONALS;

impl Position {
    /// Jumps over an adjacent opposing piece onto the empty cell behind it.
    /// Men capture in all four directions.
    pub fn man_captures_into(&self, sq: Square, moves: &mut SmallVec<[Move; 16]>) {
        let piece = self.at(sq);

        for &(dx, dy) in &DIAGONALS {
            let (Some(over), Some(land)) = (sq.offset(dx, dy), sq.offset(2 * dx, 2 * dy)) else {
                continue;
            };
            if !self.at(land).is_empty() || !self.at(over).is_opponent_of(piece) {
                continue;
            }
            moves.push(Move::capture(sq, land, over));
        }
    }

    /// One step forward diagonally onto an empty cell.
    pub fn man_quiet_into(&self, sq: Square, moves: &mut SmallVec<[Move; 16]>) {
        let Some(color) = self.at(sq).color() else {
            return;
        };
        let dx = color.forward();

        for dy in [-1i8, 1] {
            if let Some(target) = sq.offset(dx, dy) {
                if self.at(target).is_empty() {
                    moves.push(Move::new(sq, target));
                }
            }
        }
    }
}
