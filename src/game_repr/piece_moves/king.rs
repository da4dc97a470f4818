use smallvec::SmallVec;

use super::super::{Move, Position, Square};
use super::DIAGONALS;

impl Position {
    /// Flying captures along the four rays.
    ///
    /// A ray stops at an own piece or at a second piece of any color. The
    /// first opposing piece met becomes the captured square and every empty
    /// cell behind it, up to the next occupied cell, is a landing.
    pub fn king_captures_into(&self, sq: Square, moves: &mut SmallVec<[Move; 16]>) {
        let king = self.at(sq);

        for &(dx, dy) in &DIAGONALS {
            let mut captured: Option<Square> = None;
            let mut cur = sq.offset(dx, dy);

            while let Some(cell) = cur {
                let piece = self.at(cell);
                if !piece.is_empty() {
                    if !piece.is_opponent_of(king) || captured.is_some() {
                        break;
                    }
                    captured = Some(cell);
                } else if let Some(over) = captured {
                    moves.push(Move::capture(sq, cell, over));
                }
                cur = cell.offset(dx, dy);
            }
        }
    }

    /// Every empty cell along each ray up to the first occupied one.
    pub fn king_quiet_into(&self, sq: Square, moves: &mut SmallVec<[Move; 16]>) {
        for &(dx, dy) in &DIAGONALS {
            let mut cur = sq.offset(dx, dy);
            while let Some(cell) = cur {
                if !self.at(cell).is_empty() {
                    break;
                }
                moves.push(Move::new(sq, cell));
                cur = cell.offset(dx, dy);
            }
        }
    }
}
