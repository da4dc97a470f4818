mod moves;
mod piece;
mod position;
mod piece_moves;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use piece_moves::DIAGONALS;
