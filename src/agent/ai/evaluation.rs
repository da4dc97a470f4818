// Position evaluation function
//
// Returns the ratio opponent material / own material for the perspective
// side. LOWER IS BETTER for that side: 0 means the opponent has nothing left,
// INF means the perspective side has nothing left.

use super::config::ScoringMode;
use crate::game_repr::{Color, Piece, Position};

/// Loss sentinel, larger than any reachable ratio
pub const INF: f64 = 1e9;

/// Bonus per row a man has advanced from its home edge
const POTENTIAL_BONUS: f64 = 0.05;

/// Material weights for one scoring mode
#[derive(Debug, Clone, Copy, PartialEq)]
struct Weights {
    man: f64,
    king: f64,
    potential: f64,
}

impl Weights {
    fn of(mode: ScoringMode) -> Self {
        match mode {
            ScoringMode::Number => Weights {
                man: 1.0,
                king: 4.0,
                potential: 0.0,
            },
            ScoringMode::NumberAndPotential => Weights {
                man: 1.0,
                king: 5.0,
                potential: POTENTIAL_BONUS,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    mode: ScoringMode,
}

impl Evaluator {
    pub fn new(mode: ScoringMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Static score of `pos` from `perspective`'s point of view.
    pub fn score(&self, pos: &Position, perspective: Color) -> f64 {
        let (white, black) = self.material(pos);
        let (own, opp) = match perspective {
            Color::White => (white, black),
            Color::Black => (black, white),
        };

        if own == 0.0 {
            return INF;
        }
        if opp == 0.0 {
            return 0.0;
        }
        opp / own
    }

    /// Weighted material of (white, black)
    fn material(&self, pos: &Position) -> (f64, f64) {
        let w = Weights::of(self.mode);
        let mut white = 0.0;
        let mut black = 0.0;

        for (x, row) in pos.cells.iter().enumerate() {
            for piece in row {
                match piece {
                    Piece::WhiteMan => white += w.man + w.potential * (7 - x) as f64,
                    Piece::BlackMan => black += w.man + w.potential * x as f64,
                    Piece::WhiteKing => white += w.king,
                    Piece::BlackKing => black += w.king,
                    Piece::Empty => {}
                }
            }
        }

        (white, black)
    }
}
