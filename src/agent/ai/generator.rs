// Move generator with engine-owned randomness
//
// Per-piece generation is deterministic and lives on Position. The side-wide
// query is shuffled with a seeded RNG so the bot does not always play the
// first of several equal moves; a fixed seed makes the order reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

use super::config::SeedPolicy;
use crate::game_repr::{Color, MoveSet, Position, Square};

pub struct MoveGenerator {
    rng: StdRng,
}

impl MoveGenerator {
    pub fn new(seed: SeedPolicy) -> Self {
        let seed = match seed {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Time => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        log::trace!("move generator seeded with {}", seed);

        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Moves of the single piece on `sq` (captures only, if it has any).
    pub fn moves_for_piece(&self, pos: &Position, sq: Square) -> MoveSet {
        pos.moves_for_piece(sq)
    }

    /// Moves of the whole side under the forced-capture rule, shuffled.
    pub fn moves_for_side(&mut self, pos: &Position, color: Color) -> MoveSet {
        let mut set = pos.moves_for_side(color);
        set.moves.as_mut_slice().shuffle(&mut self.rng);
        set
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(SeedPolicy::Fixed(0))
    }
}
