use crate::agent::ai::{MoveGenerator, SeedPolicy};
use crate::game_repr::{Color, Move, MoveSet, Piece, Position, Square};

/// Board component: the authoritative position of a running game.
///
/// The Board wraps the core game state ([`Position`]) together with the
/// move generator used to answer "what can this side play" and the capture
/// counter of the turn in progress.
///
/// # Applying moves
///
/// [`Board::move_piece`] is the only way the live position changes. Unlike
/// [`Position::mk_move`], which trusts its caller, it checks the move against
/// the board and **panics** when the source is empty or the destination is
/// occupied. Both can only happen if the caller ignored the generator, so
/// this is treated as a bug rather than a recoverable error.
///
/// # Usage
///
/// ```rust,ignore
/// let mut board = Board::new(SeedPolicy::Fixed(0));
///
/// let moves = board.moves_for(Color::White);
/// let mv = moves.as_slice()[0];
/// board.move_piece(mv, 0);
/// ```
pub struct Board {
    /// Current position
    position: Position,

    /// Side-wide queries are answered in this generator's shuffled order
    generator: MoveGenerator,

    /// Captures made so far in the current turn
    beat_series: u32,

    /// Last applied move
    last_move: Option<Move>,
}

impl Board {
    /// Board with the standard opening position
    pub fn new(seed: SeedPolicy) -> Self {
        Self::from_position(Position::default(), seed)
    }

    pub fn from_position(position: Position, seed: SeedPolicy) -> Self {
        Self {
            position,
            generator: MoveGenerator::new(seed),
            beat_series: 0,
            last_move: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.position.at(sq)
    }

    pub fn beat_series(&self) -> u32 {
        self.beat_series
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Number of pieces (men and kings) `color` has left
    pub fn pieces_left(&self, color: Color) -> usize {
        self.position.count(Piece::man(color)) + self.position.count(Piece::king(color))
    }

    /// Legal moves of `color` under the forced-capture rule
    pub fn moves_for(&mut self, color: Color) -> MoveSet {
        self.generator.moves_for_side(&self.position, color)
    }

    /// Legal continuation of the piece on `sq`
    pub fn moves_for_piece(&self, sq: Square) -> MoveSet {
        self.generator.moves_for_piece(&self.position, sq)
    }

    /// Start a new turn: the capture counter goes back to zero.
    pub fn begin_turn(&mut self) {
        self.beat_series = 0;
    }

    /// Apply `mv`, removing the captured piece and promoting a man that
    /// reaches its last row. `beat_series` is the number of captures made
    /// in this turn including this move.
    ///
    /// # Panics
    ///
    /// If the source cell is empty or the destination cell is occupied.
    pub fn move_piece(&mut self, mv: Move, beat_series: u32) {
        if !self.position.at(mv.to).is_empty() {
            panic!("final position {} is not empty, can't move", mv.to);
        }
        if self.position.at(mv.from).is_empty() {
            panic!("begin position {} is empty, can't move", mv.from);
        }

        self.position.mk_move(mv);
        self.beat_series = beat_series;
        self.last_move = Some(mv);
    }
}
