use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Board coordinate. `x` is the row (0 at black's home edge), `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Square offset by `(dx, dy)`, or `None` when it leaves the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Square> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A single step of a turn: a slide, or one jump of a capture chain.
///
/// Two moves are equal when source and destination agree; the captured
/// square is derived from the board and does not take part in identity.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to, captured: None }
    }

    pub fn capture(from: Square, to: Square, captured: Square) -> Self {
        Self { from, to, captured: Some(captured) }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(c) => write!(f, "{}x{}->{}", self.from, c, self.to),
            None => write!(f, "{}->{}", self.from, self.to),
        }
    }
}

/// Moves answered for one query (a single piece or a whole side).
///
/// `captures` is set when the set holds mandatory captures only.
#[derive(Debug, Clone, Default)]
pub struct MoveSet {
    pub moves: SmallVec<[Move; 16]>,
    pub captures: bool,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 16]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
