/// Side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row a man of this color promotes on.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Row step a man of this color moves by.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }
}

/// Cell content. The discriminants are the classic piece codes:
/// odd codes are white, even non-zero codes are black, codes above 2 are kings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Piece {
    #[default]
    Empty = 0,
    WhiteMan = 1,
    BlackMan = 2,
    WhiteKing = 3,
    BlackKing = 4,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        match color {
            Color::White => Piece::WhiteMan,
            Color::Black => Piece::BlackMan,
        }
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::White => Piece::WhiteKing,
            Color::Black => Piece::BlackKing,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn is_empty(&self) -> bool {
        *self == Piece::Empty
    }

    pub fn is_king(&self) -> bool {
        self.code() > 2
    }

    pub fn is_man(&self) -> bool {
        matches!(self, Piece::WhiteMan | Piece::BlackMan)
    }

    pub fn color(&self) -> Option<Color> {
        match self.code() {
            0 => None,
            c if c % 2 == 1 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True when both cells hold pieces of different colors.
    pub fn is_opponent_of(&self, other: Piece) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// The king this piece becomes on promotion. Kings and empty cells are unchanged.
    pub fn promoted(&self) -> Self {
        match self {
            Piece::WhiteMan => Piece::WhiteKing,
            Piece::BlackMan => Piece::BlackKing,
            other => *other,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Piece::Empty),
            'w' => Some(Piece::WhiteMan),
            'b' => Some(Piece::BlackMan),
            'W' => Some(Piece::WhiteKing),
            'B' => Some(Piece::BlackKing),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::WhiteMan => 'w',
            Piece::BlackMan => 'b',
            Piece::WhiteKing => 'W',
            Piece::BlackKing => 'B',
        }
    }
}
