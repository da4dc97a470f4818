use super::*;
use crate::error::{EngineError, EngineResult};
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND MOVE APPLICATION
 */

pub const BOARD_SIZE: usize = 8;

const START_DIAGRAM: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1";

/// Board snapshot. A plain value: copying it copies every cell, so search
/// branches never share state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub cells: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Position {
    /// Standard opening: black men on rows 0-2, white men on rows 5-7,
    /// on the cells where `row + col` is odd.
    fn default() -> Self {
        let mut cells = [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (x, row) in cells.iter_mut().enumerate() {
            for (y, cell) in row.iter_mut().enumerate() {
                if (x + y) % 2 == 1 {
                    if x < 3 {
                        *cell = Piece::BlackMan;
                    } else if x > 4 {
                        *cell = Piece::WhiteMan;
                    }
                }
            }
        }
        Self { cells }
    }
}

impl Position {
    pub fn empty() -> Self {
        Self {
            cells: [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parse a diagram: eight `/`-separated rows from row 0 to row 7.
    /// `w`/`b` are men, `W`/`B` kings, `.` an empty cell and a digit
    /// a run of empty cells.
    pub fn from_diagram(diagram: &str) -> EngineResult<Position> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::RowCount { rows: rows.len() });
        }

        let mut pos = Position::empty();
        for (x, row) in rows.iter().enumerate() {
            let mut y = 0usize;
            for c in row.chars() {
                match c {
                    '1'..='8' => {
                        y += c.to_digit(10).unwrap_or(0) as usize;
                    }
                    _ => {
                        let piece = Piece::from_char(c)
                            .ok_or(EngineError::InvalidPieceChar { ch: c, row: x })?;
                        if y < BOARD_SIZE {
                            pos.cells[x][y] = piece;
                        }
                        y += 1;
                    }
                }
            }
            if y != BOARD_SIZE {
                return Err(EngineError::RowWidth { row: x, cells: y });
            }
        }

        Ok(pos)
    }

    /// Inverse of [`Position::from_diagram`], with empty runs folded into digits.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for (x, row) in self.cells.iter().enumerate() {
            if x > 0 {
                out.push('/');
            }
            let mut empties = 0;
            for piece in row {
                if piece.is_empty() {
                    empties += 1;
                    continue;
                }
                if empties > 0 {
                    out.push_str(&empties.to_string());
                    empties = 0;
                }
                out.push(piece.to_char());
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
        }
        out
    }

    pub fn start_diagram() -> &'static str {
        START_DIAGRAM
    }

    #[inline]
    pub fn at(&self, sq: Square) -> Piece {
        self.cells[sq.x as usize][sq.y as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.x as usize][sq.y as usize] = piece;
    }

    /// Squares holding a piece of `color`, row-major.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..BOARD_SIZE as u8)
            .flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Square::new(x, y)))
            .filter(move |&sq| self.at(sq).is(color))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&p| p == piece)
            .count()
    }

    /// Apply a move in place: the captured piece (if any) is removed and a
    /// man landing on its promotion row is crowned as part of the move.
    ///
    /// No legality checks; callers only pass generator output here.
    pub fn mk_move(&mut self, mv: Move) {
        if let Some(captured) = mv.captured {
            self.set(captured, Piece::Empty);
        }

        let mut piece = self.at(mv.from);
        if let Some(color) = piece.color() {
            if piece.is_man() && mv.to.x == color.promotion_row() {
                piece = piece.promoted();
            }
        }

        self.set(mv.to, piece);
        self.set(mv.from, Piece::Empty);
    }

    /// Copy-on-branch application used by the search.
    pub fn after(&self, mv: Move) -> Position {
        let mut next = *self;
        next.mk_move(mv);
        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|p| p.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_diagram())
    }
}
