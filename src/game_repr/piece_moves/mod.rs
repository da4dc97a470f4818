pub mod man;
pub mod king;

use super::{Color, MoveSet, Position, Square};

/// The four diagonal directions as `(dx, dy)` steps.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Position {
    /// Legal moves of the piece standing on `sq`.
    ///
    /// If the piece has any capture the set holds captures only and is
    /// flagged as such; otherwise it holds its quiet moves. An empty square
    /// yields an empty set.
    pub fn moves_for_piece(&self, sq: Square) -> MoveSet {
        let mut set = MoveSet::new();
        let piece = self.at(sq);
        if piece.is_empty() {
            return set;
        }

        if piece.is_king() {
            self.king_captures_into(sq, &mut set.moves);
        } else {
            self.man_captures_into(sq, &mut set.moves);
        }

        if !set.moves.is_empty() {
            set.captures = true;
            return set;
        }

        if piece.is_king() {
            self.king_quiet_into(sq, &mut set.moves);
        } else {
            self.man_quiet_into(sq, &mut set.moves);
        }
        set
    }

    /// Legal moves of the whole side, in row-major piece order.
    ///
    /// Forced capture is applied side-wide: as soon as one piece can
    /// capture, only the capture sets of capturing pieces are kept.
    pub fn moves_for_side(&self, color: Color) -> MoveSet {
        let mut set = MoveSet::new();

        for sq in self.squares_of(color) {
            let piece_set = self.moves_for_piece(sq);
            if piece_set.captures && !set.captures {
                set.captures = true;
                set.moves.clear();
            }
            if piece_set.captures == set.captures {
                set.moves.extend(piece_set.moves);
            }
        }
        set
    }

    /// Number of complete turns reachable in `depth` plies, with a capture
    /// chain counted as a single turn.
    pub fn perft(&self, color: Color, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }

        self.moves_for_side(color)
            .iter()
            .map(|&mv| {
                let next = self.after(mv);
                if mv.is_capture() {
                    next.perft_chain(mv.to, color, depth)
                } else {
                    next.perft(color.opposite(), depth - 1)
                }
            })
            .sum()
    }

    fn perft_chain(&self, sq: Square, color: Color, depth: u8) -> u64 {
        let set = self.moves_for_piece(sq);
        if !set.captures {
            return self.perft(color.opposite(), depth - 1);
        }
        set.iter()
            .map(|&mv| self.after(mv).perft_chain(mv.to, color, depth))
            .sum()
    }

    /// Whether the piece on `sq` has at least one capture.
    pub fn can_capture(&self, sq: Square) -> bool {
        self.moves_for_piece(sq).captures
    }
}
