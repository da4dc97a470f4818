// Depth-limited minimax over draughts turns with optional alpha-beta pruning
//
// Scores are the evaluator's ratio seen from the ROOT side, so lower is
// better for the root everywhere in the tree: nodes where the root side moves
// take the minimum, opponent nodes take the maximum.
//
// A capture chain is one turn. While a chain is open the same piece keeps
// moving, the ply does not advance and the side does not change. Once the
// piece has no further captures the opponent moves at the next ply.
//
// The best line for the root is recorded in a node table: one entry per
// root-side decision (the root itself and every capture continuation below
// it), each pointing at the entry of its best continuation.

use std::thread::{self, JoinHandle};

use super::config::{EngineConfig, Pruning};
use super::evaluation::{Evaluator, INF};
use super::generator::MoveGenerator;
use crate::game_repr::{Color, Move, MoveSet, Position, Square};

/// Moves of one root turn: a single quiet move, or every jump of a capture chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLine {
    pub moves: Vec<Move>,
}

impl SearchLine {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn is_capture(&self) -> bool {
        self.moves.iter().any(|m| m.is_capture())
    }

    /// Position after playing the whole line
    pub fn apply(&self, pos: &Position) -> Position {
        self.moves.iter().fold(*pos, |p, &mv| p.after(mv))
    }
}

impl IntoIterator for SearchLine {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub line: SearchLine,
    /// Root score, root perspective, lower is better
    pub score: f64,
    pub nodes_searched: u64,
}

/// One root-side decision in the best line
#[derive(Debug, Clone, Copy, Default)]
struct LineNode {
    best_move: Option<Move>,
    next: Option<usize>,
}

pub struct SearchEngine {
    generator: MoveGenerator,
    evaluator: Evaluator,
    config: EngineConfig,
    // per-search state
    root: Color,
    max_ply: u8,
    nodes: u64,
    table: Vec<LineNode>,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            generator: MoveGenerator::new(config.seed),
            evaluator: Evaluator::new(config.scoring),
            config,
            root: Color::White,
            max_ply: config.max_ply.max(1),
            nodes: 0,
            table: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn set_pruning(&mut self, pruning: Pruning) {
        self.config.pruning = pruning;
    }

    /// Side-wide moves in the engine's shuffled order
    pub fn moves_for_side(&mut self, pos: &Position, color: Color) -> MoveSet {
        self.generator.moves_for_side(pos, color)
    }

    /// Best turn for `color` searched `max_ply` plies deep.
    pub fn best_line(&mut self, pos: &Position, color: Color, max_ply: u8) -> SearchLine {
        self.search(pos, color, max_ply).line
    }

    /// Full search to `max_ply` (at least one ply).
    ///
    /// An empty line means `color` has no moves; the score is then [`INF`].
    pub fn search(&mut self, pos: &Position, color: Color, max_ply: u8) -> SearchResult {
        self.root = color;
        self.max_ply = max_ply.max(1);
        self.nodes = 0;
        self.table.clear();
        self.table.push(LineNode::default());

        let score = self.search_node(
            pos,
            color,
            0,
            None,
            f64::NEG_INFINITY,
            f64::INFINITY,
            Some(0),
        );
        let line = self.collect_line();

        log::debug!(
            "search {:?} ply={} pruning={:?}: score={:.4} nodes={} line=[{}]",
            color,
            self.max_ply,
            self.config.pruning,
            score,
            self.nodes,
            line.iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        );

        SearchResult {
            line,
            score,
            nodes_searched: self.nodes,
        }
    }

    /// Run the search to the configured depth on a worker thread. The engine
    /// is handed back together with the line so its RNG state carries over to
    /// the next turn.
    pub fn spawn_best_line(mut self, pos: Position, color: Color) -> JoinHandle<(Self, SearchLine)> {
        thread::spawn(move || {
            let max_ply = self.config.max_ply;
            let line = self.best_line(&pos, color, max_ply);
            (self, line)
        })
    }

    /// `active` is the piece continuing a capture chain, `record` the table
    /// entry this node fills (root-side decisions only).
    #[allow(clippy::too_many_arguments)]
    fn search_node(
        &mut self,
        pos: &Position,
        color: Color,
        ply: u8,
        active: Option<Square>,
        mut alpha: f64,
        mut beta: f64,
        record: Option<usize>,
    ) -> f64 {
        self.nodes += 1;

        if ply >= self.max_ply {
            return self.evaluator.score(pos, self.root);
        }

        let moves = match active {
            Some(sq) => self.generator.moves_for_piece(pos, sq),
            None => self.generator.moves_for_side(pos, color),
        };

        if active.is_some() && !moves.captures {
            // chain is over, hand the turn to the other side
            return self.search_node(pos, color.opposite(), ply + 1, None, alpha, beta, None);
        }

        let root_turn = color == self.root;
        if moves.is_empty() {
            return if root_turn { INF } else { 0.0 };
        }

        let mut best = if root_turn {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };

        for mv in moves {
            let next = pos.after(mv);
            let score = if mv.is_capture() {
                let child = record.map(|_| self.push_node());
                let score = self.search_node(&next, color, ply, Some(mv.to), alpha, beta, child);
                if root_turn && score < best {
                    self.record(record, mv, child);
                }
                score
            } else {
                let score =
                    self.search_node(&next, color.opposite(), ply + 1, None, alpha, beta, None);
                if root_turn && score < best {
                    self.record(record, mv, None);
                }
                score
            };

            if root_turn {
                best = best.min(score);
                beta = beta.min(score);
            } else {
                best = best.max(score);
                alpha = alpha.max(score);
            }

            if self.config.pruning.is_enabled() && alpha >= beta {
                log::trace!("cutoff at ply {} after {}", ply, mv);
                // push the bound past the window so the parent discards this branch
                return if root_turn { best - 1.0 } else { best + 1.0 };
            }
        }

        best
    }

    fn push_node(&mut self) -> usize {
        self.table.push(LineNode::default());
        self.table.len() - 1
    }

    fn record(&mut self, record: Option<usize>, mv: Move, next: Option<usize>) {
        if let Some(idx) = record {
            self.table[idx] = LineNode {
                best_move: Some(mv),
                next,
            };
        }
    }

    fn collect_line(&self) -> SearchLine {
        let mut moves = Vec::new();
        let mut idx = Some(0);

        while let Some(i) = idx {
            let node = self.table[i];
            match node.best_move {
                Some(mv) => moves.push(mv),
                None => break,
            }
            idx = node.next;
        }

        SearchLine { moves }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
