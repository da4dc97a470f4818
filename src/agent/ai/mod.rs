// AI Agent - depth-limited minimax with optional alpha-beta pruning
//
// Key features:
// - Capture chains searched as a single turn
// - Material-ratio evaluation (lower is better for the side it is computed for)
// - Seeded move shuffling: reproducible with a fixed seed, varied otherwise
// - Search can run on a worker thread and hand the engine back afterwards

pub mod config;
mod evaluation;
mod generator;
mod search;

#[cfg(test)]
mod tests;

pub use config::{
    EngineConfig, MatchConfig, Pruning, ScoringMode, SeedPolicy, Settings, DEFAULT_MAX_PLY,
    DEFAULT_MAX_TURNS,
};
pub use evaluation::{Evaluator, INF};
pub use generator::MoveGenerator;
pub use search::{SearchEngine, SearchLine, SearchResult};
