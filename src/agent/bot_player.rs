//! BotPlayer - computer player backed by the turn search
//!
//! The search runs on a worker thread via
//! [`SearchEngine::spawn_best_line`]; the engine comes back with the line so
//! the move-order RNG keeps its state from one turn to the next.

use std::panic;

use crate::agent::ai::{EngineConfig, SearchEngine};
use crate::agent::player::{GameResult, Player};
use crate::board::Board;
use crate::game_repr::{Color, Move};

pub struct BotPlayer {
    /// `None` only while a search is running
    engine: Option<SearchEngine>,
    config: EngineConfig,
    name: String,
}

impl BotPlayer {
    pub fn new(config: EngineConfig, name: String) -> Self {
        Self {
            engine: Some(SearchEngine::new(config)),
            config,
            name,
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let name = format!("Bot (ply {}, {})", config.max_ply, config.scoring);
        Self::new(config, name)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Player for BotPlayer {
    fn get_moves(&mut self, board: &Board, color: Color) -> Vec<Move> {
        let engine = self
            .engine
            .take()
            .unwrap_or_else(|| SearchEngine::new(self.config));

        let handle = engine.spawn_best_line(*board.position(), color);
        match handle.join() {
            Ok((engine, line)) => {
                self.engine = Some(engine);
                line.into_iter().collect()
            }
            Err(cause) => panic::resume_unwind(cause),
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("{}: game ended with {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
