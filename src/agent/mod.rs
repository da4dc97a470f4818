pub mod player;
pub use player::*;

pub mod bot_player;
pub use bot_player::*;

pub mod ai;
pub use ai::{EngineConfig, MatchConfig, SearchEngine, SearchLine, SearchResult};
