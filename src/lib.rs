pub mod agent;
pub mod board;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::{EngineError, EngineResult};
