//! Error types for the draughts engine
//!
//! Only recoverable input problems are errors. Applying an illegal move to a
//! live board is a contract violation and panics instead.

use thiserror::Error;

/// Errors that can occur while building engine inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board diagram does not have exactly eight rows
    #[error("Invalid diagram: expected 8 rows, found {rows}")]
    RowCount { rows: usize },

    /// A diagram row does not describe exactly eight cells
    #[error("Invalid diagram: row {row} describes {cells} cells (must be 8)")]
    RowWidth { row: usize, cells: usize },

    /// Unknown character in a diagram
    #[error("Invalid diagram character '{ch}' in row {row}")]
    InvalidPieceChar { ch: char, row: usize },

    /// Unknown evaluation mode name
    #[error("Unknown scoring mode: {0} (expected Number or NumberAndPotential)")]
    UnknownScoringMode(String),

    /// Setting absent from the provider
    #[error("Missing setting {section}.{name}")]
    MissingSetting { section: String, name: String },

    /// Setting present but not parseable
    #[error("Invalid value {value:?} for setting {section}.{name}")]
    InvalidSetting {
        section: String,
        name: String,
        value: String,
    },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
