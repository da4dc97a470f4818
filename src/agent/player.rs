//! Player trait and associated types for draughts game agents.
//!
//! This module provides the core abstraction for entities that can provide
//! moves. The orchestrator asks the player whose turn it is for its moves and
//! applies them to the live [`Board`](crate::board::Board).
//!
//! # Turns are sequences
//!
//! A draughts turn is either one quiet move or a whole capture chain, so a
//! player answers with a `Vec<Move>`: the jumps of the chain in the order they
//! are made. An empty vector means the player has nothing to play.
//!
//! # Synchronous Design
//!
//! `get_moves()` blocks until the turn is decided. A bot may do its thinking
//! on another thread, but the orchestrator only sees the finished turn.

use crate::board::Board;
use crate::game_repr::{Color, Move};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black ran out of moves
    WhiteWins,
    /// White ran out of moves
    BlackWins,
    /// The turn limit was reached
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

/// Trait for entities that can provide draughts turns.
///
/// # Required Methods
///
/// Only `get_moves()` must be implemented.
///
/// ## `get_moves()`
/// - **Blocking**: may block while the player decides
/// - **Returns** the moves of one full turn for `color`, in order
/// - The moves must be legal on `board`; the board panics on a move onto an
///   occupied cell or from an empty one
///
/// ## `game_ended()`
/// - Default: Does nothing
///
/// ## `name()`
/// - Default: Returns "Player"
pub trait Player {
    /// Request the next turn from this player.
    fn get_moves(&mut self, board: &Board, color: Color) -> Vec<Move>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
