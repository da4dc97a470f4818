//! Match lifecycle and turn coordination.
//!
//! The [`Orchestrator`] owns the live [`Board`] and one [`Player`] per side
//! and runs the turn loop until the game is decided:
//!
//! ```text
//! [Start] -> [Side has moves?] --no--> [Opponent wins]
//!              |yes
//!        [Request turn] -> [Apply each move, counting captures]
//!              -> [Switch side] -> [Turn limit?] --yes--> [Draw]
//! ```
//!
//! White moves first. A turn is one quiet move or a whole capture chain.

use std::time::Instant;

use crate::agent::ai::{MatchConfig, SeedPolicy};
use crate::agent::bot_player::BotPlayer;
use crate::agent::player::{GameResult, Player};
use crate::board::Board;
use crate::game_repr::{Color, Position};

pub struct Orchestrator {
    /// Authoritative game state
    board: Board,

    /// Move-order seed of the board
    seed: SeedPolicy,

    /// Tuple represents (white_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Turns (one side's move each) after which the game is a draw
    max_turns: u32,

    /// Turns played so far
    turns_played: u32,

    /// Result of the game once it has ended
    game_result: Option<GameResult>,
}

impl Orchestrator {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>, max_turns: u32) -> Self {
        Self {
            board: Board::new(SeedPolicy::Fixed(0)),
            seed: SeedPolicy::Fixed(0),
            players: (white, black),
            max_turns,
            turns_played: 0,
            game_result: None,
        }
    }

    /// Bot against bot, each side configured from `config`.
    pub fn bot_match(config: &MatchConfig) -> Self {
        let white = BotPlayer::new(config.white, "White bot".to_string());
        let black = BotPlayer::new(config.black, "Black bot".to_string());

        let mut orchestrator = Self::new(Box::new(white), Box::new(black), config.max_turns);
        orchestrator.seed = config.white.seed;
        orchestrator.board = Board::new(orchestrator.seed);
        orchestrator
    }

    /// Start from `position` instead of the standard opening. The board
    /// keeps its seed.
    pub fn with_position(mut self, position: Position) -> Self {
        self.board = Board::from_position(position, self.seed);
        self
    }

    pub fn seed(&self) -> SeedPolicy {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    /// Play the game to the end and return its result.
    pub fn play(&mut self) -> GameResult {
        let start = Instant::now();
        let mut current = Color::White;

        let result = loop {
            if self.turns_played >= self.max_turns {
                break GameResult::Draw;
            }
            if self.board.moves_for(current).is_empty() {
                break GameResult::from_winner(current.opposite());
            }

            if !self.play_turn(current) {
                log::info!("{:?} returned an empty turn", current);
                break GameResult::from_winner(current.opposite());
            }

            self.turns_played += 1;
            current = current.opposite();
        };

        log::info!(
            "game over after {} turns in {} ms: {:?}",
            self.turns_played,
            start.elapsed().as_millis(),
            result
        );

        self.game_result = Some(result);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
        result
    }

    /// Ask `color`'s player for a turn and apply it. Returns false if the
    /// player had nothing to play.
    fn play_turn(&mut self, color: Color) -> bool {
        let turn_start = Instant::now();

        let board = &self.board;
        let player = match color {
            Color::White => self.players.0.as_mut(),
            Color::Black => self.players.1.as_mut(),
        };
        let moves = player.get_moves(board, color);
        let name = player.name().to_string();
        if moves.is_empty() {
            return false;
        }

        self.board.begin_turn();
        let mut beat_series = 0;
        for mv in &moves {
            if mv.is_capture() {
                beat_series += 1;
            }
            self.board.move_piece(*mv, beat_series);
        }

        log::info!(
            "turn {} {} ({:?}): {} [{} ms]",
            self.turns_played + 1,
            name,
            color,
            moves
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            turn_start.elapsed().as_millis()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::EngineConfig;
    use crate::game_repr::Move;

    /// Plays the first legal move it is offered, never chains.
    struct FirstMove;

    impl Player for FirstMove {
        fn get_moves(&mut self, board: &Board, color: Color) -> Vec<Move> {
            board
                .position()
                .moves_for_side(color)
                .as_slice()
                .first()
                .copied()
                .into_iter()
                .collect()
        }
    }

    fn bots(max_ply: u8) -> MatchConfig {
        MatchConfig {
            white: EngineConfig::fixed(max_ply),
            black: EngineConfig::fixed(max_ply),
            max_turns: 40,
        }
    }

    #[test]
    fn test_side_without_moves_loses() {
        let position = Position::from_diagram("8/8/8/3b4/8/8/8/8").unwrap();
        let mut orchestrator =
            Orchestrator::new(Box::new(FirstMove), Box::new(FirstMove), 10).with_position(position);

        assert_eq!(orchestrator.play(), GameResult::BlackWins);
        assert_eq!(orchestrator.turns_played(), 0);
    }

    #[test]
    fn test_turn_limit_is_a_draw() {
        let mut orchestrator = Orchestrator::new(Box::new(FirstMove), Box::new(FirstMove), 2);

        assert_eq!(orchestrator.play(), GameResult::Draw);
        assert_eq!(orchestrator.turns_played(), 2);
        assert_eq!(orchestrator.game_result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_capture_chain_applied_in_one_turn() {
        // white double jump wipes out black except the man on (0,7)
        let position = Position::from_diagram("7b/8/3b4/8/1b6/w7/8/8").unwrap();
        let config = bots(1);
        let mut orchestrator = Orchestrator::bot_match(&config).with_position(position);
        orchestrator.max_turns = 1;

        assert_eq!(orchestrator.play(), GameResult::Draw);
        assert_eq!(orchestrator.board().beat_series(), 2);
        assert_eq!(orchestrator.board().pieces_left(Color::Black), 1);
    }

    #[test]
    fn test_custom_position_keeps_match_seed() {
        let mut config = bots(1);
        config.white.seed = SeedPolicy::Fixed(17);
        let position = Position::from_diagram("7b/8/3b4/8/1b6/w7/8/8").unwrap();

        let orchestrator = Orchestrator::bot_match(&config).with_position(position);
        assert_eq!(orchestrator.seed(), SeedPolicy::Fixed(17));
        assert_eq!(orchestrator.board().position(), &position);

        let plain = Orchestrator::new(Box::new(FirstMove), Box::new(FirstMove), 5);
        assert_eq!(plain.with_position(position).seed(), SeedPolicy::Fixed(0));
    }

    #[test]
    fn test_bot_match_terminates() {
        let mut orchestrator = Orchestrator::bot_match(&bots(2));
        let result = orchestrator.play();

        assert!(orchestrator.turns_played() <= 40);
        if orchestrator.turns_played() < 40 {
            assert_ne!(result, GameResult::Draw);
        }
    }
}
