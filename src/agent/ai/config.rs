//! Engine configuration
//!
//! Settings come from an outside provider by `(section, name)` lookup, the
//! same keys the game's settings file uses (`Bot.BotScoringType`,
//! `Bot.Optimization`, `Bot.NoRandom`, `Bot.WhiteBotLevel`, ...). The engine
//! never touches the storage itself.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::game_repr::Color;

/// Default search depth in plies
pub const DEFAULT_MAX_PLY: u8 = 4;

/// Default turn limit of a match before it is declared a draw
pub const DEFAULT_MAX_TURNS: u32 = 120;

/// Static evaluation flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Material only, a king worth four men
    #[default]
    Number,
    /// Material plus a small bonus for how far each man has advanced,
    /// a king worth five men
    NumberAndPotential,
}

impl ScoringMode {
    pub fn name(&self) -> &'static str {
        match self {
            ScoringMode::Number => "Number",
            ScoringMode::NumberAndPotential => "NumberAndPotential",
        }
    }
}

impl FromStr for ScoringMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Number" => Ok(ScoringMode::Number),
            "NumberAndPotential" => Ok(ScoringMode::NumberAndPotential),
            other => Err(EngineError::UnknownScoringMode(other.to_string())),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alpha-beta toggle. Level `"O0"` searches exhaustively; any other level prunes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    Disabled,
    #[default]
    Enabled,
}

impl Pruning {
    pub fn from_level(level: &str) -> Self {
        if level.trim() == "O0" {
            Pruning::Disabled
        } else {
            Pruning::Enabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self == Pruning::Enabled
    }
}

/// How the move-order RNG is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Seed from the wall clock (seconds since the epoch)
    #[default]
    Time,
    /// Fixed seed, reproducible move order
    Fixed(u64),
}

impl SeedPolicy {
    /// `NoRandom` in the settings means seed zero.
    pub fn from_no_random(no_random: bool) -> Self {
        if no_random {
            SeedPolicy::Fixed(0)
        } else {
            SeedPolicy::Time
        }
    }
}

/// Everything one search engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_ply: u8,
    pub scoring: ScoringMode,
    pub pruning: Pruning,
    pub seed: SeedPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ply: DEFAULT_MAX_PLY,
            scoring: ScoringMode::default(),
            pruning: Pruning::default(),
            seed: SeedPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Deterministic configuration, mostly for tests and benchmarks.
    pub fn fixed(max_ply: u8) -> Self {
        Self {
            max_ply,
            seed: SeedPolicy::Fixed(0),
            ..Self::default()
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Build the bot configuration of `color` from a settings provider.
    pub fn from_settings(settings: &dyn Settings, color: Color) -> EngineResult<Self> {
        let level_key = match color {
            Color::White => "WhiteBotLevel",
            Color::Black => "BlackBotLevel",
        };

        let max_ply: u8 = parse_setting(settings, "Bot", level_key)?;
        let scoring: ScoringMode = required(settings, "Bot", "BotScoringType")?.parse()?;
        let pruning = Pruning::from_level(&required(settings, "Bot", "Optimization")?);
        let no_random = match settings.setting("Bot", "NoRandom") {
            Some(value) => parse_flag("Bot", "NoRandom", &value)?,
            None => false,
        };

        Ok(Self {
            max_ply,
            scoring,
            pruning,
            seed: SeedPolicy::from_no_random(no_random),
        })
    }
}

/// Configuration of a bot-vs-bot match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub white: EngineConfig,
    pub black: EngineConfig,
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            white: EngineConfig::default(),
            black: EngineConfig::default(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl MatchConfig {
    pub fn from_settings(settings: &dyn Settings) -> EngineResult<Self> {
        Ok(Self {
            white: EngineConfig::from_settings(settings, Color::White)?,
            black: EngineConfig::from_settings(settings, Color::Black)?,
            max_turns: parse_setting(settings, "Game", "MaxNumTurns")?,
        })
    }

    pub fn for_color(&self, color: Color) -> EngineConfig {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Name-based settings lookup. Values are returned in their textual form.
pub trait Settings {
    fn setting(&self, section: &str, name: &str) -> Option<String>;
}

/// Keys are `"Section.Name"`.
impl Settings for HashMap<String, String> {
    fn setting(&self, section: &str, name: &str) -> Option<String> {
        self.get(&format!("{}.{}", section, name)).cloned()
    }
}

fn required(settings: &dyn Settings, section: &str, name: &str) -> EngineResult<String> {
    settings
        .setting(section, name)
        .ok_or_else(|| EngineError::MissingSetting {
            section: section.to_string(),
            name: name.to_string(),
        })
}

fn parse_setting<T: FromStr>(settings: &dyn Settings, section: &str, name: &str) -> EngineResult<T> {
    let value = required(settings, section, name)?;
    value.trim().parse().map_err(|_| EngineError::InvalidSetting {
        section: section.to_string(),
        name: name.to_string(),
        value,
    })
}

fn parse_flag(section: &str, name: &str, value: &str) -> EngineResult<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(EngineError::InvalidSetting {
            section: section.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
