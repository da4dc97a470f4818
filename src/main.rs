use std::collections::HashMap;
use std::process::ExitCode;

use draughts_engine::agent::ai::{MatchConfig, DEFAULT_MAX_PLY, DEFAULT_MAX_TURNS};
use draughts_engine::orchestrator::Orchestrator;

/// Settings used when no override is given on the command line
fn default_settings() -> HashMap<String, String> {
    let level = DEFAULT_MAX_PLY.to_string();
    let turns = DEFAULT_MAX_TURNS.to_string();
    [
        ("Bot.WhiteBotLevel", level.as_str()),
        ("Bot.BlackBotLevel", level.as_str()),
        ("Bot.BotScoringType", "NumberAndPotential"),
        ("Bot.Optimization", "O1"),
        ("Bot.NoRandom", "false"),
        ("Game.MaxNumTurns", turns.as_str()),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn main() -> ExitCode {
    env_logger::init();

    // overrides as `Section.Name=value`, e.g. `Bot.WhiteBotLevel=6`
    let mut settings = default_settings();
    for arg in std::env::args().skip(1) {
        match arg.split_once('=') {
            Some((key, value)) => {
                settings.insert(key.to_string(), value.to_string());
            }
            None => {
                eprintln!("ignoring argument {:?} (expected Section.Name=value)", arg);
            }
        }
    }

    let config = match MatchConfig::from_settings(&settings) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("starting bot match: {:?}", config);

    let mut orchestrator = Orchestrator::bot_match(&config);
    let result = orchestrator.play();

    print!("{}", orchestrator.board().position());
    println!("{:?} after {} turns", result, orchestrator.turns_played());
    ExitCode::SUCCESS
}
