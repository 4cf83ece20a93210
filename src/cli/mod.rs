//! rinkbot CLI
//!
//! Commands:
//! - `rinkbot record`   - game list and W-L-OTL record for a team or matchup
//! - `rinkbot scores`   - scoreboard for a date
//! - `rinkbot classify` - classify one game from goaltender text
//! - `rinkbot config`   - configuration checks

pub mod config;
pub mod record;

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::adapters::MySqlGameStore;
use crate::config::AppConfig;
use crate::domain::{parse_game_date, ALL_TEAMS};
use crate::engine::{parse_goalie_minutes, RecordEngine};
use crate::error::{Result, RinkError};
use crate::report::render_games;
use crate::services::RecordService;

/// Hockey league stats bot
#[derive(Parser, Debug)]
#[command(name = "rinkbot")]
#[command(author, version, about = "Scores, records and overtime classification for a hockey league")]
pub struct Cli {
    /// Directory holding default.toml and environment overrides
    #[arg(long, global = true, default_value = "config", env = "RINKBOT_CONFIG_DIR")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recent games and W-L-OTL record: <team> [opponent|count] [count]
    Record {
        /// Team nickname, underscores for spaces (e.g. Maple_Leafs)
        team: String,
        /// Opponent, "all", or a game count
        second: Option<String>,
        /// Game count when an opponent is given
        third: Option<String>,
        /// Read rows from a JSON file instead of the database
        #[arg(long)]
        rows: Option<PathBuf>,
    },

    /// Scoreboard for a date (YYYY-MM-DD), defaults to today
    Scores { date: Option<String> },

    /// Classify a game from the two goaltenders' appearance text
    Classify { visitor: String, home: String },

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config_dir = self.config_dir;
        match self.command {
            Commands::Record {
                team,
                second,
                third,
                rows,
            } => {
                let request = record::resolve_request(&team, second.as_deref(), third.as_deref())?;
                match rows {
                    Some(path) => {
                        let config = load_or_offline(&config_dir);
                        let engine = RecordEngine::from_config(&config);
                        let games = record::load_rows(&path)?;
                        let opponent = request.opponent.as_team().unwrap_or(ALL_TEAMS);
                        let report = engine.compute_record(&games, &request.team, opponent);
                        println!("{}", render_games(&games, &engine, Some(&report)));
                    }
                    None => {
                        let service = connect(&config_dir).await?;
                        let lookup = service.team_record(&request).await?;
                        let scope = if request.all_seasons { "all time" } else { "this season" };
                        println!("Last {} games: {} ({})", lookup.games.len(), team, scope);
                        println!("{}", lookup.text);
                    }
                }
            }
            Commands::Scores { date } => {
                let date = match date {
                    Some(raw) => parse_game_date(&raw)?,
                    None => Local::now().date_naive(),
                };
                let service = connect(&config_dir).await?;
                let board = service.scoreboard(date).await?;
                println!("Scores for {}", board.date);
                println!("{}", board.text);
            }
            Commands::Classify { visitor, home } => {
                let config = load_or_offline(&config_dir);
                let engine = RecordEngine::from_config(&config);
                let classification = engine.classifier().classify(Some(&visitor), Some(&home));
                let v = parse_goalie_minutes(&visitor);
                let h = parse_goalie_minutes(&home);
                println!("Visitor goalie: {:.2} min (parsed: {})", v.minutes, v.parsed);
                println!("Home goalie:    {:.2} min (parsed: {})", h.minutes, h.parsed);
                println!("Outcome:        {classification}");
            }
            Commands::Config(cmd) => cmd.run(&config_dir)?,
        }
        Ok(())
    }
}

/// Full configuration, required for commands that reach the database
pub fn load_config(config_dir: &Path) -> Result<AppConfig> {
    let config = AppConfig::load_from(config_dir)?;
    config
        .validate()
        .map_err(|errors| RinkError::Validation(errors.join("; ")))?;
    Ok(config)
}

/// Offline commands only need league rules and team tables
fn load_or_offline(config_dir: &Path) -> AppConfig {
    match load_config(config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using built-in defaults: {}", e);
            AppConfig::offline()
        }
    }
}

async fn connect(config_dir: &Path) -> Result<RecordService<MySqlGameStore>> {
    let config = load_config(config_dir)?;
    let store = MySqlGameStore::new(&config.database).await?;
    Ok(RecordService::new(store, RecordEngine::from_config(&config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_command() {
        let cli = Cli::try_parse_from(["rinkbot", "record", "Oilers", "Canucks", "5"]).unwrap();
        match cli.command {
            Commands::Record {
                team,
                second,
                third,
                rows,
            } => {
                assert_eq!(team, "Oilers");
                assert_eq!(second.as_deref(), Some("Canucks"));
                assert_eq!(third.as_deref(), Some("5"));
                assert!(rows.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_classify_command() {
        let cli = Cli::try_parse_from(["rinkbot", "classify", "65:00 minutes", "64:00 minutes"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Classify { .. }));
    }
}
