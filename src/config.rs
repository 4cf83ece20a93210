use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub league: LeagueRules,
    #[serde(default)]
    pub teams: TeamsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    pub url: String,
    /// Maximum connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Which revision of the games table to read
    #[serde(default)]
    pub schema: SchemaVersion,
}

fn default_max_connections() -> u32 {
    5
}

/// Revision of the games table, determines the columns selected per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVersion {
    /// Date, teams and scores only
    Basic,
    /// Adds goaltender appearance text
    #[default]
    GoalieText,
    /// Adds overtime/shootout flags
    Flags,
}

/// Game-length conventions used to classify overtime and shootouts
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueRules {
    /// Length of regulation play in minutes
    #[serde(default = "default_regulation_minutes")]
    pub regulation_minutes: f64,
    /// Recorded goaltender minutes for a game decided by shootout
    #[serde(default = "default_shootout_minutes")]
    pub shootout_minutes: f64,
    /// Allowed distance from `shootout_minutes`
    #[serde(default = "default_shootout_tolerance")]
    pub shootout_tolerance: f64,
}

fn default_regulation_minutes() -> f64 {
    60.0
}

fn default_shootout_minutes() -> f64 {
    65.0
}

fn default_shootout_tolerance() -> f64 {
    0.01
}

impl Default for LeagueRules {
    fn default() -> Self {
        Self {
            regulation_minutes: default_regulation_minutes(),
            shootout_minutes: default_shootout_minutes(),
            shootout_tolerance: default_shootout_tolerance(),
        }
    }
}

/// Additions to the built-in team tables
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TeamsConfig {
    /// variant -> canonical nickname, e.g. habs = "Canadiens"
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    /// canonical nickname -> acronym, overrides the built-in value
    #[serde(default)]
    pub acronyms: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("database.max_connections", 5)?
            .set_default("database.schema", "goalie_text")?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("RINKBOT_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (RINKBOT_DATABASE__URL, etc.)
            .add_source(
                Environment::with_prefix("RINKBOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Configuration for offline commands that never touch the database
    pub fn offline() -> Self {
        Self {
            database: DatabaseConfig {
                url: String::new(),
                max_connections: default_max_connections(),
                schema: SchemaVersion::default(),
            },
            league: LeagueRules::default(),
            teams: TeamsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let rules = &self.league;

        if rules.regulation_minutes <= 0.0 {
            errors.push("league.regulation_minutes must be positive".to_string());
        }

        if rules.shootout_minutes <= rules.regulation_minutes {
            errors.push(format!(
                "league.shootout_minutes ({}) must exceed regulation_minutes ({})",
                rules.shootout_minutes, rules.regulation_minutes
            ));
        }

        if rules.shootout_tolerance < 0.0 {
            errors.push("league.shootout_tolerance must not be negative".to_string());
        }

        if self.database.max_connections == 0 {
            errors.push("database.max_connections must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
