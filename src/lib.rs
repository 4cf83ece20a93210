pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod report;
pub mod services;

pub use adapters::{GameQuery, MySqlGameStore};
pub use config::{AppConfig, LeagueRules, SchemaVersion};
pub use domain::{
    Certainty, Classification, GameRecord, OutcomeEvidence, OvertimeKind, OvertimeOutcome,
    RecordReport, TeamDirectory, TeamIdentity, TeamRecord, TeamSelector, TeamTally,
};
pub use engine::{
    parse_goalie_minutes, parse_minutes, GoalieMinutes, OvertimeClassifier, RecordAggregator,
    RecordEngine,
};
pub use error::{Result, RinkError};
pub use services::{GameSource, RecordRequest, RecordService};
