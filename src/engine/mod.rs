//! Game record & overtime classification engine
//!
//! Pure, synchronous core: takes rows that were already fetched and returns
//! classifications and W-L-OTL records. No I/O happens in here.

pub mod goalie_time;
pub mod overtime;
pub mod record;

pub use goalie_time::{parse_goalie_minutes, parse_minutes, GoalieMinutes};
pub use overtime::OvertimeClassifier;
pub use record::RecordAggregator;

use crate::config::AppConfig;
use crate::domain::{Classification, GameRecord, RecordReport, TeamDirectory};

/// Owns the injected tables and rules the core runs against
#[derive(Debug, Clone, Default)]
pub struct RecordEngine {
    directory: TeamDirectory,
    classifier: OvertimeClassifier,
}

impl RecordEngine {
    pub fn new(directory: TeamDirectory, classifier: OvertimeClassifier) -> Self {
        Self {
            directory,
            classifier,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            TeamDirectory::from_config(&config.teams),
            OvertimeClassifier::new(config.league.clone()),
        )
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    pub fn classifier(&self) -> &OvertimeClassifier {
        &self.classifier
    }

    pub fn aggregator(&self) -> RecordAggregator<'_> {
        RecordAggregator::new(&self.directory, &self.classifier)
    }

    /// See [`RecordAggregator::compute_record`]
    pub fn compute_record(&self, games: &[GameRecord], team_a: &str, team_b: &str) -> RecordReport {
        self.aggregator().compute_record(games, team_a, team_b)
    }

    /// Classify how a single game ended
    pub fn classify_game(&self, game: &GameRecord) -> Classification {
        self.classifier.classify_evidence(&game.evidence)
    }
}
