//! Record lookups: fetch rows from a game source, aggregate, render.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::adapters::{GameQuery, MySqlGameStore};
use crate::domain::{GameRecord, RecordReport, TeamSelector};
use crate::engine::RecordEngine;
use crate::error::Result;
use crate::report::{render_games, render_scoreboard};

/// Anything that can supply game rows
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Most recent games matching the query, newest first
    async fn recent_games(&self, query: &GameQuery) -> Result<Vec<GameRecord>>;

    /// Games on a date, or on the latest played date when there are none
    async fn games_on(&self, date: NaiveDate) -> Result<(Vec<GameRecord>, NaiveDate)>;
}

#[async_trait]
impl GameSource for MySqlGameStore {
    async fn recent_games(&self, query: &GameQuery) -> Result<Vec<GameRecord>> {
        MySqlGameStore::recent_games(self, query).await
    }

    async fn games_on(&self, date: NaiveDate) -> Result<(Vec<GameRecord>, NaiveDate)> {
        MySqlGameStore::games_on(self, date).await
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    pub team: String,
    pub opponent: TeamSelector,
    pub limit: u32,
    pub all_seasons: bool,
}

/// Result of a record lookup
#[derive(Debug, Clone)]
pub struct RecordLookup {
    pub games: Vec<GameRecord>,
    pub report: RecordReport,
    /// Game list followed by the record line
    pub text: String,
}

/// Result of a scoreboard lookup
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub date: NaiveDate,
    pub games: Vec<GameRecord>,
    pub text: String,
}

pub struct RecordService<S> {
    source: S,
    engine: RecordEngine,
}

impl<S: GameSource> RecordService<S> {
    pub fn new(source: S, engine: RecordEngine) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> &RecordEngine {
        &self.engine
    }

    pub async fn team_record(&self, request: &RecordRequest) -> Result<RecordLookup> {
        let directory = self.engine.directory();
        let query = GameQuery {
            team: directory.normalize(&request.team).display().to_string(),
            opponent: request
                .opponent
                .as_team()
                .map(|name| directory.normalize(name).display().to_string()),
            limit: request.limit,
            all_seasons: request.all_seasons,
        };

        let games = self.source.recent_games(&query).await?;
        let opponent = request.opponent.as_team().unwrap_or(crate::domain::ALL_TEAMS);
        let report = self.engine.compute_record(&games, &request.team, opponent);
        let text = render_games(&games, &self.engine, Some(&report));

        info!(
            "Record lookup {} vs {:?}: {} games, {}",
            request.team,
            request.opponent,
            games.len(),
            report
        );

        Ok(RecordLookup { games, report, text })
    }

    pub async fn scoreboard(&self, date: NaiveDate) -> Result<Scoreboard> {
        let (games, date) = self.source.games_on(date).await?;
        let text = render_scoreboard(&games);
        info!("Scoreboard for {}: {} games", date, games.len());
        Ok(Scoreboard { date, games, text })
    }
}
