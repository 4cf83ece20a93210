use chrono::NaiveDate;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;
use tracing::{debug, info, instrument};

use crate::config::{DatabaseConfig, SchemaVersion};
use crate::domain::{ingest_rows, parse_game_date, GameRecord};
use crate::error::Result;

/// Filter for a team's recent games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameQuery {
    /// Canonical name of the primary team
    pub team: String,
    /// Canonical name of the opponent for head-to-head, `None` for any
    pub opponent: Option<String>,
    pub limit: u32,
    /// Search every season instead of only the current one
    pub all_seasons: bool,
}

/// Read-only access to the league's games table
#[derive(Clone)]
pub struct MySqlGameStore {
    pool: MySqlPool,
    schema: SchemaVersion,
}

impl MySqlGameStore {
    /// Create a new store from database settings
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        info!("Connected to MySQL (schema {:?})", config.schema);
        Ok(Self {
            pool,
            schema: config.schema,
        })
    }

    /// Create a store from an existing connection pool
    pub fn from_pool(pool: MySqlPool, schema: SchemaVersion) -> Self {
        Self { pool, schema }
    }

    pub fn schema(&self) -> SchemaVersion {
        self.schema
    }

    /// Latest season id in the standings table, 0 when empty
    pub async fn current_season_id(&self) -> Result<i64> {
        let row = sqlx::query("SELECT CAST(MAX(Season_ID) AS SIGNED) AS season FROM proteamstandings")
            .fetch_one(&self.pool)
            .await?;

        let season: Option<i64> = row.try_get("season")?;
        Ok(season.unwrap_or(0))
    }

    /// Most recent games for a team, newest first
    #[instrument(skip(self))]
    pub async fn recent_games(&self, query: &GameQuery) -> Result<Vec<GameRecord>> {
        let season = if query.all_seasons {
            None
        } else {
            Some(self.current_season_id().await?)
        };

        let team_clause = match query.opponent {
            Some(_) => {
                "((VisitorTeam = ? AND HomeTeam = ?) OR (VisitorTeam = ? AND HomeTeam = ?))"
            }
            None => "(VisitorTeam = ? OR HomeTeam = ?)",
        };
        let season_clause = if season.is_some() { " AND Season_ID = ?" } else { "" };

        let sql = format!(
            "SELECT {} FROM todaysgame WHERE {}{} ORDER BY Date DESC LIMIT ?",
            select_columns(self.schema),
            team_clause,
            season_clause
        );

        let mut q = sqlx::query(&sql);
        q = match &query.opponent {
            Some(opponent) => q
                .bind(&query.team)
                .bind(opponent)
                .bind(opponent)
                .bind(&query.team),
            None => q.bind(&query.team).bind(&query.team),
        };
        if let Some(season) = season {
            q = q.bind(season);
        }
        let rows = q.bind(query.limit).fetch_all(&self.pool).await?;

        let games = self.ingest(&rows)?;
        debug!("Fetched {} games for {:?}", games.len(), query);
        Ok(games)
    }

    /// Games played on `date`; falls back to the latest played date when
    /// there are none. Returns the games and the date actually used.
    pub async fn games_on(&self, date: NaiveDate) -> Result<(Vec<GameRecord>, NaiveDate)> {
        let games = self.games_for_day(date).await?;
        if !games.is_empty() {
            return Ok((games, date));
        }

        let row = sqlx::query("SELECT CAST(MAX(Date) AS CHAR) AS latest FROM todaysgame")
            .fetch_one(&self.pool)
            .await?;
        let latest: Option<String> = row.try_get("latest")?;

        match latest {
            Some(raw) => {
                let latest = parse_game_date(&raw)?;
                debug!("No games on {}, falling back to {}", date, latest);
                let games = self.games_for_day(latest).await?;
                Ok((games, latest))
            }
            None => Ok((Vec::new(), date)),
        }
    }

    async fn games_for_day(&self, date: NaiveDate) -> Result<Vec<GameRecord>> {
        let sql = format!(
            "SELECT {} FROM todaysgame WHERE SUBSTR(Date, 1, 10) = ?",
            select_columns(self.schema)
        );
        let rows = sqlx::query(&sql)
            .bind(date.format("%Y-%m-%d").to_string())
            .fetch_all(&self.pool)
            .await?;

        self.ingest(&rows)
    }

    fn ingest(&self, rows: &[MySqlRow]) -> Result<Vec<GameRecord>> {
        let width = column_count(self.schema);
        let mut raw = Vec::with_capacity(rows.len());
        for row in rows {
            let cells = (0..width)
                .map(|idx| row.try_get::<Option<String>, _>(idx))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            raw.push(cells);
        }
        Ok(ingest_rows(raw))
    }
}

/// Every column is read as text and coerced during ingestion
fn select_columns(schema: SchemaVersion) -> &'static str {
    match schema {
        SchemaVersion::Basic => {
            "CAST(Date AS CHAR), VisitorTeam, CAST(VisitorTeamScore AS CHAR), \
             HomeTeam, CAST(HomeTeamScore AS CHAR)"
        }
        SchemaVersion::GoalieText => {
            "CAST(Date AS CHAR), VisitorTeam, CAST(VisitorTeamScore AS CHAR), \
             HomeTeam, CAST(HomeTeamScore AS CHAR), VisitorTeamGoaler, HomeTeamGoaler"
        }
        SchemaVersion::Flags => {
            "CAST(Date AS CHAR), VisitorTeam, CAST(VisitorTeamScore AS CHAR), \
             HomeTeam, CAST(HomeTeamScore AS CHAR), \
             CAST(VisitorTeamOT AS CHAR), CAST(HomeTeamOT AS CHAR), \
             CAST(VisitorTeamSO AS CHAR), CAST(HomeTeamSO AS CHAR)"
        }
    }
}

fn column_count(schema: SchemaVersion) -> usize {
    match schema {
        SchemaVersion::Basic => 5,
        SchemaVersion::GoalieText => 7,
        SchemaVersion::Flags => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lists_match_row_widths() {
        for schema in [SchemaVersion::Basic, SchemaVersion::GoalieText, SchemaVersion::Flags] {
            let columns = select_columns(schema).split(", ").count();
            assert_eq!(columns, column_count(schema), "{schema:?}");
        }
    }
}
