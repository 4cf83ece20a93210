//! Game rows as they come out of the stats database.
//!
//! The upstream schema has gone through three revisions, and each exposes a
//! different amount of end-of-game evidence:
//!
//! - 5 cells: date, visitor, visitor score, home, home score
//! - 7 cells: the above plus each goaltender's appearance text
//! - 9 cells: the above plus visitor/home overtime flags and shootout flags
//!
//! Rows are turned into a [`GameRecord`] once, at ingestion, so nothing
//! downstream has to branch on row length.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, RinkError};

/// End-of-game evidence carried by a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeEvidence {
    /// Oldest schema: scores only
    None,
    /// Goaltender appearance text, e.g. "J. Doe 31 saves 65:00 minutes"
    GoalieTime {
        visitor: Option<String>,
        home: Option<String>,
    },
    /// Newest schema: explicit booleans
    Flags {
        visitor_overtime: bool,
        home_overtime: bool,
        visitor_shootout: bool,
        home_shootout: bool,
    },
}

/// One played game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub visitor_team: String,
    pub visitor_score: u32,
    pub home_team: String,
    pub home_score: u32,
    pub evidence: OutcomeEvidence,
}

impl GameRecord {
    /// Build a record from raw row cells, dispatching on arity
    pub fn from_cells(cells: &[Option<String>]) -> Result<Self> {
        if !matches!(cells.len(), 5 | 7 | 9) {
            return Err(RinkError::invalid_row(format!(
                "expected 5, 7 or 9 cells, got {}",
                cells.len()
            )));
        }

        let date = parse_game_date(required(cells, 0, "date")?)?;
        let visitor_team = required(cells, 1, "visitor team")?.trim().to_string();
        let visitor_score = parse_score(required(cells, 2, "visitor score")?)?;
        let home_team = required(cells, 3, "home team")?.trim().to_string();
        let home_score = parse_score(required(cells, 4, "home score")?)?;

        let evidence = match cells.len() {
            7 => OutcomeEvidence::GoalieTime {
                visitor: cells[5].clone(),
                home: cells[6].clone(),
            },
            9 => OutcomeEvidence::Flags {
                visitor_overtime: parse_flag(cells[5].as_deref()),
                home_overtime: parse_flag(cells[6].as_deref()),
                visitor_shootout: parse_flag(cells[7].as_deref()),
                home_shootout: parse_flag(cells[8].as_deref()),
            },
            _ => OutcomeEvidence::None,
        };

        Ok(Self {
            date,
            visitor_team,
            visitor_score,
            home_team,
            home_score,
            evidence,
        })
    }

    /// Build a record from a JSON array row (strings, numbers, booleans or null)
    pub fn from_json_row(row: &serde_json::Value) -> Result<Self> {
        let values = row
            .as_array()
            .ok_or_else(|| RinkError::invalid_row("row is not a JSON array"))?;

        let cells: Vec<Option<String>> = values
            .iter()
            .map(|v| match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect();

        Self::from_cells(&cells)
    }
}

/// Convert a batch of raw rows, skipping rows that fail to ingest
pub fn ingest_rows<I>(rows: I) -> Vec<GameRecord>
where
    I: IntoIterator<Item = Vec<Option<String>>>,
{
    keep_valid(rows.into_iter().map(|cells| GameRecord::from_cells(&cells)))
}

/// Same as [`ingest_rows`] for rows decoded from a JSON array
pub fn ingest_json_rows(rows: &[serde_json::Value]) -> Vec<GameRecord> {
    keep_valid(rows.iter().map(GameRecord::from_json_row))
}

fn keep_valid(results: impl Iterator<Item = Result<GameRecord>>) -> Vec<GameRecord> {
    results
        .enumerate()
        .filter_map(|(idx, result)| match result {
            Ok(game) => Some(game),
            Err(e) => {
                warn!("Skipping row {}: {}", idx, e);
                None
            }
        })
        .collect()
}

fn required<'a>(cells: &'a [Option<String>], idx: usize, what: &str) -> Result<&'a str> {
    cells[idx]
        .as_deref()
        .ok_or_else(|| RinkError::invalid_row(format!("missing {what}")))
}

/// Keep only the calendar date of a date or timestamp string.
///
/// Accepts "2024-03-09", "2024-03-09 19:00:00", "2024-03-09T19:00:00" and
/// the slash form "2024/03/09".
pub fn parse_game_date(raw: &str) -> Result<NaiveDate> {
    let day = raw
        .trim()
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or_default();

    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(day, "%Y/%m/%d"))
        .map_err(|_| RinkError::invalid_row(format!("unreadable date '{raw}'")))
}

/// Scores may be stored as floats ("3.0"); coerce through f64 and truncate
pub fn parse_score(raw: &str) -> Result<u32> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RinkError::invalid_row(format!("unreadable score '{raw}'")))?;

    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(RinkError::invalid_row(format!("score out of range '{raw}'")));
    }
    Ok(value.trunc() as u32)
}

/// Lenient boolean cell: 1/0, true/false, yes/no; anything else is false
pub fn parse_flag(raw: Option<&str>) -> bool {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        Some(s) => match s.as_str() {
            "1" | "true" | "yes" | "y" | "t" => true,
            other => other.parse::<f64>().map(|v| v != 0.0).unwrap_or(false),
        },
        None => false,
    }
}
