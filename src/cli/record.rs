//! `rinkbot record` argument handling
//!
//! rinkbot record Oilers             - last 10 games this season
//! rinkbot record Oilers Canucks     - head-to-head, this season
//! rinkbot record Oilers 20          - last 20 games, all seasons
//! rinkbot record Oilers Canucks 5   - last 5 head-to-head games, all seasons

use anyhow::Context;
use std::path::Path;
use tracing::debug;

use crate::domain::{ingest_json_rows, GameRecord, TeamSelector};
use crate::error::{Result, RinkError};
use crate::services::RecordRequest;

pub const DEFAULT_GAME_COUNT: u32 = 10;
pub const MAX_GAME_COUNT: u32 = 82;

/// Resolve positional arguments into a request.
///
/// A numeric second argument is the game count and means "any opponent".
/// An explicit count searches all seasons; the default searches only the
/// current one. The count is clamped to a single regular season.
pub fn resolve_request(
    team: &str,
    second: Option<&str>,
    third: Option<&str>,
) -> Result<RecordRequest> {
    let (opponent, count_arg) = match second {
        Some(arg) if is_count(arg) => (TeamSelector::All, Some(arg)),
        Some(arg) => (TeamSelector::parse(arg), third),
        None => (TeamSelector::All, None),
    };

    let count = match count_arg {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| RinkError::Validation(format!("game count must be a number, got '{raw}'")))?
            .clamp(1, MAX_GAME_COUNT as u64) as u32,
        None => DEFAULT_GAME_COUNT,
    };

    Ok(RecordRequest {
        team: team.to_string(),
        opponent,
        limit: count,
        all_seasons: count_arg.is_some(),
    })
}

fn is_count(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit())
}

/// Load game rows from a JSON file holding an array of 5/7/9-element arrays
pub fn load_rows(path: &Path) -> Result<Vec<GameRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading game rows from {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let rows = value
        .as_array()
        .ok_or_else(|| RinkError::Validation(format!("{} is not a JSON array", path.display())))?;

    let games = ingest_json_rows(rows);
    debug!("Loaded {} of {} rows from {}", games.len(), rows.len(), path.display());
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = resolve_request("Oilers", None, None).unwrap();
        assert_eq!(req.opponent, TeamSelector::All);
        assert_eq!(req.limit, DEFAULT_GAME_COUNT);
        assert!(!req.all_seasons);
    }

    #[test]
    fn test_numeric_second_argument_is_count() {
        let req = resolve_request("Oilers", Some("20"), Some("5")).unwrap();
        assert_eq!(req.opponent, TeamSelector::All);
        assert_eq!(req.limit, 20);
        assert!(req.all_seasons);
    }

    #[test]
    fn test_head_to_head_with_count() {
        let req = resolve_request("Oilers", Some("Canucks"), Some("5")).unwrap();
        assert_eq!(req.opponent, TeamSelector::Team("Canucks".into()));
        assert_eq!(req.limit, 5);
        assert!(req.all_seasons);

        let req = resolve_request("Oilers", Some("all"), None).unwrap();
        assert_eq!(req.opponent, TeamSelector::All);
        assert!(!req.all_seasons);
    }

    #[test]
    fn test_count_clamped() {
        assert_eq!(resolve_request("Oilers", Some("500"), None).unwrap().limit, 82);
        assert_eq!(resolve_request("Oilers", Some("0"), None).unwrap().limit, 1);
    }

    #[test]
    fn test_explicit_default_count_searches_all_seasons() {
        let req = resolve_request("Oilers", Some("10"), None).unwrap();
        assert_eq!(req.limit, 10);
        assert!(req.all_seasons);
    }

    #[test]
    fn test_bad_count_rejected() {
        let err = resolve_request("Oilers", Some("Canucks"), Some("many")).unwrap_err();
        assert!(matches!(err, RinkError::Validation(_)));
    }

    #[test]
    fn test_load_rows_skips_bad_entries() {
        let dir = std::env::temp_dir().join(format!("rinkbot-rows-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rows.json");
        std::fs::write(
            &path,
            r#"[
                ["2024-01-05", "Oilers", 3, "Canucks", 2],
                ["2024-01-06", "Oilers", "2.0", "Canucks", "3.0", "65:00 minutes", "65:00 minutes"],
                ["2024-01-07", "Oilers"]
            ]"#,
        )
        .unwrap();

        let games = load_rows(&path).unwrap();
        assert_eq!(games.len(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_rows_file_names_the_path() {
        let path = std::env::temp_dir().join("rinkbot-no-such-rows.json");
        let err = load_rows(&path).unwrap_err();
        assert!(matches!(err, RinkError::Other(_)));
        assert!(err.to_string().contains("rinkbot-no-such-rows.json"));
    }
}
