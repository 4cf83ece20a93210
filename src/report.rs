//! Plain-text reports for game lists and scoreboards

use std::fmt::Write;

use crate::domain::{GameRecord, RecordReport};
use crate::engine::RecordEngine;

const RULE: &str = "--------------------------------------------------";
const SCOREBOARD_WIDTH: usize = 20;

/// Game list with acronyms, `(OT)`/`(SO)` on the losing score and an
/// optional trailing record line
pub fn render_games(games: &[GameRecord], engine: &RecordEngine, record: Option<&RecordReport>) -> String {
    if games.is_empty() {
        return "No games found.".to_string();
    }

    let directory = engine.directory();
    let mut out = String::new();
    out.push_str("Date              Away                Home\n");
    out.push_str(RULE);
    out.push('\n');

    for game in games {
        let mut away = format!("{} {}", directory.acronym(&game.visitor_team), game.visitor_score);
        let mut home = format!("{} {}", directory.acronym(&game.home_team), game.home_score);

        if let Some(marker) = engine.classify_game(game).outcome.marker() {
            if game.visitor_score > game.home_score {
                let _ = write!(home, "({marker})");
            } else {
                let _ = write!(away, "({marker})");
            }
        }

        let date = game.date.format("%Y-%m-%d").to_string();
        let _ = writeln!(out, "{date:<16} {away:<20} {home}");
    }

    out.push_str(RULE);
    out.push('\n');

    if let Some(record) = record {
        let _ = writeln!(out, "Record: {record}");
    }

    out
}

/// Two lines per game, team name then score right-aligned to a fixed column
pub fn render_scoreboard(games: &[GameRecord]) -> String {
    let mut out = String::new();
    for game in games {
        push_score_line(&mut out, &game.visitor_team, game.visitor_score);
        push_score_line(&mut out, &game.home_team, game.home_score);
        out.push('\n');
    }
    out
}

fn push_score_line(out: &mut String, team: &str, score: u32) {
    let width = SCOREBOARD_WIDTH.saturating_sub(team.chars().count());
    let _ = writeln!(out, "{team}{score:>width$}");
}
