//! W-L-OTL record aggregation over game rows
//!
//! Two modes:
//! - single team: every row the team played in counts toward its record
//! - head-to-head: only rows between exactly the two teams count, in either
//!   home/away orientation
//!
//! Rows that don't involve the requested team(s) are skipped, never errors.

use std::cmp::Ordering;
use tracing::debug;

use super::overtime::OvertimeClassifier;
use crate::domain::{
    GameRecord, RecordReport, TeamDirectory, TeamIdentity, TeamRecord, TeamSelector, TeamTally,
};

/// Which side of a row a tracked team was on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Visitor,
    Home,
}

/// Computes team records from already-fetched game rows
#[derive(Debug, Clone)]
pub struct RecordAggregator<'a> {
    directory: &'a TeamDirectory,
    classifier: &'a OvertimeClassifier,
}

impl<'a> RecordAggregator<'a> {
    pub fn new(directory: &'a TeamDirectory, classifier: &'a OvertimeClassifier) -> Self {
        Self {
            directory,
            classifier,
        }
    }

    /// Record for `team_a`, alone (`team_b` = "all") or against `team_b`
    pub fn compute_record(&self, games: &[GameRecord], team_a: &str, team_b: &str) -> RecordReport {
        match TeamSelector::parse(team_b) {
            TeamSelector::All => self.team_record(games, team_a),
            TeamSelector::Team(team_b) => self.head_to_head(games, team_a, &team_b),
        }
    }

    /// Overall record of one team across every row it appears in
    pub fn team_record(&self, games: &[GameRecord], team: &str) -> RecordReport {
        let id = self.directory.normalize(team);
        debug!("Record for '{}' -> '{}' over {} games", team, id.display(), games.len());

        let mut tally = TeamTally::new();
        let mut counted = 0;

        for game in games {
            let (visitor, home) = self.identities(game);
            let side = if visitor.key() == id.key() {
                Side::Visitor
            } else if home.key() == id.key() {
                Side::Home
            } else {
                debug!("No match for '{}' in {} @ {}", id.key(), game.visitor_team, game.home_team);
                continue;
            };

            counted += 1;
            self.apply(game, side, Some(&mut tally), None);
        }

        debug!("Final record: {} {}", id.display(), tally);

        RecordReport::Single {
            team: self.team_line(team, &id, tally),
            games_counted: counted,
            games_skipped: games.len() - counted,
        }
    }

    /// Head-to-head record between two teams
    pub fn head_to_head(&self, games: &[GameRecord], team_a: &str, team_b: &str) -> RecordReport {
        let id_a = self.directory.normalize(team_a);
        let id_b = self.directory.normalize(team_b);
        debug!(
            "Head-to-head '{}' vs '{}' over {} games",
            id_a.display(),
            id_b.display(),
            games.len()
        );

        let mut tally_a = TeamTally::new();
        let mut tally_b = TeamTally::new();
        let mut counted = 0;

        for game in games {
            let (visitor, home) = self.identities(game);
            let side_a = if visitor.key() == id_a.key() && home.key() == id_b.key() {
                Side::Visitor
            } else if visitor.key() == id_b.key() && home.key() == id_a.key() {
                Side::Home
            } else {
                debug!(
                    "No match for '{}' vs '{}' in {} @ {}",
                    id_a.key(),
                    id_b.key(),
                    game.visitor_team,
                    game.home_team
                );
                continue;
            };

            counted += 1;
            self.apply(game, side_a, Some(&mut tally_a), Some(&mut tally_b));
        }

        debug!(
            "Final record: {} {} vs {} {}",
            id_a.display(),
            tally_a,
            id_b.display(),
            tally_b
        );

        RecordReport::HeadToHead {
            team_a: self.team_line(team_a, &id_a, tally_a),
            team_b: self.team_line(team_b, &id_b, tally_b),
            games_counted: counted,
            games_skipped: games.len() - counted,
        }
    }

    /// Credit one game. `side` is where the tracked team played; `opponent`
    /// is the other team's tally when it is tracked too.
    fn apply(
        &self,
        game: &GameRecord,
        side: Side,
        team: Option<&mut TeamTally>,
        opponent: Option<&mut TeamTally>,
    ) {
        let (score_for, score_against) = match side {
            Side::Visitor => (game.visitor_score, game.home_score),
            Side::Home => (game.home_score, game.visitor_score),
        };

        match score_for.cmp(&score_against) {
            Ordering::Equal => {
                // Ties cannot happen under shootout rules; kept as a double OTL.
                debug!("Tie {}-{} on {}, both get OTL", score_for, score_against, game.date);
                team.into_iter()
                    .chain(opponent)
                    .for_each(|t| t.record_overtime_loss());
            }
            ordering => {
                let classification = self.classifier.classify_evidence(&game.evidence);
                let extra_time = classification.outcome.went_to_overtime;
                let (winner, loser) = if ordering == Ordering::Greater {
                    (team, opponent)
                } else {
                    (opponent, team)
                };

                if let Some(w) = winner {
                    w.record_win();
                }
                if let Some(l) = loser {
                    if extra_time {
                        l.record_overtime_loss();
                    } else {
                        l.record_loss();
                    }
                }

                debug!(
                    "{} {}-{} {} on {}: {}",
                    game.visitor_team,
                    game.visitor_score,
                    game.home_score,
                    game.home_team,
                    game.date,
                    classification
                );
            }
        }
    }

    fn identities(&self, game: &GameRecord) -> (TeamIdentity, TeamIdentity) {
        (
            self.directory.normalize(&game.visitor_team),
            self.directory.normalize(&game.home_team),
        )
    }

    fn team_line(&self, raw: &str, id: &TeamIdentity, tally: TeamTally) -> TeamRecord {
        TeamRecord {
            team: id.display().to_string(),
            acronym: self.directory.acronym(raw),
            tally,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutcomeEvidence;
    use chrono::NaiveDate;

    fn game(v: &str, vs: u32, h: &str, hs: u32, evidence: OutcomeEvidence) -> GameRecord {
        GameRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            visitor_team: v.into(),
            visitor_score: vs,
            home_team: h.into(),
            home_score: hs,
            evidence,
        }
    }

    fn goalies(minutes: &str) -> OutcomeEvidence {
        OutcomeEvidence::GoalieTime {
            visitor: Some(format!("{minutes} minutes")),
            home: Some(format!("{minutes} minutes")),
        }
    }

    fn run(games: &[GameRecord], a: &str, b: &str) -> RecordReport {
        let directory = TeamDirectory::default();
        let classifier = OvertimeClassifier::default();
        RecordAggregator::new(&directory, &classifier).compute_record(games, a, b)
    }

    #[test]
    fn test_single_team_regulation_win() {
        let games = [game("Oilers", 3, "Canucks", 2, goalies("60:00"))];
        let report = run(&games, "Oilers", "all");
        assert_eq!(report.to_string(), "EDM: 1-0-0");
    }

    #[test]
    fn test_single_team_shootout_loss() {
        let games = [game("Oilers", 2, "Canucks", 3, goalies("65:00"))];
        let report = run(&games, "Oilers", "all");
        assert_eq!(report.to_string(), "EDM: 0-0-1");
    }

    #[test]
    fn test_single_team_as_home_side() {
        let games = [
            game("Flames", 1, "Oilers", 4, goalies("60:00")),
            game("Flames", 4, "Oilers", 1, goalies("60:00")),
            game("Flames", 3, "Oilers", 2, goalies("62:10")),
        ];
        let report = run(&games, "oilers", "ALL");
        assert_eq!(*report.primary(), TeamTally { wins: 1, losses: 1, overtime_losses: 1 });
    }

    #[test]
    fn test_single_team_skips_other_games() {
        let games = [
            game("Flames", 1, "Jets", 4, OutcomeEvidence::None),
            game("Oilers", 5, "Jets", 4, OutcomeEvidence::None),
        ];
        let report = run(&games, "Oilers", "all");
        assert_eq!(report.games_counted(), 1);
        assert_eq!(report.games_skipped(), 1);
        assert_eq!(report.to_string(), "EDM: 1-0-0");
    }

    #[test]
    fn test_head_to_head_both_orientations() {
        let games = [
            game("Oilers", 3, "Canucks", 2, goalies("60:00")),
            game("Canucks", 4, "Oilers", 3, goalies("63:00")),
            game("Canucks", 1, "Oilers", 2, goalies("65:00")),
            game("Oilers", 1, "Flames", 2, goalies("60:00")),
        ];
        let report = run(&games, "Oilers", "Canucks");
        assert_eq!(report.to_string(), "EDM: 2-0-1 vs VAN: 1-1-1");
        assert_eq!(report.games_skipped(), 1);
    }

    #[test]
    fn test_tie_is_double_overtime_loss() {
        let games = [game("Oilers", 2, "Canucks", 2, OutcomeEvidence::None)];
        assert_eq!(run(&games, "Oilers", "Canucks").to_string(), "EDM: 0-0-1 vs VAN: 0-0-1");
        assert_eq!(run(&games, "Canucks", "all").to_string(), "VAN: 0-0-1");
    }

    #[test]
    fn test_flag_rows() {
        let games = [game(
            "Maple Leafs",
            2,
            "Bruins",
            3,
            OutcomeEvidence::Flags {
                visitor_overtime: true,
                home_overtime: true,
                visitor_shootout: false,
                home_shootout: false,
            },
        )];
        assert_eq!(run(&games, "Maple_Leafs", "bruins").to_string(), "TOR: 0-0-1 vs BOS: 1-0-0");
    }

    #[test]
    fn test_unknown_team_keeps_raw_name() {
        let games = [game("Nordiques", 3, "Whalers", 2, OutcomeEvidence::None)];
        assert_eq!(run(&games, "Nordiques", "all").to_string(), "Nordiques: 1-0-0");
    }
}
