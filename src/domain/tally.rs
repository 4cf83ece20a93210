use serde::Serialize;
use std::fmt;

/// Win / loss / overtime-loss accumulator for one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamTally {
    pub wins: u32,
    pub losses: u32,
    pub overtime_losses: u32,
}

impl TeamTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.overtime_losses
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn record_overtime_loss(&mut self) {
        self.overtime_losses += 1;
    }
}

impl fmt::Display for TeamTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.overtime_losses)
    }
}

/// A team's tally labelled with its short display acronym
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    /// Canonical display name
    pub team: String,
    pub acronym: String,
    pub tally: TeamTally,
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.acronym, self.tally)
    }
}

/// Result of a record computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordReport {
    Single {
        team: TeamRecord,
        games_counted: usize,
        games_skipped: usize,
    },
    HeadToHead {
        team_a: TeamRecord,
        team_b: TeamRecord,
        games_counted: usize,
        games_skipped: usize,
    },
}

impl RecordReport {
    pub fn games_counted(&self) -> usize {
        match self {
            RecordReport::Single { games_counted, .. }
            | RecordReport::HeadToHead { games_counted, .. } => *games_counted,
        }
    }

    pub fn games_skipped(&self) -> usize {
        match self {
            RecordReport::Single { games_skipped, .. }
            | RecordReport::HeadToHead { games_skipped, .. } => *games_skipped,
        }
    }

    /// Tally of the first (or only) requested team
    pub fn primary(&self) -> &TeamTally {
        match self {
            RecordReport::Single { team, .. } => &team.tally,
            RecordReport::HeadToHead { team_a, .. } => &team_a.tally,
        }
    }

    /// Tally of the opponent in head-to-head mode
    pub fn opponent(&self) -> Option<&TeamTally> {
        match self {
            RecordReport::Single { .. } => None,
            RecordReport::HeadToHead { team_b, .. } => Some(&team_b.tally),
        }
    }
}

impl fmt::Display for RecordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordReport::Single { team, .. } => write!(f, "{team}"),
            RecordReport::HeadToHead { team_a, team_b, .. } => {
                write!(f, "{team_a} vs {team_b}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(acronym: &str, w: u32, l: u32, otl: u32) -> TeamRecord {
        TeamRecord {
            team: acronym.to_string(),
            acronym: acronym.to_string(),
            tally: TeamTally {
                wins: w,
                losses: l,
                overtime_losses: otl,
            },
        }
    }

    #[test]
    fn test_single_display() {
        let report = RecordReport::Single {
            team: record("EDM", 5, 3, 2),
            games_counted: 10,
            games_skipped: 0,
        };
        assert_eq!(report.to_string(), "EDM: 5-3-2");
        assert!(report.opponent().is_none());
    }

    #[test]
    fn test_head_to_head_display() {
        let report = RecordReport::HeadToHead {
            team_a: record("EDM", 2, 1, 0),
            team_b: record("VAN", 1, 1, 1),
            games_counted: 3,
            games_skipped: 1,
        };
        assert_eq!(report.to_string(), "EDM: 2-1-0 vs VAN: 1-1-1");
        assert_eq!(report.primary().games(), 3);
    }
}
