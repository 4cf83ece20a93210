//! Regulation / overtime / shootout classification

use tracing::debug;

use super::goalie_time::parse_goalie_minutes;
use crate::config::LeagueRules;
use crate::domain::{Classification, OutcomeEvidence, OvertimeOutcome};

/// Classifies how a game ended from whatever evidence its row carries
#[derive(Debug, Clone)]
pub struct OvertimeClassifier {
    rules: LeagueRules,
}

impl Default for OvertimeClassifier {
    fn default() -> Self {
        Self::new(LeagueRules::default())
    }
}

impl OvertimeClassifier {
    pub fn new(rules: LeagueRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &LeagueRules {
        &self.rules
    }

    /// Classify from the two goaltenders' appearance text.
    ///
    /// The longest appearance decides: up to regulation length is a
    /// regulation game, the league's fixed shootout length is a shootout,
    /// anything else past regulation is overtime.
    pub fn classify(&self, visitor: Option<&str>, home: Option<&str>) -> Classification {
        let (visitor, home) = match (visitor, home) {
            (Some(v), Some(h)) if !v.is_empty() && !h.is_empty() => (v, h),
            _ => {
                debug!(
                    "Missing goalie data - visitor: {:?}, home: {:?}",
                    visitor, home
                );
                return Classification::assumed_regulation();
            }
        };

        let v = parse_goalie_minutes(visitor);
        let h = parse_goalie_minutes(home);
        let max_minutes = v.minutes.max(h.minutes);

        let outcome = self.outcome_for_minutes(max_minutes);
        debug!(
            "Goalie minutes - visitor: {:.2}, home: {:.2} -> {:?}",
            v.minutes, h.minutes, outcome.kind
        );

        if outcome.went_to_overtime || (v.parsed && h.parsed) {
            Classification::determined(outcome)
        } else {
            Classification::assumed_regulation()
        }
    }

    /// Map the longest goaltender appearance onto an outcome
    pub fn outcome_for_minutes(&self, max_minutes: f64) -> OvertimeOutcome {
        if max_minutes <= self.rules.regulation_minutes {
            OvertimeOutcome::REGULATION
        } else if (max_minutes - self.rules.shootout_minutes).abs() < self.rules.shootout_tolerance
        {
            OvertimeOutcome::SHOOTOUT
        } else {
            OvertimeOutcome::OVERTIME
        }
    }

    /// Classify from explicit flags; a shootout flag outranks an overtime flag
    pub fn classify_from_flags(
        &self,
        visitor_overtime: bool,
        home_overtime: bool,
        visitor_shootout: bool,
        home_shootout: bool,
    ) -> Classification {
        let outcome = if visitor_shootout || home_shootout {
            OvertimeOutcome::SHOOTOUT
        } else if visitor_overtime || home_overtime {
            OvertimeOutcome::OVERTIME
        } else {
            OvertimeOutcome::REGULATION
        };
        Classification::determined(outcome)
    }

    /// Classify a row's evidence, whichever representation it carries
    pub fn classify_evidence(&self, evidence: &OutcomeEvidence) -> Classification {
        match evidence {
            OutcomeEvidence::None => Classification::assumed_regulation(),
            OutcomeEvidence::GoalieTime { visitor, home } => {
                self.classify(visitor.as_deref(), home.as_deref())
            }
            OutcomeEvidence::Flags {
                visitor_overtime,
                home_overtime,
                visitor_shootout,
                home_shootout,
            } => self.classify_from_flags(
                *visitor_overtime,
                *home_overtime,
                *visitor_shootout,
                *home_shootout,
            ),
        }
    }
}
