use serde::{Deserialize, Serialize};
use std::fmt;

/// How a decided game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OvertimeKind {
    /// Decided in regulation
    None,
    /// Decided in overtime
    Overtime,
    /// Decided by shootout
    Shootout,
}

impl OvertimeKind {
    /// Short marker used next to a losing score ("" for regulation)
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeKind::None => "",
            OvertimeKind::Overtime => "OT",
            OvertimeKind::Shootout => "SO",
        }
    }
}

impl fmt::Display for OvertimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived end-of-game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeOutcome {
    pub went_to_overtime: bool,
    pub kind: OvertimeKind,
}

impl OvertimeOutcome {
    pub const REGULATION: OvertimeOutcome = OvertimeOutcome {
        went_to_overtime: false,
        kind: OvertimeKind::None,
    };

    pub const OVERTIME: OvertimeOutcome = OvertimeOutcome {
        went_to_overtime: true,
        kind: OvertimeKind::Overtime,
    };

    pub const SHOOTOUT: OvertimeOutcome = OvertimeOutcome {
        went_to_overtime: true,
        kind: OvertimeKind::Shootout,
    };

    /// Marker for the losing side, `None` for regulation
    pub fn marker(&self) -> Option<&'static str> {
        if self.went_to_overtime {
            Some(self.kind.as_str())
        } else {
            None
        }
    }
}

/// Whether an outcome was read from evidence or assumed for lack of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certainty {
    Determined,
    /// Evidence was missing or unreadable; regulation assumed
    Assumed,
}

/// Outcome plus how it was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub outcome: OvertimeOutcome,
    pub certainty: Certainty,
}

impl Classification {
    pub fn determined(outcome: OvertimeOutcome) -> Self {
        Self {
            outcome,
            certainty: Certainty::Determined,
        }
    }

    pub fn assumed_regulation() -> Self {
        Self {
            outcome: OvertimeOutcome::REGULATION,
            certainty: Certainty::Assumed,
        }
    }

    pub fn is_assumed(&self) -> bool {
        self.certainty == Certainty::Assumed
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.outcome.kind {
            OvertimeKind::None => "REGULATION",
            OvertimeKind::Overtime => "OVERTIME",
            OvertimeKind::Shootout => "SHOOTOUT",
        };
        match self.certainty {
            Certainty::Determined => write!(f, "{label}"),
            Certainty::Assumed => write!(f, "{label} (assumed)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(OvertimeOutcome::REGULATION.marker(), None);
        assert_eq!(OvertimeOutcome::OVERTIME.marker(), Some("OT"));
        assert_eq!(OvertimeOutcome::SHOOTOUT.marker(), Some("SO"));
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(
            Classification::determined(OvertimeOutcome::SHOOTOUT).to_string(),
            "SHOOTOUT"
        );
        assert_eq!(
            Classification::assumed_regulation().to_string(),
            "REGULATION (assumed)"
        );
    }
}
