//! Goaltender time-on-ice extraction
//!
//! Goaltender appearances are stored as free text such as
//! `"Stuart Skinner 28 saves on 31 shots 62:30 minutes"`. The played time is
//! the last `MM:SS` token before the final occurrence of "minutes".

use tracing::trace;

const MINUTES_WORD: &str = "minutes";

/// Played time read from one goaltender string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalieMinutes {
    pub minutes: f64,
    /// False when nothing usable was found and `minutes` is the 0 fallback
    pub parsed: bool,
}

impl GoalieMinutes {
    const UNKNOWN: GoalieMinutes = GoalieMinutes {
        minutes: 0.0,
        parsed: false,
    };
}

/// Minutes played, or 0 when the text holds no readable time
pub fn parse_minutes(text: &str) -> f64 {
    parse_goalie_minutes(text).minutes
}

/// Lenient parse that never fails; unreadable input yields `parsed = false`
pub fn parse_goalie_minutes(text: &str) -> GoalieMinutes {
    if text.is_empty() || text == "None" {
        return GoalieMinutes::UNKNOWN;
    }

    let idx = match text.rfind(MINUTES_WORD) {
        Some(idx) if idx > 0 => idx,
        _ => {
            trace!("no '{}' suffix in goalie text '{}'", MINUTES_WORD, text);
            return GoalieMinutes::UNKNOWN;
        }
    };

    let time_token = text[..idx]
        .split_whitespace()
        .rev()
        .find(|token| token.matches(':').count() == 1);

    match time_token.and_then(parse_clock) {
        Some(minutes) => GoalieMinutes {
            minutes,
            parsed: true,
        },
        None => {
            trace!("no readable MM:SS token in goalie text '{}'", text);
            GoalieMinutes::UNKNOWN
        }
    }
}

/// Parse "62:30" into fractional minutes
fn parse_clock(token: &str) -> Option<f64> {
    let (mins, secs) = token.split_once(':')?;
    let mins: f64 = mins.trim().parse().ok()?;
    let secs: f64 = secs.trim().parse().ok()?;
    let total = mins + secs / 60.0;
    total.is_finite().then_some(total)
}
