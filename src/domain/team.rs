//! Team identity and display tables.
//!
//! Users type team names however they like ("oilers", "Maple_Leafs",
//! "leafs") and the database stores nicknames ("Oilers", "Maple Leafs").
//! [`TeamDirectory`] folds both onto one canonical nickname and supplies the
//! short acronym used in reports.

use serde::Serialize;
use std::collections::HashMap;

use crate::config::TeamsConfig;

/// Sentinel accepted in place of a second team meaning "any opponent"
pub const ALL_TEAMS: &str = "all";

/// Canonical nicknames and their display acronyms
const TEAM_ACRONYMS: [(&str, &str); 33] = [
    ("Wild", "MIN"),
    ("Ducks", "ANA"),
    ("Maple Leafs", "TOR"),
    ("Blackhawks", "CHI"),
    ("Sharks", "SJS"),
    ("Jets", "WPG"),
    ("Blues", "STL"),
    ("Hurricanes", "CAR"),
    ("Predators", "NSH"),
    ("Kings", "LAK"),
    ("Avalanche", "COL"),
    ("Rangers", "NYR"),
    ("Oilers", "EDM"),
    ("Islanders", "NYI"),
    ("Senators", "OTT"),
    ("Devils", "NJD"),
    ("Flames", "CAL"),
    ("Capitals", "WSH"),
    ("Stars", "DAL"),
    ("Canucks", "VAN"),
    ("Sabres", "BUF"),
    ("Lightning", "TBL"),
    ("Coyotes", "ARZ"),
    ("Blue Jackets", "CBJ"),
    ("Golden Knights", "VGK"),
    ("Panthers", "FLA"),
    ("Canadiens", "MON"),
    ("Bruins", "BOS"),
    ("Flyers", "PHI"),
    ("Red Wings", "DET"),
    ("Penguins", "PIT"),
    ("Kraken", "SEA"),
    ("Mammoth", "ARZ"),
];

/// Short forms that are not just a case variant of the nickname
const EXTRA_ALIASES: [(&str, &str); 1] = [("leafs", "Maple Leafs")];

/// Normalized team name used as a comparison key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamIdentity {
    display: String,
    key: String,
}

impl TeamIdentity {
    /// Canonical display name ("Maple Leafs")
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Lower-cased comparison key ("maple leafs")
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Second-team filter: a specific team or any opponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelector {
    All,
    Team(String),
}

impl TeamSelector {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(ALL_TEAMS) {
            TeamSelector::All
        } else {
            TeamSelector::Team(raw.to_string())
        }
    }

    pub fn as_team(&self) -> Option<&str> {
        match self {
            TeamSelector::All => None,
            TeamSelector::Team(name) => Some(name),
        }
    }
}

/// Immutable alias and acronym tables
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    /// lower-cased variant -> canonical nickname
    aliases: HashMap<String, String>,
    /// canonical nickname -> acronym
    acronyms: HashMap<String, String>,
}

impl Default for TeamDirectory {
    fn default() -> Self {
        let mut aliases = HashMap::new();
        let mut acronyms = HashMap::new();

        for (name, acronym) in TEAM_ACRONYMS.iter() {
            aliases.insert(name.to_lowercase(), name.to_string());
            acronyms.insert(name.to_string(), acronym.to_string());
        }
        for (variant, name) in EXTRA_ALIASES.iter() {
            aliases.insert(variant.to_string(), name.to_string());
        }

        Self { aliases, acronyms }
    }
}

impl TeamDirectory {
    /// Built-in tables with configured aliases and acronyms layered on top
    pub fn from_config(config: &TeamsConfig) -> Self {
        let mut directory = Self::default();

        for (variant, name) in &config.aliases {
            directory
                .aliases
                .insert(clean(variant).to_lowercase(), clean(name));
        }
        // Keys may arrive lower-cased from the config loader, so resolve them
        // through the alias table before storing.
        for (name, acronym) in &config.acronyms {
            let identity = directory.normalize(name);
            directory
                .aliases
                .entry(identity.key().to_string())
                .or_insert_with(|| identity.display().to_string());
            directory
                .acronyms
                .insert(identity.display().to_string(), acronym.trim().to_string());
        }

        directory
    }

    /// Fold a raw name onto its canonical identity.
    ///
    /// Underscores become spaces, then known variants (case-insensitive) map
    /// to the canonical nickname. Unknown names keep their cleaned spelling.
    pub fn normalize(&self, raw: &str) -> TeamIdentity {
        let cleaned = clean(raw);
        let display = self
            .aliases
            .get(&cleaned.to_lowercase())
            .cloned()
            .unwrap_or(cleaned);
        let key = display.to_lowercase();
        TeamIdentity { display, key }
    }

    pub fn same_team(&self, a: &str, b: &str) -> bool {
        self.normalize(a).key == self.normalize(b).key
    }

    /// Short acronym for a raw name; falls back to the raw name unchanged
    pub fn acronym(&self, raw: &str) -> String {
        let identity = self.normalize(raw);
        self.acronyms
            .get(identity.display())
            .or_else(|| self.acronyms.get(raw))
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }

    pub fn team_count(&self) -> usize {
        self.acronyms.len()
    }
}

fn clean(raw: &str) -> String {
    raw.replace('_', " ").trim().to_string()
}
