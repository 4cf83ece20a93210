//! Configuration management commands
//!
//! rinkbot config validate - Validate configuration
//! rinkbot config team     - Resolve a team name and acronym

use clap::Subcommand;
use std::path::Path;

use crate::domain::TeamDirectory;
use crate::error::Result;

/// Configuration-related commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate,

    /// Resolve a team name through the alias and acronym tables
    Team {
        /// Raw team name as a user would type it
        name: String,
    },
}

impl ConfigCommands {
    pub fn run(self, config_dir: &Path) -> Result<()> {
        match self {
            Self::Validate => {
                let config = super::load_config(config_dir)?;
                println!("✓ Configuration in {} is valid", config_dir.display());
                println!("  schema: {:?}", config.database.schema);
                println!(
                    "  regulation {} min, shootout {} min (±{})",
                    config.league.regulation_minutes,
                    config.league.shootout_minutes,
                    config.league.shootout_tolerance
                );
                let directory = TeamDirectory::from_config(&config.teams);
                println!("  {} teams with acronyms", directory.team_count());
            }
            Self::Team { name } => {
                let config = super::load_or_offline(config_dir);
                let directory = TeamDirectory::from_config(&config.teams);
                let identity = directory.normalize(&name);
                println!("{} -> {} ({})", name, identity.display(), directory.acronym(&name));
            }
        }
        Ok(())
    }
}
