//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log records (e.g. "org", "org.guid").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Org { guid: true, .. } => "org.guid".to_string(),
        Commands::Org { .. } => "org".to_string(),
    }
}
