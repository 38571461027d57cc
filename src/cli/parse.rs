//! CLI parse: clap types for cforg. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cforg - Organization summaries for Cloud Controller platforms
#[derive(Parser)]
#[command(name = "cforg")]
#[command(about = "Show organization info from a Cloud Controller API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show org info
    #[command(
        override_usage = "cforg org ORG [--guid]",
        after_help = "SEE ALSO:\n   org-users, orgs"
    )]
    Org {
        /// Organization name
        #[arg(value_name = "ORG")]
        name: String,

        /// Retrieve and display the given org's guid.  All other output for the org is suppressed.
        #[arg(long)]
        guid: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
