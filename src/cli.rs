//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; the route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, FAILED_BANNER, OK_BANNER};
pub use parse::{Cli, Commands};
pub use presentation::{format_org_guid, format_org_summary_json, format_org_summary_text};
pub use route::RunContext;
