//! CLI presentation: text and json formatters per command family.

mod org;

pub use org::{format_org_guid, format_org_summary_json, format_org_summary_text};
