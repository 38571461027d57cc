//! Org command presentation: guid, summary text and summary json.

use crate::cli::output::ok_banner;
use crate::error::ApiError;
use crate::org::{OrgGuidResult, OrgSummaryResult};
use comfy_table::presets::NOTHING;
use comfy_table::Table;

/// Guid-only mode prints the bare identifier.
pub fn format_org_guid(result: &OrgGuidResult) -> String {
    result.guid.clone()
}

/// Full summary: banner, `OK`, then the aligned key/value block. The quota row is omitted when
/// the organization has no quota.
pub fn format_org_summary_text(result: &OrgSummaryResult) -> String {
    let summary = &result.summary;
    let user = result.user_name.as_deref().unwrap_or("unknown user");

    let mut out = format!(
        "Getting info for org {} as {}...\n{}\n\n{}:\n",
        summary.name,
        user,
        ok_banner(),
        summary.name
    );

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.add_row(vec!["domains:".to_string(), summary.domains.join(", ")]);
    if let Some(ref quota) = summary.quota {
        table.add_row(vec!["quota:".to_string(), quota.display_line()]);
    }
    table.add_row(vec!["spaces:".to_string(), summary.spaces.join(", ")]);
    table.add_row(vec![
        "space quotas:".to_string(),
        summary.space_quotas.join(", "),
    ]);
    if let Some(column) = table.column_mut(0) {
        column.set_padding((0, 2));
    }
    if let Some(column) = table.column_mut(1) {
        column.set_padding((0, 0));
    }

    let rendered = table.to_string();
    for line in rendered.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn format_org_summary_json(result: &OrgSummaryResult) -> Result<String, ApiError> {
    serde_json::to_string_pretty(&result.summary)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize summary: {}", e)))
}
