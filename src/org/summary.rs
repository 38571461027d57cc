//! Summary aggregation: resolver output to a display-ready, immutable summary.

use crate::org::quota_format::format_quota;
use crate::org::resolver::ResolvedOrganization;
use crate::org::sort::sort_names;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Organization quota as shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaSummary {
    pub name: String,
    /// Parenthesized clause produced by [`format_quota`].
    pub description: String,
}

impl QuotaSummary {
    /// `<name> <description>`, the form used on the `quota:` line.
    pub fn display_line(&self) -> String {
        format!("{} {}", self.name, self.description)
    }
}

/// Everything the full `org` view shows. Name lists are sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub name: String,
    pub guid: String,
    pub domains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<QuotaSummary>,
    pub spaces: Vec<String>,
    pub space_quotas: Vec<String>,
}

impl OrganizationSummary {
    pub fn aggregate(resolved: &ResolvedOrganization) -> Self {
        let domains: BTreeSet<&str> = resolved.domains.iter().map(|d| d.name.as_str()).collect();
        let space_quotas: BTreeSet<&str> = resolved
            .spaces
            .iter()
            .filter_map(|s| s.quota.as_ref())
            .map(|q| q.name.as_str())
            .collect();

        Self {
            name: resolved.organization.name.clone(),
            guid: resolved.organization.guid.clone(),
            domains: sort_names(domains),
            quota: resolved.quota.as_ref().map(|q| QuotaSummary {
                name: q.name.clone(),
                description: format_quota(q),
            }),
            spaces: sort_names(resolved.spaces.iter().map(|s| s.space.name.as_str())),
            space_quotas: sort_names(space_quotas),
        }
    }
}
