//! Quota formatting: one parenthesized clause describing every limit in a fixed order.

use crate::org::model::{Limit, QuotaRecord};

/// Format a quota as `(<memory>, <instance memory>, <routes>, <services>, <paid>, <app
/// instances>, <route ports>)`.
pub fn format_quota(quota: &QuotaRecord) -> String {
    let clauses = [
        format!("{}M memory limit", quota.memory_limit_mb),
        format_megabytes(quota.instance_memory_limit_mb, "instance memory limit"),
        format!("{} routes", quota.route_limit),
        format!("{} services", quota.service_limit),
        format_paid_services(quota.paid_services_allowed).to_string(),
        format!("{} app instance limit", quota.app_instance_limit),
        format!("{} route ports", quota.reserved_route_ports),
    ];
    format!("({})", clauses.join(", "))
}

fn format_megabytes(limit: Limit, label: &str) -> String {
    match limit {
        Limit::Unlimited => format!("unlimited {}", label),
        Limit::Finite(mb) => format!("{}M {}", mb, label),
    }
}

fn format_paid_services(allowed: bool) -> &'static str {
    if allowed {
        "paid services allowed"
    } else {
        "paid services disallowed"
    }
}
