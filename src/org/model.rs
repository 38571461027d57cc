//! Read-only views of platform resources, materialized fresh per invocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource limit that may be unlimited.
///
/// The platform encodes "unlimited" as a negative integer (canonically -1). That encoding stops
/// at the client boundary; everything downstream branches on this enum instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    Unlimited,
    Finite(u64),
}

impl Limit {
    /// Translate a raw wire value into a limit.
    pub fn from_sentinel(raw: i64) -> Self {
        if raw < 0 {
            Limit::Unlimited
        } else {
            Limit::Finite(raw as u64)
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Limit::Unlimited)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => write!(f, "unlimited"),
            Limit::Finite(n) => write!(f, "{}", n),
        }
    }
}

/// Organization identity plus the reference to its quota definition, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub name: String,
    pub guid: String,
    pub quota_guid: Option<String>,
}

/// Named bundle of resource limits attached to an organization or a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    pub name: String,
    /// Total memory in megabytes.
    pub memory_limit_mb: i64,
    pub instance_memory_limit_mb: Limit,
    /// Rendered verbatim; no unlimited sentinel applies.
    pub route_limit: i64,
    /// Rendered verbatim; no unlimited sentinel applies.
    pub service_limit: i64,
    pub paid_services_allowed: bool,
    pub app_instance_limit: Limit,
    pub reserved_route_ports: Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainScope {
    /// Visible to every organization on the platform.
    Shared,
    /// Owned by the organization being summarized.
    Owned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRef {
    pub name: String,
    pub scope: DomainScope,
}

impl DomainRef {
    pub fn shared(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: DomainScope::Shared,
        }
    }

    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: DomainScope::Owned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRef {
    pub name: String,
    pub guid: String,
    pub quota_guid: Option<String>,
}
