//! Organization domain: model, quota formatting, ordering, resolution and summary.
//!
//! The resolver talks to a [`crate::cloud::CloudController`] and the aggregator turns its raw
//! output into an [`OrganizationSummary`] ready for presentation.

pub mod commands;
pub mod model;
pub mod quota_format;
pub mod resolver;
pub mod sort;
pub mod summary;

pub use commands::{OrgCommandService, OrgGuidResult, OrgSummaryResult};
pub use model::{DomainRef, DomainScope, Limit, OrganizationRef, QuotaRecord, SpaceRef};
pub use quota_format::format_quota;
pub use resolver::{OrgResolver, ResolvedOrganization, ResolvedSpace, SessionIdentity};
pub use sort::sort_names;
pub use summary::{OrganizationSummary, QuotaSummary};
