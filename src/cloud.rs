//! Platform API Abstraction
//!
//! Read-only interface to the Cloud Controller resources the organization summary needs. Each
//! query returns a value, an explicit absence (`Ok(None)`), or a transport fault. The HTTP
//! implementation lives in [`client`]; tests substitute their own implementations.

use crate::error::TransportError;
use crate::org::model::{DomainRef, OrganizationRef, QuotaRecord, SpaceRef};
use async_trait::async_trait;

pub mod client;
mod wire;

pub use client::CloudControllerClient;

/// Platform API client trait
#[async_trait]
pub trait CloudController: Send + Sync {
    /// Look up an organization by its exact name.
    async fn find_organization(&self, name: &str)
        -> Result<Option<OrganizationRef>, TransportError>;

    /// Domains shared across the whole platform.
    async fn shared_domains(&self) -> Result<Vec<DomainRef>, TransportError>;

    /// Domains owned by one organization.
    async fn owned_domains(&self, org_guid: &str) -> Result<Vec<DomainRef>, TransportError>;

    /// Organization quota definition by guid.
    async fn org_quota(&self, quota_guid: &str) -> Result<Option<QuotaRecord>, TransportError>;

    /// Spaces belonging to one organization.
    async fn spaces(&self, org_guid: &str) -> Result<Vec<SpaceRef>, TransportError>;

    /// Space quota definition by guid.
    async fn space_quota(&self, quota_guid: &str)
        -> Result<Option<QuotaRecord>, TransportError>;
}
