//! Resource resolution: preconditions, organization lookup, and the sub-resource fetches that
//! feed the summary.

use crate::cloud::CloudController;
use crate::error::{ApiError, TransportError};
use crate::org::model::{DomainRef, OrganizationRef, QuotaRecord, SpaceRef};
use crate::session::SessionProvider;
use futures::future::try_join_all;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Endpoint and user behind a session that passed the precondition checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub endpoint: String,
    pub user_name: Option<String>,
}

/// A space together with its quota, when it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpace {
    pub space: SpaceRef,
    pub quota: Option<QuotaRecord>,
}

/// Raw resolver output, in backend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrganization {
    pub organization: OrganizationRef,
    pub domains: Vec<DomainRef>,
    pub quota: Option<QuotaRecord>,
    pub spaces: Vec<ResolvedSpace>,
}

pub struct OrgResolver<'a> {
    session: &'a dyn SessionProvider,
    client: &'a dyn CloudController,
}

impl<'a> OrgResolver<'a> {
    pub fn new(session: &'a dyn SessionProvider, client: &'a dyn CloudController) -> Self {
        Self { session, client }
    }

    /// Check that an endpoint is targeted and a user is logged in, in that order.
    pub fn preflight(&self) -> Result<SessionIdentity, ApiError> {
        let endpoint = match self.session.api_endpoint() {
            Some(e) if self.session.is_endpoint_configured() => e,
            _ => return Err(ApiError::NoEndpointConfigured),
        };
        if !self.session.is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }
        Ok(SessionIdentity {
            endpoint,
            user_name: self.session.user_name(),
        })
    }

    /// Resolve only the organization's guid. No other resource is fetched.
    pub async fn resolve_guid(&self, name: &str) -> Result<String, ApiError> {
        self.preflight()?;
        Ok(self.lookup(name).await?.guid)
    }

    /// Resolve the organization and everything its summary shows.
    pub async fn resolve(&self, name: &str) -> Result<ResolvedOrganization, ApiError> {
        self.preflight()?;
        let organization = self.lookup(name).await?;

        let (domains, quota, spaces) = futures::try_join!(
            self.fetch_domains(&organization.guid),
            self.fetch_org_quota(organization.quota_guid.as_deref()),
            self.fetch_spaces(&organization.guid),
        )?;

        info!(
            org = %organization.name,
            domains = domains.len(),
            spaces = spaces.len(),
            has_quota = quota.is_some(),
            "Resolved organization"
        );
        Ok(ResolvedOrganization {
            organization,
            domains,
            quota,
            spaces,
        })
    }

    async fn lookup(&self, name: &str) -> Result<OrganizationRef, ApiError> {
        debug!(org = name, "Looking up organization");
        self.client
            .find_organization(name)
            .await?
            .ok_or_else(|| ApiError::OrganizationNotFound(name.to_string()))
    }

    async fn fetch_domains(&self, org_guid: &str) -> Result<Vec<DomainRef>, TransportError> {
        let (shared, owned) = futures::try_join!(
            self.client.shared_domains(),
            self.client.owned_domains(org_guid),
        )?;
        let mut seen = BTreeSet::new();
        Ok(shared
            .into_iter()
            .chain(owned)
            .filter(|d| seen.insert(d.name.clone()))
            .collect())
    }

    async fn fetch_org_quota(
        &self,
        quota_guid: Option<&str>,
    ) -> Result<Option<QuotaRecord>, TransportError> {
        match quota_guid {
            Some(guid) => self.client.org_quota(guid).await,
            None => Ok(None),
        }
    }

    /// Spaces first, then each distinct space quota exactly once.
    async fn fetch_spaces(&self, org_guid: &str) -> Result<Vec<ResolvedSpace>, TransportError> {
        let spaces = self.client.spaces(org_guid).await?;

        let quota_guids: BTreeSet<&str> = spaces
            .iter()
            .filter_map(|s| s.quota_guid.as_deref())
            .collect();
        let quotas = try_join_all(quota_guids.iter().map(|guid| async move {
            let quota = self.client.space_quota(guid).await?;
            Ok::<_, TransportError>((guid.to_string(), quota))
        }))
        .await?;
        let quotas: HashMap<String, Option<QuotaRecord>> = quotas.into_iter().collect();

        Ok(spaces
            .into_iter()
            .map(|space| {
                let quota = space
                    .quota_guid
                    .as_ref()
                    .and_then(|guid| quotas.get(guid).cloned().flatten());
                ResolvedSpace { space, quota }
            })
            .collect())
    }
}
