//! In-memory CloudController with per-operation call counters.

use async_trait::async_trait;
use cforg::cloud::CloudController;
use cforg::error::TransportError;
use cforg::org::{DomainRef, Limit, OrganizationRef, QuotaRecord, SpaceRef};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct CallCounts {
    pub find_organization: AtomicUsize,
    pub shared_domains: AtomicUsize,
    pub owned_domains: AtomicUsize,
    pub org_quota: AtomicUsize,
    pub spaces: AtomicUsize,
    pub space_quota: AtomicUsize,
}

impl CallCounts {
    /// Calls to anything other than the organization lookup.
    pub fn sub_resource_calls(&self) -> usize {
        self.shared_domains.load(Ordering::SeqCst)
            + self.owned_domains.load(Ordering::SeqCst)
            + self.org_quota.load(Ordering::SeqCst)
            + self.spaces.load(Ordering::SeqCst)
            + self.space_quota.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct FakeCloud {
    pub orgs: Vec<OrganizationRef>,
    pub shared: Vec<DomainRef>,
    pub owned: HashMap<String, Vec<DomainRef>>,
    pub quotas: HashMap<String, QuotaRecord>,
    pub spaces: HashMap<String, Vec<SpaceRef>>,
    pub space_quotas: HashMap<String, QuotaRecord>,
    /// Operation name that fails with a transport fault.
    pub fail_on: Option<&'static str>,
    pub calls: CallCounts,
}

pub fn quota(
    name: &str,
    memory: i64,
    instance_memory: i64,
    routes: i64,
    services: i64,
    paid: bool,
    app_instances: i64,
    route_ports: i64,
) -> QuotaRecord {
    QuotaRecord {
        name: name.to_string(),
        memory_limit_mb: memory,
        instance_memory_limit_mb: Limit::from_sentinel(instance_memory),
        route_limit: routes,
        service_limit: services,
        paid_services_allowed: paid,
        app_instance_limit: Limit::from_sentinel(app_instances),
        reserved_route_ports: Limit::from_sentinel(route_ports),
    }
}

pub fn space(name: &str, quota_guid: Option<&str>) -> SpaceRef {
    SpaceRef {
        name: name.to_string(),
        guid: format!("{}-guid", name),
        quota_guid: quota_guid.map(|g| g.to_string()),
    }
}

impl FakeCloud {
    /// Organization `name` with guid `<name>-guid` and optional quota reference.
    pub fn with_org(mut self, name: &str, quota_guid: Option<&str>) -> Self {
        self.orgs.push(OrganizationRef {
            name: name.to_string(),
            guid: format!("{}-guid", name),
            quota_guid: quota_guid.map(|g| g.to_string()),
        });
        self
    }

    /// Scenario from the platform's acceptance suite: one shared and one owned domain, a quota
    /// with every limit set, two spaces with distinct space quotas.
    pub fn populated(org_name: &str) -> Self {
        let org_guid = format!("{}-guid", org_name);
        let mut cloud = FakeCloud::default().with_org(org_name, Some("quota-guid"));
        cloud.shared = vec![DomainRef::shared("shared.example.com")];
        cloud
            .owned
            .insert(org_guid.clone(), vec![DomainRef::owned("acme-apps.example.com")]);
        cloud.quotas.insert(
            "quota-guid".to_string(),
            quota("gold", 123, 456, 789, 987, true, 654, 321),
        );
        cloud.spaces.insert(
            org_guid,
            vec![
                space("SPACE-zulu", Some("sq-2-guid")),
                space("SPACE-alpha", Some("sq-1-guid")),
            ],
        );
        cloud.space_quotas.insert(
            "sq-1-guid".to_string(),
            quota("space-quota-b", 0, -1, 0, 0, false, -1, -1),
        );
        cloud.space_quotas.insert(
            "sq-2-guid".to_string(),
            quota("space-quota-a", 0, -1, 0, 0, false, -1, -1),
        );
        cloud
    }

    fn check(&self, op: &'static str, counter: &AtomicUsize) -> Result<(), TransportError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(op) {
            return Err(TransportError::UnexpectedStatus {
                status: 500,
                url: format!("fake://{}", op),
                message: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CloudController for FakeCloud {
    async fn find_organization(
        &self,
        name: &str,
    ) -> Result<Option<OrganizationRef>, TransportError> {
        self.check("find_organization", &self.calls.find_organization)?;
        Ok(self.orgs.iter().find(|o| o.name == name).cloned())
    }

    async fn shared_domains(&self) -> Result<Vec<DomainRef>, TransportError> {
        self.check("shared_domains", &self.calls.shared_domains)?;
        Ok(self.shared.clone())
    }

    async fn owned_domains(&self, org_guid: &str) -> Result<Vec<DomainRef>, TransportError> {
        self.check("owned_domains", &self.calls.owned_domains)?;
        Ok(self.owned.get(org_guid).cloned().unwrap_or_default())
    }

    async fn org_quota(&self, quota_guid: &str) -> Result<Option<QuotaRecord>, TransportError> {
        self.check("org_quota", &self.calls.org_quota)?;
        Ok(self.quotas.get(quota_guid).cloned())
    }

    async fn spaces(&self, org_guid: &str) -> Result<Vec<SpaceRef>, TransportError> {
        self.check("spaces", &self.calls.spaces)?;
        Ok(self.spaces.get(org_guid).cloned().unwrap_or_default())
    }

    async fn space_quota(
        &self,
        quota_guid: &str,
    ) -> Result<Option<QuotaRecord>, TransportError> {
        self.check("space_quota", &self.calls.space_quota)?;
        Ok(self.space_quotas.get(quota_guid).cloned())
    }
}
