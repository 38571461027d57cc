// Cloud Controller v2 request/response structures

use crate::org::model::{DomainRef, Limit, OrganizationRef, QuotaRecord, SpaceRef};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<T>>,
}

#[derive(Deserialize)]
pub(crate) struct Resource<T> {
    pub metadata: Metadata,
    pub entity: T,
}

#[derive(Deserialize)]
pub(crate) struct Metadata {
    pub guid: String,
}

#[derive(Deserialize)]
pub(crate) struct OrganizationEntity {
    pub name: String,
    #[serde(default)]
    pub quota_definition_guid: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct DomainEntity {
    pub name: String,
}

#[derive(Deserialize)]
pub(crate) struct SpaceEntity {
    pub name: String,
    #[serde(default)]
    pub space_quota_definition_guid: Option<String>,
}

/// Shared by organization and space quota definitions.
#[derive(Deserialize)]
pub(crate) struct QuotaEntity {
    pub name: String,
    #[serde(default)]
    pub non_basic_services_allowed: bool,
    #[serde(default)]
    pub total_services: i64,
    #[serde(default)]
    pub total_routes: i64,
    #[serde(default)]
    pub memory_limit: i64,
    #[serde(default = "unlimited")]
    pub instance_memory_limit: i64,
    #[serde(default = "unlimited")]
    pub app_instance_limit: i64,
    #[serde(default = "unlimited")]
    pub total_reserved_route_ports: i64,
}

fn unlimited() -> i64 {
    -1
}

impl Resource<OrganizationEntity> {
    pub fn into_model(self) -> OrganizationRef {
        OrganizationRef {
            name: self.entity.name,
            guid: self.metadata.guid,
            quota_guid: self.entity.quota_definition_guid,
        }
    }
}

impl Resource<SpaceEntity> {
    pub fn into_model(self) -> SpaceRef {
        SpaceRef {
            name: self.entity.name,
            guid: self.metadata.guid,
            quota_guid: self.entity.space_quota_definition_guid,
        }
    }
}

impl DomainEntity {
    pub fn into_shared(self) -> DomainRef {
        DomainRef::shared(self.name)
    }

    pub fn into_owned(self) -> DomainRef {
        DomainRef::owned(self.name)
    }
}

impl Resource<QuotaEntity> {
    pub fn into_model(self) -> QuotaRecord {
        let e = self.entity;
        QuotaRecord {
            name: e.name,
            memory_limit_mb: e.memory_limit,
            instance_memory_limit_mb: Limit::from_sentinel(e.instance_memory_limit),
            route_limit: e.total_routes,
            service_limit: e.total_services,
            paid_services_allowed: e.non_basic_services_allowed,
            app_instance_limit: Limit::from_sentinel(e.app_instance_limit),
            reserved_route_ports: Limit::from_sentinel(e.total_reserved_route_ports),
        }
    }
}
