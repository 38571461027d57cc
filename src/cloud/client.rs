//! HTTP client for the Cloud Controller v2 API.

use super::wire::{DomainEntity, OrganizationEntity, Page, QuotaEntity, Resource, SpaceEntity};
use super::CloudController;
use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::org::model::{DomainRef, OrganizationRef, QuotaRecord, SpaceRef};
use crate::session::SessionProvider;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Upper bound on followed `next_url` links for a single listing.
const MAX_PAGES: usize = 1000;

// Helper function to map HTTP errors to TransportError
fn map_http_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        TransportError::RequestFailed(format!("Connection error: {}", error))
    } else {
        TransportError::RequestFailed(format!("HTTP error: {}", error))
    }
}

fn build_http_client(config: &ApiConfig, skip_ssl_validation: bool) -> Result<Client, TransportError> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .danger_accept_invalid_certs(skip_ssl_validation)
        .build()
        .map_err(|e| TransportError::RequestFailed(format!("Failed to create HTTP client: {}", e)))
}

/// Cloud Controller client. Endpoint and token are read from the session per request.
pub struct CloudControllerClient {
    client: Client,
    session: Arc<dyn SessionProvider>,
}

impl CloudControllerClient {
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self, TransportError> {
        Self::with_ssl_validation(config, session, config.skip_ssl_validation)
    }

    /// Like [`CloudControllerClient::new`], with an explicit TLS verification choice.
    pub fn with_ssl_validation(
        config: &ApiConfig,
        session: Arc<dyn SessionProvider>,
        skip_ssl_validation: bool,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            client: build_http_client(config, skip_ssl_validation)?,
            session,
        })
    }

    fn url(&self, path: &str) -> Result<String, TransportError> {
        let endpoint = self.session.api_endpoint().ok_or_else(|| {
            TransportError::RequestFailed("No API endpoint configured".to_string())
        })?;
        Ok(format!("{}{}", endpoint.trim_end_matches('/'), path))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) if token.contains(' ') => request.header("Authorization", token),
            Some(token) => request.header("Authorization", format!("bearer {}", token)),
            None => request,
        }
    }

    /// GET a JSON document. `Ok(None)` on 404.
    async fn get_optional<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, TransportError> {
        debug!(url, "GET");
        let request = self.authorize(self.client.get(url).query(query));
        let response = request.send().await.map_err(map_http_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    TransportError::AuthenticationFailed(format!("{}: {}", status, error_text))
                }
                _ => TransportError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                    message: error_text,
                },
            });
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| TransportError::InvalidResponse(format!("{}: {}", url, e)))
    }

    /// GET every page of a listing, following `next_url`.
    async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Resource<T>>, TransportError> {
        let mut resources = Vec::new();
        let mut url = self.url(path)?;
        let mut query: Vec<(&str, String)> = query.to_vec();

        for _ in 0..MAX_PAGES {
            let page: Page<T> = self.get_optional(&url, &query).await?.ok_or_else(|| {
                TransportError::UnexpectedStatus {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    url: url.clone(),
                    message: "listing not found".to_string(),
                }
            })?;
            resources.extend(page.resources);
            match page.next_url {
                Some(next) if !next.is_empty() => {
                    // next_url already carries its query string
                    url = self.url(&next)?;
                    query.clear();
                }
                _ => return Ok(resources),
            }
        }
        Err(TransportError::InvalidResponse(format!(
            "Pagination for {} exceeded {} pages",
            path, MAX_PAGES
        )))
    }

    async fn get_quota(&self, path: &str) -> Result<Option<QuotaRecord>, TransportError> {
        let url = self.url(path)?;
        let resource: Option<Resource<QuotaEntity>> = self.get_optional(&url, &[]).await?;
        Ok(resource.map(|r| r.into_model()))
    }
}

#[async_trait]
impl CloudController for CloudControllerClient {
    async fn find_organization(
        &self,
        name: &str,
    ) -> Result<Option<OrganizationRef>, TransportError> {
        let query = [("q", format!("name:{}", name))];
        let orgs: Vec<Resource<OrganizationEntity>> =
            self.get_all("/v2/organizations", &query).await?;
        let mut orgs: Vec<OrganizationRef> = orgs.into_iter().map(|r| r.into_model()).collect();
        // the name filter may match case-insensitively; prefer an exact match
        let exact = orgs.iter().position(|org| org.name == name);
        Ok(match exact {
            Some(index) => Some(orgs.swap_remove(index)),
            None => orgs.into_iter().next(),
        })
    }

    async fn shared_domains(&self) -> Result<Vec<DomainRef>, TransportError> {
        let domains: Vec<Resource<DomainEntity>> = self.get_all("/v2/shared_domains", &[]).await?;
        Ok(domains.into_iter().map(|r| r.entity.into_shared()).collect())
    }

    async fn owned_domains(&self, org_guid: &str) -> Result<Vec<DomainRef>, TransportError> {
        let path = format!("/v2/organizations/{}/private_domains", org_guid);
        let domains: Vec<Resource<DomainEntity>> = self.get_all(&path, &[]).await?;
        Ok(domains.into_iter().map(|r| r.entity.into_owned()).collect())
    }

    async fn org_quota(&self, quota_guid: &str) -> Result<Option<QuotaRecord>, TransportError> {
        self.get_quota(&format!("/v2/quota_definitions/{}", quota_guid))
            .await
    }

    async fn spaces(&self, org_guid: &str) -> Result<Vec<SpaceRef>, TransportError> {
        let path = format!("/v2/organizations/{}/spaces", org_guid);
        let spaces: Vec<Resource<SpaceEntity>> = self.get_all(&path, &[]).await?;
        Ok(spaces.into_iter().map(|r| r.into_model()).collect())
    }

    async fn space_quota(
        &self,
        quota_guid: &str,
    ) -> Result<Option<QuotaRecord>, TransportError> {
        self.get_quota(&format!("/v2/space_quota_definitions/{}", quota_guid))
            .await
    }
}
