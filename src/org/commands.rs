use crate::cloud::CloudController;
use crate::error::ApiError;
use crate::org::resolver::OrgResolver;
use crate::org::summary::OrganizationSummary;
use crate::session::SessionProvider;

pub struct OrgCommandService;

/// Result of `org --guid`.
#[derive(Debug, Clone)]
pub struct OrgGuidResult {
    pub guid: String,
}

/// Result of `org`: the summary plus the user it was fetched as.
#[derive(Debug, Clone)]
pub struct OrgSummaryResult {
    pub summary: OrganizationSummary,
    pub user_name: Option<String>,
}

impl OrgCommandService {
    pub async fn guid(
        session: &dyn SessionProvider,
        client: &dyn CloudController,
        org_name: &str,
    ) -> Result<OrgGuidResult, ApiError> {
        let guid = OrgResolver::new(session, client).resolve_guid(org_name).await?;
        Ok(OrgGuidResult { guid })
    }

    pub async fn summary(
        session: &dyn SessionProvider,
        client: &dyn CloudController,
        org_name: &str,
    ) -> Result<OrgSummaryResult, ApiError> {
        let resolver = OrgResolver::new(session, client);
        let identity = resolver.preflight()?;
        let resolved = resolver.resolve(org_name).await?;
        Ok(OrgSummaryResult {
            summary: OrganizationSummary::aggregate(&resolved),
            user_name: identity.user_name,
        })
    }
}
