//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cloud::{CloudController, CloudControllerClient};
use crate::config::{AppConfig, ConfigLoader};
use crate::error::ApiError;
use crate::org::OrgCommandService;
use crate::session::{CfHomeSession, SessionProvider};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_org_guid, format_org_summary_json, format_org_summary_text};

/// Runtime context for CLI execution: configuration, session and platform client.
pub struct RunContext {
    config: AppConfig,
    session: Arc<dyn SessionProvider>,
    client: Arc<dyn CloudController>,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_with_override(config_path)?;
        Self::from_config(config)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: AppConfig) -> Result<Self, ApiError> {
        let mut session = CfHomeSession::load(config.session.cf_home.as_deref())?;
        if let Some(ref endpoint) = config.api.endpoint {
            debug!(endpoint = %endpoint, "Using endpoint from configuration");
            session = session.with_endpoint(endpoint.clone());
        }
        let skip_ssl_validation = config.api.skip_ssl_validation || session.ssl_disabled();
        let session: Arc<dyn SessionProvider> = Arc::new(session);
        let client = CloudControllerClient::with_ssl_validation(
            &config.api,
            Arc::clone(&session),
            skip_ssl_validation,
        )?;
        Ok(Self {
            config,
            session,
            client: Arc::new(client),
        })
    }

    /// Create run context around an explicit session and client.
    pub fn with_parts(
        config: AppConfig,
        session: Arc<dyn SessionProvider>,
        client: Arc<dyn CloudController>,
    ) -> Self {
        Self {
            config,
            session,
            client,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        info!(command = %name, "Command started");

        let rt = if tokio::runtime::Handle::try_current().is_ok() {
            return Err(ApiError::RuntimeError(
                "Cannot run a command from within an async runtime context".to_string(),
            ));
        } else {
            tokio::runtime::Runtime::new()
                .map_err(|e| ApiError::RuntimeError(format!("Failed to create runtime: {}", e)))?
        };

        let result = rt.block_on(self.execute_inner(command));
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(_) => info!(command = %name, elapsed_ms, "Command finished"),
            Err(ref e) => warn!(command = %name, elapsed_ms, error = %e, "Command failed"),
        }
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Org { name, guid, format } => self.handle_org(name, *guid, format).await,
        }
    }

    async fn handle_org(&self, name: &str, guid: bool, format: &str) -> Result<String, ApiError> {
        let session = self.session.as_ref();
        let client = self.client.as_ref();
        if guid {
            let result = OrgCommandService::guid(session, client, name).await?;
            return Ok(format_org_guid(&result));
        }
        let result = OrgCommandService::summary(session, client, name).await?;
        if format == "json" {
            format_org_summary_json(&result)
        } else {
            Ok(format_org_summary_text(&result))
        }
    }
}
