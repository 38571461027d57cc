//! Session provider: target endpoint and login state.
//!
//! The session is read from an existing CF CLI home (`<home>/.cf/config.json`). This command never
//! writes it; `cf login` and `cf api` own that file.

use crate::error::ApiError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the directory that contains `.cf/`.
pub const CF_HOME_ENV: &str = "CF_HOME";

/// Source of endpoint and authentication state.
pub trait SessionProvider: Send + Sync {
    /// Configured API endpoint, if any.
    fn api_endpoint(&self) -> Option<String>;

    /// Access token including its scheme (e.g. `bearer eyJ...`), if logged in.
    fn access_token(&self) -> Option<String>;

    /// Name of the logged-in user, when known.
    fn user_name(&self) -> Option<String>;

    fn is_endpoint_configured(&self) -> bool {
        self.api_endpoint().map_or(false, |e| !e.trim().is_empty())
    }

    fn is_authenticated(&self) -> bool {
        self.access_token().map_or(false, |t| !t.trim().is_empty())
    }
}

/// Fixed session values. Used by embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub endpoint: Option<String>,
    pub access_token: Option<String>,
    pub user_name: Option<String>,
}

impl StaticSession {
    pub fn logged_in(endpoint: &str, user_name: &str) -> Self {
        Self {
            endpoint: Some(endpoint.to_string()),
            access_token: Some("bearer test-token".to_string()),
            user_name: Some(user_name.to_string()),
        }
    }
}

impl SessionProvider for StaticSession {
    fn api_endpoint(&self) -> Option<String> {
        self.endpoint.clone()
    }

    fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }

    fn user_name(&self) -> Option<String> {
        self.user_name.clone()
    }
}

/// On-disk layout of `.cf/config.json`; only the fields this command reads.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CfConfigFile {
    #[serde(default)]
    target: String,
    #[serde(default)]
    access_token: String,
    #[serde(default, rename = "SSLDisabled")]
    ssl_disabled: bool,
}

/// Session backed by a CF CLI home directory.
#[derive(Debug, Clone, Default)]
pub struct CfHomeSession {
    endpoint: Option<String>,
    access_token: Option<String>,
    user_name: Option<String>,
    ssl_disabled: bool,
}

impl CfHomeSession {
    /// Load the session from `cf_home`, `$CF_HOME` or the user's home directory, in that order.
    /// A missing file is an empty session, not an error.
    pub fn load(cf_home: Option<&Path>) -> Result<Self, ApiError> {
        let Some(path) = resolve_config_path(cf_home) else {
            debug!("No home directory found; using empty session");
            return Ok(Self::default());
        };
        Self::load_from_file(&path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ApiError> {
        if !path.exists() {
            debug!(path = %path.display(), "CF config not found; using empty session");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ApiError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file: CfConfigFile = serde_json::from_str(&contents).map_err(|e| {
            ApiError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let access_token = non_empty(file.access_token);
        let user_name = access_token.as_deref().and_then(user_name_from_token);
        Ok(Self {
            endpoint: non_empty(file.target),
            access_token,
            user_name,
            ssl_disabled: file.ssl_disabled,
        })
    }

    /// Replace the target endpoint, keeping the login state.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = non_empty(endpoint.into());
        self
    }

    pub fn ssl_disabled(&self) -> bool {
        self.ssl_disabled
    }
}

impl SessionProvider for CfHomeSession {
    fn api_endpoint(&self) -> Option<String> {
        self.endpoint.clone()
    }

    fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }

    fn user_name(&self) -> Option<String> {
        self.user_name.clone()
    }
}

/// Path of `.cf/config.json` for the given or discovered home directory.
pub fn resolve_config_path(cf_home: Option<&Path>) -> Option<PathBuf> {
    let home = match cf_home {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::var(CF_HOME_ENV) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => directories::BaseDirs::new()?.home_dir().to_path_buf(),
        },
    };
    Some(home.join(".cf").join("config.json"))
}

/// Extract the `user_name` claim from a JWT access token. The signature is not checked; the
/// value is only used for display.
pub fn user_name_from_token(token: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct Claims {
        user_name: Option<String>,
    }

    let raw = token
        .strip_prefix("bearer ")
        .or_else(|| token.strip_prefix("Bearer "))
        .unwrap_or(token);
    let payload = raw.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims.user_name
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
