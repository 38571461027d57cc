//! Error types for the organization summary command.

use thiserror::Error;

/// Faults raised while talking to the platform API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Unexpected status {status} from {url}: {message}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Command-level errors. Every variant is terminal for the current invocation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No API endpoint set. Use 'cf login' or 'cf api' to target an endpoint.")]
    NoEndpointConfigured,

    #[error("Not logged in. Use 'cf login' to log in.")]
    NotAuthenticated,

    #[error("Organization {0} not found")]
    OrganizationNotFound(String),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
