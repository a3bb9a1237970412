//! Error types for the signing client.

/// Errors produced while constructing or using the signing client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured endpoint is not an absolute URI with a scheme and
    /// host.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The signer could not be constructed.
    #[error(transparent)]
    Auth(#[from] authstack_auth::AuthError),

    /// The request could not be rebuilt against the configured endpoint.
    #[error("Failed to build request: {0}")]
    Request(#[from] http::Error),

    /// The underlying transport failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
