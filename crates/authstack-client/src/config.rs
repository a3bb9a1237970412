//! Environment-driven configuration for the signing client.

use crate::error::ClientError;

/// Configuration for [`SignedClient`](crate::SignedClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint every request is pinned to (scheme + host).
    pub endpoint: String,
    /// Public key identifier sent with every request.
    pub api_key_id: String,
    /// Shared secret used for signing. Never transmitted.
    pub secret: String,
    /// Disable TLS certificate verification. Non-production use only.
    pub allow_insecure: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// `AUTH_ENDPOINT`, `AUTH_API_KEY_ID`, and `AUTH_SECRET_KEY` are
    /// required; `AUTH_ALLOW_INSECURE` is optional and defaults to false.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if a required variable is unset.
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: require_var("AUTH_ENDPOINT")?,
            api_key_id: require_var("AUTH_API_KEY_ID")?,
            secret: require_var("AUTH_SECRET_KEY")?,
            allow_insecure: std::env::var("AUTH_ALLOW_INSECURE")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
        })
    }
}

/// Read a required environment variable.
fn require_var(name: &str) -> Result<String, ClientError> {
    std::env::var(name).map_err(|_| ClientError::Config(format!("{name} is not set")))
}

/// Parse a boolean environment value: `1` or `true` (any case) is true.
fn parse_bool(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("yes"));
    }
}
