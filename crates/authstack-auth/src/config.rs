//! Validity-window configuration for request validation.

/// Default validity window, in seconds, for signed requests.
const DEFAULT_VALIDITY_SECS: u64 = 60;

/// Configuration for the validation side.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// How long, in seconds, a signed request remains acceptable after
    /// issuance.
    pub validity_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            validity_secs: DEFAULT_VALIDITY_SECS,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `AUTH_VALIDITY_SECONDS`; unset or malformed values fall back
    /// to the default of 60 seconds.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AUTH_VALIDITY_SECONDS") {
            if let Ok(secs) = v.parse() {
                config.validity_secs = secs;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.validity_secs, 60);
    }

    #[test]
    fn test_should_round_trip_through_serde() {
        let config = AuthConfig { validity_secs: 300 };
        let json = serde_json::to_string(&config).expect("test serialize");
        assert_eq!(json, r#"{"validitySecs":300}"#);

        let back: AuthConfig = serde_json::from_str(&json).expect("test deserialize");
        assert_eq!(back.validity_secs, 300);
    }
}
