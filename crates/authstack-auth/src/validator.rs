//! Checking authentication headers on incoming requests.
//!
//! Validation is a single-pass state machine: header presence, signature
//! decoding, timestamp parsing, the validity-window check, and finally the
//! signature comparison. The first failed check rejects the request; there
//! are no retries and no partial acceptance.

use chrono::{DateTime, Utc};
use http::request::Parts;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::compute_hmac;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::{SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Validates the authentication headers on incoming HTTP requests.
///
/// A validator is configured with a validity window at construction and
/// holds no other state, so one instance can serve concurrent validations
/// without coordination.
///
/// # Examples
///
/// ```
/// use authstack_auth::{RequestSigner, Validator};
///
/// let signer = RequestSigner::new("api-key-id", "supersecret").unwrap();
/// let req = http::Request::builder()
///     .method("GET")
///     .uri("https://api.example.com/resource")
///     .body(())
///     .unwrap();
/// let (parts, ()) = signer.sign(req).into_parts();
///
/// let validator = Validator::new(60);
/// assert!(validator.validate(&parts, "supersecret").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    validity_secs: u64,
}

impl Validator {
    /// Create a validator with the given validity window in seconds.
    #[must_use]
    pub fn new(validity_secs: u64) -> Self {
        Self { validity_secs }
    }

    /// Create a validator from configuration.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.validity_secs)
    }

    /// The configured validity window in seconds.
    #[must_use]
    pub fn validity_secs(&self) -> u64 {
        self.validity_secs
    }

    /// Validate the authentication headers on a request.
    ///
    /// This checks, in order:
    ///
    /// 1. The signature header is present.
    /// 2. The timestamp header is present.
    /// 3. The signature decodes from hex.
    /// 4. The timestamp parses as RFC 3339.
    /// 5. The timestamp is within the validity window.
    /// 6. The signature recomputed over (method, path, raw timestamp
    ///    header string) matches the provided signature, compared in
    ///    constant time over the raw bytes.
    ///
    /// `Ok(())` means the request is accepted. Every rejection is terminal
    /// for that request.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] variant naming the first check that
    /// failed.
    pub fn validate(&self, parts: &Parts, secret: &str) -> Result<(), AuthError> {
        let sig_header = parts
            .headers
            .get(SIGNATURE_HEADER)
            .ok_or(AuthError::MissingSignature)?;
        let ts_header = parts
            .headers
            .get(TIMESTAMP_HEADER)
            .ok_or(AuthError::MissingTimestamp)?;

        let provided = hex::decode(sig_header.as_bytes())
            .map_err(|_| AuthError::InvalidSignatureEncoding)?;

        let ts_str = ts_header
            .to_str()
            .map_err(|_| AuthError::InvalidTimestampFormat)?;
        let issued = DateTime::parse_from_rfc3339(ts_str)
            .map_err(|_| AuthError::InvalidTimestampFormat)?;

        self.check_window(issued.timestamp())?;

        // The timestamp string is signed exactly as transmitted.
        let expected = compute_hmac(secret, &[parts.method.as_str(), parts.uri.path(), ts_str]);

        if provided.as_slice().ct_eq(expected.as_slice()).into() {
            debug!(
                method = %parts.method,
                path = %parts.uri.path(),
                "signature verification succeeded"
            );
            Ok(())
        } else {
            debug!(
                method = %parts.method,
                path = %parts.uri.path(),
                "signature mismatch"
            );
            Err(AuthError::SignatureMismatch)
        }
    }

    /// Reject timestamps older than the validity window.
    ///
    /// The bound is non-strict: a request exactly `validity_secs` old is
    /// rejected, one strictly newer is accepted. Expiry is the only time
    /// check — a timestamp in the future is accepted, tolerating signer
    /// clock drift.
    fn check_window(&self, issued_secs: i64) -> Result<(), AuthError> {
        let now = Utc::now().timestamp();
        let validity = i64::try_from(self.validity_secs).unwrap_or(i64::MAX);

        if now >= issued_secs.saturating_add(validity) {
            return Err(AuthError::ExpiredSignature);
        }

        if issued_secs > now {
            debug!(issued = issued_secs, now, "timestamp is in the future");
        }

        Ok(())
    }
}
