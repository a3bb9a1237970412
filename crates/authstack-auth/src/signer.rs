//! Attaching authentication headers to outgoing requests.

use chrono::{SecondsFormat, Utc};
use http::{HeaderValue, Request};
use tracing::debug;

use crate::canonical::compute_hmac_hex;
use crate::error::AuthError;
use crate::{KEY_ID_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Signs outgoing HTTP requests with HMAC authentication headers.
///
/// A signer holds the key identifier and shared secret for its lifetime.
/// Signing reads only the request and the wall clock, so one instance can
/// sign any number of requests concurrently.
///
/// # Examples
///
/// ```
/// use authstack_auth::{RequestSigner, SIGNATURE_HEADER};
///
/// let signer = RequestSigner::new("api-key-id", "supersecret").unwrap();
/// let req = http::Request::builder()
///     .method("GET")
///     .uri("https://api.example.com/resource")
///     .body(())
///     .unwrap();
///
/// let signed = signer.sign(req);
/// assert!(signed.headers().contains_key(SIGNATURE_HEADER));
/// ```
#[derive(Debug, Clone)]
pub struct RequestSigner {
    key_id: HeaderValue,
    secret: String,
}

impl RequestSigner {
    /// Create a signer from a key identifier and shared secret.
    ///
    /// The identifier is public and transmitted in the clear with every
    /// signed request; the secret never leaves the signer.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidKeyId`] if the identifier contains bytes
    /// that cannot appear in an HTTP header value.
    pub fn new(key_id: &str, secret: impl Into<String>) -> Result<Self, AuthError> {
        let key_id = HeaderValue::from_str(key_id)
            .map_err(|_| AuthError::InvalidKeyId(key_id.to_owned()))?;

        Ok(Self {
            key_id,
            secret: secret.into(),
        })
    }

    /// Attach the authentication headers to a request and return it.
    ///
    /// Generates an RFC 3339 timestamp at second precision, computes the
    /// signature over (method, path, timestamp), and sets the signature,
    /// key-id, and timestamp headers. The timestamp header carries the
    /// exact string that was signed, never a re-serialized form.
    ///
    /// The method and path are read as-is from the request, so callers must
    /// finalize any routing or rewriting before signing. Signing cannot
    /// fail; re-signing a request replaces the previous headers.
    #[must_use]
    pub fn sign<B>(&self, mut req: Request<B>) -> Request<B> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let signature = compute_hmac_hex(
            &self.secret,
            &[req.method().as_str(), req.uri().path(), &timestamp],
        );

        debug!(
            method = %req.method(),
            path = %req.uri().path(),
            key_id = ?self.key_id,
            timestamp = %timestamp,
            "signing request"
        );

        let headers = req.headers_mut();
        headers.insert(
            SIGNATURE_HEADER,
            HeaderValue::from_str(&signature).expect("hex digest is a valid header value"),
        );
        headers.insert(KEY_ID_HEADER, self.key_id.clone());
        headers.insert(
            TIMESTAMP_HEADER,
            HeaderValue::from_str(&timestamp).expect("RFC 3339 timestamp is a valid header value"),
        );

        req
    }
}
