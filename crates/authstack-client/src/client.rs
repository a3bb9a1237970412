//! The pinned signing client.
//!
//! [`SignedClient`] wraps a [`reqwest::Client`]: before dispatch, the
//! request's scheme and host are replaced with the configured endpoint and
//! the AuthStack headers are attached. Pinning happens before signing so
//! the signature covers the final request path.

use authstack_auth::RequestSigner;
use http::Request;
use http::uri::{Authority, PathAndQuery, Scheme, Uri};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// An HTTP client that signs every request and pins it to one endpoint.
///
/// The client holds no mutable state; it can be cloned cheaply and shared
/// across tasks.
#[derive(Debug, Clone)]
pub struct SignedClient {
    scheme: Scheme,
    authority: Authority,
    signer: RequestSigner,
    http: reqwest::Client,
}

impl SignedClient {
    /// Create a client bound to `endpoint`.
    ///
    /// The endpoint must be an absolute URI carrying at least a scheme and
    /// host (for example `https://api.example.com`); its path is ignored.
    /// When `allow_insecure` is true, TLS certificate verification is
    /// disabled — for test environments only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if the endpoint does not
    /// parse or lacks a scheme or host, [`ClientError::Auth`] if the key
    /// identifier is not a legal header value, or
    /// [`ClientError::Transport`] if the underlying client cannot be
    /// built.
    pub fn new(
        endpoint: &str,
        key_id: &str,
        secret: &str,
        allow_insecure: bool,
    ) -> Result<Self, ClientError> {
        let uri: Uri = endpoint
            .parse()
            .map_err(|_| ClientError::InvalidEndpoint(endpoint.to_owned()))?;
        let scheme = uri
            .scheme()
            .cloned()
            .ok_or_else(|| ClientError::InvalidEndpoint(endpoint.to_owned()))?;
        let authority = uri
            .authority()
            .cloned()
            .ok_or_else(|| ClientError::InvalidEndpoint(endpoint.to_owned()))?;

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(allow_insecure)
            .build()?;

        Ok(Self {
            scheme,
            authority,
            signer: RequestSigner::new(key_id, secret)?,
            http,
        })
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// As for [`SignedClient::new`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.endpoint,
            &config.api_key_id,
            &config.secret,
            config.allow_insecure,
        )
    }

    /// Sign the request and send it to the configured endpoint.
    ///
    /// The request's scheme and host are replaced with the configured
    /// endpoint regardless of what the caller set; the path and query are
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] if the pinned URI cannot be built,
    /// or [`ClientError::Transport`] if dispatch fails.
    pub async fn send(&self, req: Request<Vec<u8>>) -> Result<reqwest::Response, ClientError> {
        let req = self.prepare(req)?;
        let req = reqwest::Request::try_from(req)?;
        Ok(self.http.execute(req).await?)
    }

    /// Pin the request to the configured endpoint and attach auth headers.
    fn prepare(&self, mut req: Request<Vec<u8>>) -> Result<Request<Vec<u8>>, ClientError> {
        let mut parts = req.uri().clone().into_parts();
        parts.scheme = Some(self.scheme.clone());
        parts.authority = Some(self.authority.clone());
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        let pinned = Uri::from_parts(parts).map_err(http::Error::from)?;

        debug!(uri = %pinned, "pinned request to configured endpoint");

        *req.uri_mut() = pinned;
        Ok(self.signer.sign(req))
    }
}
