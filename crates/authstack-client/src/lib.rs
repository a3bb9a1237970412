//! Endpoint-pinned signing HTTP client for AuthStack.
//!
//! This crate decorates an HTTP transport with the AuthStack signing
//! protocol: every outgoing request is rewritten to a fixed, pre-configured
//! endpoint, signed via [`authstack_auth::RequestSigner`], and then
//! dispatched. Pinning the endpoint means callers cannot redirect a
//! supposedly-authenticated client to an arbitrary host by setting their
//! own destination.
//!
//! # Usage
//!
//! ```rust,no_run
//! use authstack_client::SignedClient;
//!
//! # async fn run() -> Result<(), authstack_client::ClientError> {
//! let client = SignedClient::new("https://api.example.com", "api-key-id", "supersecret", false)?;
//!
//! let req = http::Request::builder()
//!     .method("GET")
//!     .uri("/resource")
//!     .body(Vec::new())
//!     .expect("request");
//!
//! let resp = client.send(req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - The pinned signing client
//! - [`config`] - Environment-driven client configuration
//! - [`error`] - Client error types

pub mod client;
pub mod config;
pub mod error;

pub use client::SignedClient;
pub use config::ClientConfig;
pub use error::ClientError;
