//! Shared-secret HMAC request authentication for AuthStack.
//!
//! This crate implements both sides of a symmetric request-authentication
//! scheme: a [`RequestSigner`] that attaches a time-bound HMAC-SHA256
//! signature to an outgoing HTTP request as headers, and a [`Validator`]
//! that recomputes and checks that signature on the receiving side before
//! the request is dispatched to business logic.
//!
//! # Overview
//!
//! The two sides never communicate directly — they agree only through the
//! wire format (three request headers) and the shared secret. The signature
//! covers the request method, path, and an RFC 3339 timestamp; the
//! validator rejects requests whose timestamp is older than its configured
//! validity window, which is the replay defense.
//!
//! # Usage
//!
//! ```rust
//! use authstack_auth::{RequestSigner, Validator};
//!
//! let signer = RequestSigner::new("api-key-id", "supersecret").unwrap();
//! let req = http::Request::builder()
//!     .method("GET")
//!     .uri("https://api.example.com/resource")
//!     .body(())
//!     .unwrap();
//!
//! let (parts, ()) = signer.sign(req).into_parts();
//!
//! let validator = Validator::new(60);
//! assert!(validator.validate(&parts, "supersecret").is_ok());
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical field concatenation and HMAC computation
//! - [`config`] - Validity-window configuration
//! - [`error`] - Authentication error types
//! - [`signer`] - Attaching authentication headers to outgoing requests
//! - [`validator`] - Checking authentication headers on incoming requests

pub mod canonical;
pub mod config;
pub mod error;
pub mod signer;
pub mod validator;

/// Header carrying the hex-encoded HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Header carrying the public key identifier.
pub const KEY_ID_HEADER: &str = "x-api-key-id";

/// Header carrying the RFC 3339 request timestamp.
pub const TIMESTAMP_HEADER: &str = "x-timestamp";

pub use canonical::{compute_hmac, compute_hmac_hex};
pub use config::AuthConfig;
pub use error::AuthError;
pub use signer::RequestSigner;
pub use validator::Validator;
