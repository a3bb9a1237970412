//! Error types for request signing and validation.
//!
//! Every validation failure is represented by a distinct [`AuthError`]
//! variant. All failures are terminal for the request — retrying a failed
//! cryptographic check or an expired signature can never succeed without a
//! new request, so nothing here is retried internally.

/// Errors produced while constructing a signer or validating a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The key identifier contains bytes that cannot appear in an HTTP
    /// header value.
    #[error("Invalid key identifier: {0}")]
    InvalidKeyId(String),

    /// The signature header is absent from the request.
    #[error("Missing signature header")]
    MissingSignature,

    /// The timestamp header is absent from the request.
    #[error("Missing timestamp header")]
    MissingTimestamp,

    /// The signature header is not valid hex.
    #[error("Invalid signature encoding")]
    InvalidSignatureEncoding,

    /// The timestamp header does not parse as RFC 3339.
    #[error("Invalid timestamp format")]
    InvalidTimestampFormat,

    /// The timestamp is older than the validity window allows.
    #[error("Signature has expired")]
    ExpiredSignature,

    /// The recomputed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureMismatch,
}
