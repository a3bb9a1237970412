//! Canonical field concatenation and HMAC computation.
//!
//! Both the signer and the validator reduce a request to the same ordered
//! list of string fields — (method, path, timestamp) — and feed it through
//! [`compute_hmac`]. The fields are concatenated with no separator, so the
//! canonical form relies on the fixed-format timestamp to keep the
//! concatenation unambiguous against the preceding path.

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the raw HMAC-SHA256 over the fields, concatenated in order.
///
/// The secret is used as the HMAC key, interpreted as raw bytes. The output
/// is always 32 bytes. Identical inputs always produce identical output;
/// there is no internal randomness or state.
///
/// The raw form is what validation compares; [`compute_hmac_hex`] is the
/// wire encoding.
#[must_use]
pub fn compute_hmac(secret: &str, fields: &[&str]) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can accept keys of any length");
    for field in fields {
        mac.update(field.as_bytes());
    }
    mac.finalize().into_bytes().to_vec()
}

/// Compute the HMAC-SHA256 over the fields and hex-encode it.
///
/// This is the form transmitted in the signature header: 64 lowercase hex
/// characters.
///
/// # Examples
///
/// ```
/// use authstack_auth::canonical::compute_hmac_hex;
///
/// let sig = compute_hmac_hex("mysecret", &["foo", "bar"]);
/// assert_eq!(sig.len(), 64);
/// ```
#[must_use]
pub fn compute_hmac_hex(secret: &str, fields: &[&str]) -> String {
    hex::encode(compute_hmac(secret, fields))
}
