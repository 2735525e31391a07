use thiserror::Error;

/// Error type for token decoding.
///
/// Every variant means "malformed token" and callers reject uniformly;
/// the distinction exists for operator logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token does not have exactly three non-empty segments")]
    InvalidFormat,

    #[error("token segment is not url-safe base64")]
    InvalidEncoding,

    #[error("token signature does not match")]
    SignatureMismatch,

    #[error("token header is not valid JSON")]
    InvalidHeader,

    #[error("token payload is not a valid claims object: {0}")]
    InvalidClaims(String),

    #[error("claims serialization failed: {0}")]
    Serialization(String),
}
