use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::errors::TokenError;

/// Encode bytes as URL-safe base64 without padding (RFC 4648 §5).
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a URL-safe base64 token segment.
///
/// Segments are unpadded on the wire, so missing padding is the norm.
/// Any byte outside the url-safe alphabet is rejected, including `+`,
/// `/`, whitespace, and `=`.
///
/// # Errors
/// * `InvalidEncoding` - Segment contains a non-alphabet byte or has an
///   impossible length
pub fn decode(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::InvalidEncoding)
}
