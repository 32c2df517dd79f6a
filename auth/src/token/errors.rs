use thiserror::Error;

/// Error type for token encode/decode operations.
///
/// Decode failures are deliberately split into distinct kinds so callers
/// can map them to precise responses. All of them deny the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
