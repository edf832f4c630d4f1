use thiserror::Error;

/// Error type for JWT operations.
///
/// Every verification failure collapses into `InvalidToken`; the cause is
/// never carried to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Signing secret must not be empty")]
    MissingSecret,

    #[error("Token lifetime out of range: {0} minutes")]
    InvalidExpiration(i64),
}
