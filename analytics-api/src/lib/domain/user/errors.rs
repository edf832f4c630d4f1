use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Password policy failures at registration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Classification of a [`UserError`] for the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request fields failed shape validation
    InvalidInput,
    /// Username or email already registered
    ValidationConflict,
    /// Login rejected; never says why
    AuthenticationFailure,
    /// Bearer token rejected; never says why
    TokenInvalid,
    /// Anything unexpected
    InternalFailure,
}

/// Top-level error for all user-related operations
///
/// The `Display` text of the conflict and authentication variants is the
/// user-facing message and must not name the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("Username already exists, please choose another")]
    UsernameAlreadyExists(String),

    #[error("Email is already registered, please choose another")]
    EmailAlreadyExists(String),

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthorized,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ErrorKind::InvalidInput,
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ErrorKind::ValidationConflict
            }
            UserError::InvalidCredentials => ErrorKind::AuthenticationFailure,
            UserError::Unauthorized => ErrorKind::TokenInvalid,
            UserError::DatabaseError(_) | UserError::Unknown(_) => ErrorKind::InternalFailure,
        }
    }
}
