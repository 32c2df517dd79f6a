use auth::GateError;
use auth::PasswordError;
use auth::PolicyViolation;
use auth::TokenError;
use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid account ID: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all account and session operations.
///
/// Every failure is terminal for its call; there is no internal
/// recovery or retry path. Login failures for an unknown email and a
/// wrong password both surface `InvalidCredentials` so responses never
/// reveal whether an identifier exists.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(#[from] AccountIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Signup validation errors
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("{0}")]
    WeakPassword(#[from] PolicyViolation),

    // Credential and token errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Credential(#[from] GateError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Domain-level errors
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}
