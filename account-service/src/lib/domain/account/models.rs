use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::AccountIdError;
use crate::account::errors::EmailError;

/// Account aggregate entity.
///
/// Holds the stored credential (email + password hash) read during
/// token issuance. The plaintext password is never stored.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account unique identifier type.
///
/// Database-assigned numeric identity; also the token subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        s.parse::<i64>()
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account.
///
/// Carries both password fields; the service checks they match and
/// enforces the strength policy before hashing.
#[derive(Debug)]
pub struct SignupCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password: String,
    pub confirm_password: String,
}

/// Account fields ready for insertion, with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Freshly minted access/refresh token pair.
///
/// Transient response value; it is never persisted and has no stored
/// lifecycle.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub account_id: AccountId,
    pub access_token: String,
    pub refresh_token: String,
}
