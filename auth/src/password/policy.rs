use thiserror::Error;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;
const SPECIAL_CHARS: &str = "!@#~$%^&*()+|_";

/// First policy rule a password fails, with its human-readable reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Password must be at least 8 characters long")]
    TooShort,

    #[error("Password must be less than 128 characters long")]
    TooLong,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one number")]
    MissingDigit,

    #[error("Password must contain at least one special character")]
    MissingSpecial,
}

/// Validate a password against the strength policy.
///
/// Rules are checked in a fixed order and evaluation short-circuits on
/// the first failure: length-low, length-high, uppercase, lowercase,
/// digit, special.
pub fn validate(password: &str) -> Result<(), PolicyViolation> {
    if password.len() < MIN_LENGTH {
        Err(PolicyViolation::TooShort)
    } else if password.len() > MAX_LENGTH {
        Err(PolicyViolation::TooLong)
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Err(PolicyViolation::MissingUppercase)
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Err(PolicyViolation::MissingLowercase)
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Err(PolicyViolation::MissingDigit)
    } else if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        Err(PolicyViolation::MissingSpecial)
    } else {
        Ok(())
    }
}
