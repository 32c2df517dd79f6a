use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Issuer embedded in every minted token.
pub const ISSUER: &str = "account-service";

/// Discriminator between the two token classes.
///
/// A refresh token must never authorize a protected resource and an
/// access token must never be accepted by the refresh endpoint; the
/// class is always checked explicitly, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Access,
    Refresh,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Access => write!(f, "access"),
            TokenClass::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed token payload.
///
/// All fields are required; a token missing any of them (or carrying a
/// wrongly-typed value, e.g. an unknown `type`) fails decoding as
/// malformed. Claims are immutable once minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated account identifier.
    pub sub: i64,

    /// Token class discriminator.
    #[serde(rename = "type")]
    pub token_class: TokenClass,

    /// Issuer.
    pub iss: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Mint claims for a subject with `iat = now` and `exp = now + ttl`.
    pub fn new(subject_id: i64, token_class: TokenClass, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: subject_id,
            token_class,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_timing() {
        let claims = Claims::new(7, TokenClass::Access, Duration::minutes(15));

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.token_class, TokenClass::Access);
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_class_serialization() {
        assert_eq!(
            serde_json::to_string(&TokenClass::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenClass::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn test_unknown_token_class_rejected() {
        let result = serde_json::from_str::<TokenClass>("\"session\"");
        assert!(result.is_err());
    }
}
