use thiserror::Error;

use crate::token::Claims;
use crate::token::TokenClass;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Request-gating errors.
///
/// Codec failures pass through unchanged so callers see the precise
/// token error kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Missing Authorization header")]
    MissingCredential,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    MalformedCredential,

    #[error("Wrong token class: expected {expected}")]
    WrongTokenClass { expected: TokenClass },

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Bearer-token authorization gate.
///
/// The single choke-point deciding whether a caller is who they claim
/// to be: it extracts the token from a raw `Authorization` header,
/// decodes it, and enforces the expected token class. It knows nothing
/// about routes; every failure denies the request.
#[derive(Clone)]
pub struct AuthGate {
    codec: TokenCodec,
}

impl AuthGate {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Authorize a raw `Authorization` header value against an expected
    /// token class.
    ///
    /// On success returns the decoded claims; `sub` is then the trusted
    /// identity for the rest of the request.
    ///
    /// # Errors
    /// * `MissingCredential` - Header absent or empty
    /// * `MalformedCredential` - No token segment after the scheme word
    /// * `WrongTokenClass` - Token class does not match `expected`
    /// * `Token` - Signature, expiry, or structural failure from the codec
    pub fn authorize(
        &self,
        header: Option<&str>,
        expected: TokenClass,
    ) -> Result<Claims, GateError> {
        let header = match header {
            Some(value) if !value.is_empty() => value,
            _ => return Err(GateError::MissingCredential),
        };

        // Expect a "Bearer <token>" shape; a header containing only the
        // scheme word has no token segment.
        let mut segments = header.split_whitespace();
        let _scheme = segments.next();
        let token = segments.next().ok_or(GateError::MalformedCredential)?;

        let claims = self.codec.decode(token)?;

        if claims.token_class != expected {
            return Err(GateError::WrongTokenClass { expected });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn gate() -> AuthGate {
        AuthGate::new(TokenCodec::new(SECRET))
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    #[test]
    fn test_authorize_access_token() {
        let gate = gate();
        let token = gate
            .codec
            .encode(42, TokenClass::Access, Duration::minutes(15))
            .unwrap();

        let claims = gate
            .authorize(Some(&bearer(&token)), TokenClass::Access)
            .expect("Authorization failed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.token_class, TokenClass::Access);
    }

    #[test]
    fn test_authorize_missing_header() {
        let result = gate().authorize(None, TokenClass::Access);
        assert_eq!(result, Err(GateError::MissingCredential));
    }

    #[test]
    fn test_authorize_empty_header() {
        let result = gate().authorize(Some(""), TokenClass::Access);
        assert_eq!(result, Err(GateError::MissingCredential));
    }

    #[test]
    fn test_authorize_scheme_without_token() {
        let result = gate().authorize(Some("Bearer"), TokenClass::Access);
        assert_eq!(result, Err(GateError::MalformedCredential));
    }

    #[test]
    fn test_authorize_rejects_refresh_token_on_access_route() {
        let gate = gate();
        let token = gate
            .codec
            .encode(42, TokenClass::Refresh, Duration::days(3))
            .unwrap();

        let result = gate.authorize(Some(&bearer(&token)), TokenClass::Access);
        assert_eq!(
            result,
            Err(GateError::WrongTokenClass {
                expected: TokenClass::Access
            })
        );
    }

    #[test]
    fn test_authorize_rejects_access_token_on_refresh_route() {
        let gate = gate();
        let token = gate
            .codec
            .encode(42, TokenClass::Access, Duration::minutes(15))
            .unwrap();

        let result = gate.authorize(Some(&bearer(&token)), TokenClass::Refresh);
        assert_eq!(
            result,
            Err(GateError::WrongTokenClass {
                expected: TokenClass::Refresh
            })
        );
    }

    #[test]
    fn test_authorize_propagates_tampered_signature() {
        let gate = gate();
        let other = TokenCodec::new(b"another_secret_32_bytes_long_key!!");
        let token = other
            .encode(42, TokenClass::Access, Duration::minutes(15))
            .unwrap();

        let result = gate.authorize(Some(&bearer(&token)), TokenClass::Access);
        assert_eq!(result, Err(GateError::Token(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_authorize_propagates_expired() {
        let gate = gate();
        let token = gate
            .codec
            .encode(42, TokenClass::Access, Duration::minutes(-5))
            .unwrap();

        let result = gate.authorize(Some(&bearer(&token)), TokenClass::Access);
        assert_eq!(result, Err(GateError::Token(TokenError::Expired)));
    }
}
