use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenClass;
use super::errors::TokenError;

/// Codec for signed, expiring tokens.
///
/// Serves both token classes with a single symmetric key; the class
/// check is the gate's responsibility, not the codec's. Uses HS256
/// (HMAC with SHA-256) and rejects any token whose header advertises a
/// different signing algorithm.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec from a symmetric signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint a signed token for a subject.
    ///
    /// Builds claims with `iat = now` and `exp = now + ttl` and signs
    /// them. Access and refresh TTLs are configured independently by
    /// the caller.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn encode(
        &self,
        subject_id: i64,
        token_class: TokenClass,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject_id, token_class, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Verifies the signature against the configured secret, checks
    /// that the token has not expired, and checks that the header
    /// algorithm is the expected HMAC one. A token signed with a
    /// substituted algorithm fails with `InvalidSignature`.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not verify, or the signing
    ///   algorithm was substituted
    /// * `Expired` - Token is past its `exp`
    /// * `Malformed` - Token is structurally invalid or a required
    ///   claim is missing or of the wrong type
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // No grace window: a token is invalid the moment `exp` passes
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
