//! Authentication core library
//!
//! Provides the token-based authentication building blocks used by the
//! account service:
//! - Password hashing (Argon2id) and password strength policy
//! - Signed, expiring access/refresh token encoding and decoding
//! - Bearer-header authorization gate enforcing the expected token class
//!
//! The library is stateless: the signing secret and TTLs are injected at
//! construction and every operation is safe to call concurrently.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use chrono::Duration;
//! use auth::{TokenClass, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.encode(42, TokenClass::Access, Duration::minutes(15)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```
//!
//! ## Gating a request
//! ```
//! use chrono::Duration;
//! use auth::{AuthGate, TokenClass, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let gate = AuthGate::new(codec.clone());
//!
//! let token = codec.encode(42, TokenClass::Access, Duration::minutes(15)).unwrap();
//! let header = format!("Bearer {token}");
//! let claims = gate.authorize(Some(&header), TokenClass::Access).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```

pub mod gate;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use gate::AuthGate;
pub use gate::GateError;
pub use password::policy;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PolicyViolation;
pub use token::Claims;
pub use token::TokenClass;
pub use token::TokenCodec;
pub use token::TokenError;
