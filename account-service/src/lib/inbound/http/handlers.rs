use auth::TokenError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::errors::AccountError;

pub mod login;
pub mod me;
pub mod refresh;
pub mod signup;

/// API-level error carrying the HTTP status and the message serialized
/// as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            // Credential and decode-side token failures deny with 401
            AccountError::InvalidCredentials | AccountError::Credential(_) => {
                ApiError::Unauthorized(err.to_string())
            }

            // A signing failure while minting is an internal fault, not
            // a caller credential defect
            AccountError::Token(TokenError::EncodingFailed(_)) => {
                ApiError::InternalServerError(err.to_string())
            }
            AccountError::Token(_) => ApiError::Unauthorized(err.to_string()),

            // Request validation failures
            AccountError::PasswordMismatch
            | AccountError::WeakPassword(_)
            | AccountError::InvalidEmail(_)
            | AccountError::InvalidAccountId(_) => ApiError::BadRequest(err.to_string()),

            AccountError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),

            AccountError::Password(_)
            | AccountError::DatabaseError(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::GateError;

    use super::*;

    #[test]
    fn test_decode_side_token_errors_map_to_unauthorized() {
        assert!(matches!(
            ApiError::from(AccountError::Token(TokenError::Expired)),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AccountError::Token(TokenError::InvalidSignature)),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AccountError::Credential(GateError::MissingCredential)),
            ApiError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_minting_failure_maps_to_internal_error() {
        let err = AccountError::Token(TokenError::EncodingFailed("signing failed".to_string()));
        assert!(matches!(
            ApiError::from(err),
            ApiError::InternalServerError(_)
        ));
    }
}
