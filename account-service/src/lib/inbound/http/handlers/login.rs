use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::account::models::TokenPair;
use crate::domain::account::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, Json<TokenPairData>), ApiError> {
    let pair = state
        .session_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::OK, Json((&pair).into())))
}

/// Login request body; `username` carries the account email.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPairData {
    pub user_id: i64,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<&TokenPair> for TokenPairData {
    fn from(pair: &TokenPair) -> Self {
        Self {
            user_id: pair.account_id.0,
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        }
    }
}
