use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;

use super::login::TokenPairData;
use super::ApiError;
use crate::domain::account::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

/// Rotate tokens from a `Bearer <refresh_token>` header.
///
/// Not behind the access-token middleware: the service gates the
/// request itself, in refresh mode.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<TokenPairData>), ApiError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let pair = state
        .session_service
        .refresh(authorization)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::OK, Json((&pair).into())))
}
