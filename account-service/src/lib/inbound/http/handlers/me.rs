use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::signup::AccountData;
use super::ApiError;
use crate::domain::account::ports::SessionServicePort;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// Protected "who am I" lookup for the identity behind the access token.
pub async fn me(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
) -> Result<(StatusCode, Json<AccountData>), ApiError> {
    state
        .session_service
        .get_account(&authenticated.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| (StatusCode::OK, Json(account.into())))
}
