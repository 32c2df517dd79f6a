use auth::TokenClass;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::account::models::AccountId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type storing the authenticated identity in request extensions.
///
/// Downstream handlers treat `account_id` as the trusted identity; no
/// further identity checks happen per request.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// Middleware gating protected routes on a valid access token.
///
/// Every protected route passes through here before any state
/// mutation. A refresh token presented here is rejected with the same
/// 401 as any other invalid credential.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state
        .auth_gate
        .authorize(header, TokenClass::Access)
        .map_err(|e| {
            tracing::warn!("Access token validation failed: {}", e);
            ApiError::Unauthorized(e.to_string()).into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedAccount {
        account_id: AccountId(claims.sub),
    });

    Ok(next.run(req).await)
}
