use std::sync::Arc;
use std::time::Duration;

use auth::AuthGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::refresh::refresh;
use super::handlers::signup::signup;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::service::SessionService;
use crate::outbound::repositories::account::PostgresAccountRepository;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService<PostgresAccountRepository>>,
    pub auth_gate: Arc<AuthGate>,
}

pub fn create_router(
    session_service: Arc<SessionService<PostgresAccountRepository>>,
    auth_gate: Arc<AuthGate>,
) -> Router {
    let state = AppState {
        session_service,
        auth_gate,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        // Refresh gates itself in refresh mode; it must not sit behind
        // the access-token middleware
        .route("/api/auth/refresh", get(refresh));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
