use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::AppState;

use super::session::token_from_headers;

/// Session-cookie authentication middleware.
///
/// If `APP_PASSWORD` is set, every request must carry a cookie naming a
/// session opened through `/api/login`.
/// If it is unset, the dashboard is open (local / dev mode).
pub async fn require_session(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if is_authenticated(&state, req.headers()).await {
        next.run(req).await
    } else {
        AppError::Unauthorized.into_response()
    }
}

/// True when auth is disabled or the request carries a live session.
pub async fn is_authenticated(state: &AppState, headers: &axum::http::HeaderMap) -> bool {
    if !state.config.auth_enabled() {
        return true;
    }

    match token_from_headers(headers) {
        Some(token) => state.sessions.is_active(token).await,
        None => false,
    }
}
