use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics::counter;
use serde::Deserialize;
use serde_json::json;

use crate::api::auth::is_authenticated;
use crate::api::session::{expired_cookie, session_cookie, token_from_headers};
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/login: Open a dashboard session.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let Some(expected) = state.config.app_password.as_deref() else {
        return Json(json!({ "success": true })).into_response();
    };

    if body.password != expected {
        counter!("login_attempts_total", "outcome" => "rejected").increment(1);
        tracing::warn!("Dashboard login rejected");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Incorrect password" })),
        )
            .into_response();
    }

    let token = state.sessions.create().await;
    counter!("login_attempts_total", "outcome" => "success").increment(1);
    tracing::info!("Dashboard session opened");

    (
        [(SET_COOKIE, session_cookie(token, state.sessions.ttl_secs()))],
        Json(json!({ "success": true })),
    )
        .into_response()
}

/// GET /api/auth-status: Whether this request already holds a session.
pub async fn auth_status(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let authenticated = is_authenticated(&state, &headers).await;
    Json(json!({ "authenticated": authenticated }))
}

/// POST /api/logout: Drop the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = token_from_headers(&headers) {
        state.sessions.revoke(token).await;
        tracing::info!("Dashboard session closed");
    }

    (
        [(SET_COOKIE, expired_cookie())],
        Json(json!({ "success": true })),
    )
}
