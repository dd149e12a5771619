use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM bets")
        .fetch_one(&state.db)
        .await
    {
        Ok((bets,)) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "bets": bets })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the ledger");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "db": "disconnected" })),
            )
        }
    }
}
