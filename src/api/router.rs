use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::metrics::track_requests;
use crate::AppState;
use super::auth::require_session;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Public routes, no session required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .route("/api/login", post(handlers::session::login))
        .route("/api/logout", post(handlers::session::logout))
        .route("/api/auth-status", get(handlers::session::auth_status));

    // Protected API routes, require a session cookie when APP_PASSWORD is set
    let protected = Router::new()
        // Summaries
        .route("/api/balance", get(handlers::summary::balance))
        .route("/api/singles", get(handlers::summary::singles))
        .route("/api/parlays", get(handlers::summary::parlays))
        .route("/api/summary", get(handlers::summary::summary))
        .route("/api/bettypes", get(handlers::summary::bet_types))
        // Ledger
        .route("/api/bets", get(handlers::bets::list))
        .route("/api/bets/types", get(handlers::bets::types))
        .route("/api/credits", get(handlers::bets::credits))
        .route("/api/parlay_bets", get(handlers::parlays::legs))
        // Analytics
        .route("/api/analytics/pnl-history", get(handlers::analytics::pnl_history))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    // CORS: the dashboard is normally served from the same origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = public
        .merge(protected)
        .route_layer(middleware::from_fn(track_requests));

    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
