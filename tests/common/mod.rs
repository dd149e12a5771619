use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use wagerbook::api::router::create_router;
use wagerbook::config::AppConfig;
use wagerbook::db::{bet_repo, parlay_repo};
use wagerbook::models::{Bet, ParlayLeg};
use wagerbook::AppState;

/// Open a private in-memory database and run all migrations.
///
/// A single connection that never recycles keeps the in-memory database
/// alive for the whole test.
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    wagerbook::db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[allow(dead_code)]
pub fn test_config(app_password: Option<&str>) -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        app_password: app_password.map(String::from),
        session_ttl_secs: 3600,
        static_dir: None,
    }
}

#[allow(dead_code)]
pub async fn build_test_app(app_password: Option<&str>) -> (axum::Router, SqlitePool) {
    let pool = setup_test_db().await;
    let metrics_handle = wagerbook::metrics::init_metrics();
    let state = AppState::new(pool.clone(), test_config(app_password), metrics_handle);
    (create_router(state), pool)
}

/// Seed a bet row. Empty strings are stored as NULL.
#[allow(dead_code, clippy::too_many_arguments)]
pub async fn seed_bet(
    pool: &SqlitePool,
    date: &str,
    label: &str,
    stake: &str,
    odds: &str,
    to_win: &str,
    bet_type: &str,
    result: &str,
    balance: &str,
) -> i64 {
    let bet = Bet {
        id: 0,
        date: opt(date),
        bet: opt(label),
        stake: opt(stake),
        odds: opt(odds),
        to_win: opt(to_win),
        bet_type: opt(bet_type),
        result: opt(result),
        balance: opt(balance),
    };
    bet_repo::insert_bet(pool, &bet)
        .await
        .expect("Failed to seed bet")
}

/// Seed one leg of the parlay labelled `parlay_name`.
#[allow(dead_code)]
pub async fn seed_leg(
    pool: &SqlitePool,
    parlay_name: &str,
    date: &str,
    label: &str,
    odds: &str,
    leg_type: &str,
    result: &str,
) -> i64 {
    let leg = ParlayLeg {
        id: 0,
        parlay_name: parlay_name.into(),
        date: opt(date),
        individual_bet: opt(label),
        odds: opt(odds),
        leg_type: opt(leg_type),
        result: opt(result),
    };
    parlay_repo::insert_leg(pool, &leg)
        .await
        .expect("Failed to seed parlay leg")
}

/// GET `uri` and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Scrape `/metrics` and return the value of the `name` sample carrying
/// every `(label, value)` pair in `labels`, if present.
#[allow(dead_code)]
pub async fn scrape_counter(app: &axum::Router, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let prefix = format!("{name}{{");
    text.lines()
        .filter(|line| line.starts_with(&prefix))
        .find(|line| labels.iter().all(|(k, v)| line.contains(&format!("{k}=\"{v}\""))))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

#[allow(dead_code)]
fn opt(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
