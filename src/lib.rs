pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod stats;

use crate::api::session::SessionStore;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: AppConfig,
    pub sessions: SessionStore,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(
        db: sqlx::SqlitePool,
        config: AppConfig,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let sessions = SessionStore::new(config.session_ttl_secs);
        Self {
            db,
            config,
            sessions,
            metrics_handle,
        }
    }
}
