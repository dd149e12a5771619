use wagerbook::api::router::create_router;
use wagerbook::config::AppConfig;
use wagerbook::{db, metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("Opening ledger database...");
    let pool = db::init_pool(&config.database_url).await?;
    tracing::info!("Ledger database ready");

    if config.auth_enabled() {
        tracing::info!(
            session_ttl_secs = config.session_ttl_secs,
            "Dashboard password gate enabled"
        );
    } else {
        tracing::warn!("APP_PASSWORD is not set, dashboard is open to anyone who can reach it");
    }

    if let Some(dir) = &config.static_dir {
        tracing::info!(static_dir = %dir, "Serving dashboard assets");
    }

    let metrics_handle = metrics::init_metrics();
    let state = AppState::new(pool, config, metrics_handle);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
