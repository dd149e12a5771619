use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://wagerbook.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    // Dashboard password (optional; unset disables the login gate)
    pub app_password: Option<String>,
    pub session_ttl_secs: i64,

    // Pre-built dashboard assets served for non-API paths
    pub static_dir: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()?,

            app_password: env::var("APP_PASSWORD").ok().filter(|p| !p.is_empty()),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| "86400".into())
                .parse()
                .unwrap_or(86_400),

            static_dir: env::var("STATIC_DIR").ok().filter(|d| !d.is_empty()),
        })
    }

    /// Returns true if a dashboard password is configured.
    pub fn auth_enabled(&self) -> bool {
        self.app_password.is_some()
    }
}
