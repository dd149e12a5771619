use std::collections::HashMap;
use std::sync::Arc;

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "wagerbook_session";

/// In-memory login sessions keyed by an opaque random token.
///
/// Sessions do not survive a restart. Expired entries are purged whenever a
/// session is created or checked.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, DateTime<Utc>>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(ttl_secs.max(1)),
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Start a session and return its token.
    pub async fn create(&self) -> Uuid {
        let token = Uuid::new_v4();
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires| *expires > now);
        sessions.insert(token, now + self.ttl);
        token
    }

    /// True while `token` names a live session.
    pub async fn is_active(&self, token: Uuid) -> bool {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&token) {
                Some(expires) if *expires > now => return true,
                None => return false,
                Some(_) => {}
            }
        }
        self.sessions.write().await.remove(&token);
        false
    }

    pub async fn revoke(&self, token: Uuid) {
        self.sessions.write().await.remove(&token);
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Pull the session token out of the request's `Cookie` headers.
pub fn token_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(token: Uuid, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

pub fn expired_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
