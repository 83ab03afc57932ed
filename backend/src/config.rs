//! Environment-driven application settings.

use std::env;

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind, `RATINGS_IP`, default `0.0.0.0`.
    pub ip: String,
    /// Port to bind, `RATINGS_PORT`, default `2000`.
    pub port: u16,
    /// SQLite database path, `RATINGS_DB`, default `ratings.sqlite`.
    pub db: String,
    /// Username for the bootstrap rater seeded into an empty database,
    /// `RATINGS_ADMIN_USER`.
    pub admin_username: String,
    /// Password for the bootstrap rater, `RATINGS_ADMIN_PASSWORD`.
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            ip: env::var("RATINGS_IP").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RATINGS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            db: env::var("RATINGS_DB").unwrap_or_else(|_| "ratings.sqlite".to_string()),
            admin_username: env::var("RATINGS_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("RATINGS_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "changeme".to_string()),
        }
    }
}
