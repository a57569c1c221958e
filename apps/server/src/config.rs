//! Server configuration from environment variables.

use quotable_quote_source::DEFAULT_SOURCE_URL;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to. `QUOTABLE_LISTEN_ADDR`.
    pub listen_addr: String,
    /// SQLite database file path. `QUOTABLE_DB_PATH`.
    pub db_path: String,
    /// External quote source endpoint. `QUOTABLE_SOURCE_URL`.
    pub source_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("QUOTABLE_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_path: std::env::var("QUOTABLE_DB_PATH")
                .unwrap_or_else(|_| "data/quotable.db".to_string()),
            source_url: std::env::var("QUOTABLE_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
        }
    }
}
