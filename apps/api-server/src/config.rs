//! Application configuration loaded from environment variables.

use std::env;

use scribe_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// `None` runs the server against the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            workers: parse_var("WORKERS").unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            }),
            database: Self::database_from_env("DATABASE_URL"),
        }
    }

    /// Database settings keyed off the connection string in `url_var`.
    ///
    /// The server reads `DATABASE_URL`; the test harness reads
    /// `TEST_DATABASE_URL` so it never touches the real store.
    pub fn database_from_env(url_var: &str) -> Option<DatabaseConfig> {
        let url = env::var(url_var).ok().filter(|u| !u.is_empty())?;

        let mut config = DatabaseConfig::new(url);
        if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
            config.max_connections = max;
        }
        if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
            config.min_connections = min;
        }
        Some(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
