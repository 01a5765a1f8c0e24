//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    /// Port to listen on. `0` picks a free port.
    pub port: u16,
    /// Worker threads. Defaults to the number of physical cores.
    pub workers: Option<usize>,
    /// Without a database the server keeps posts in memory.
    pub database: Option<DatabaseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
            database: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                run_migrations: env::var("DB_RUN_MIGRATIONS")
                    .map(|v| v != "false" && v != "0")
                    .unwrap_or(defaults.run_migrations),
                ..defaults
            }
        });

        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            workers: parse_var("WORKERS"),
            database,
        }
    }

    /// Address string for logs, e.g. `127.0.0.1:8080`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_in_memory() {
        let config = AppConfig::default();
        assert!(config.database.is_none());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
