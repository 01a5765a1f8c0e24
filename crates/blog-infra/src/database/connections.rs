#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations when the server starts.
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            run_migrations: true,
        }
    }
}

/// Pooled connection to the blog database.
///
/// Opened once at startup and shared by every request; [`close`] is a
/// one-time teardown step.
///
/// [`close`]: DatabaseConnections::close
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            pool = config.max_connections,
            "Blog database connected"
        );

        Ok(Self { main })
    }

    /// Close the pool. Clones of `main` handed out earlier stop working.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.main.close_by_ref().await?;
        tracing::info!("Blog database connection closed");
        Ok(())
    }
}
