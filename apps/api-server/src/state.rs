//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogPostStore};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresBlogPostRepository};

use crate::server::ServerError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryBlogPostStore::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Build the state for the given database configuration.
    ///
    /// Without a database the posts live in memory. A configured database
    /// that cannot be reached is an error.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self, ServerError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        Self::open_database(config).await
    }

    #[cfg(feature = "postgres")]
    async fn open_database(config: &DatabaseConfig) -> Result<Self, ServerError> {
        use migration::{Migrator, MigratorTrait};

        let connections = DatabaseConnections::init(config)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        if config.run_migrations {
            Migrator::up(&connections.main, None)
                .await
                .map_err(|e| ServerError::Database(e.to_string()))?;
            tracing::info!("Database migrations applied");
        }

        let repo = PostgresBlogPostRepository::new(connections.main.clone());
        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(repo),
            db: Some(Arc::new(connections)),
        })
    }

    #[cfg(not(feature = "postgres"))]
    async fn open_database(config: &DatabaseConfig) -> Result<Self, ServerError> {
        tracing::warn!(
            max_connections = config.max_connections,
            "Built without postgres feature - ignoring DATABASE_URL, using in-memory store"
        );
        Ok(Self::in_memory())
    }

    /// Name of the backing store, reported by the health check.
    pub fn store_kind(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if self.db.is_some() {
            return "postgres";
        }
        "memory"
    }

    /// Release the database connection, if any.
    pub async fn close(&self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connection: {}", e);
            }
        }
    }
}
