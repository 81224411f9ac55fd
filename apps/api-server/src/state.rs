//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::BlogPostService;
use scribe_core::ports::BlogPostRepository;
use scribe_infra::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "postgres")]
use scribe_infra::PostgresBlogPostRepository;

/// Failures while opening the document store.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[cfg(feature = "postgres")]
    #[error("Database initialization failed: {0}")]
    Database(#[from] migration::DbErr),

    #[error("A database URL was configured but the postgres feature is disabled")]
    PostgresDisabled,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: BlogPostService,
}

impl AppState {
    /// Build the application state from database configuration.
    ///
    /// Without a database the server runs on the in-memory store. A configured
    /// database that cannot be reached is an error, not a fallback.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, StateError> {
        let repo = open_repository(db_config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::with_repository(repo))
    }

    pub fn with_repository(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts: BlogPostService::new(repo),
        }
    }
}

/// Open the blog post store, running migrations when it is PostgreSQL.
pub async fn open_repository(
    db_config: Option<&DatabaseConfig>,
) -> Result<Arc<dyn BlogPostRepository>, StateError> {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(Arc::new(InMemoryBlogPostRepository::new()));
    };

    #[cfg(feature = "postgres")]
    {
        let db = scribe_infra::database::connect(config).await?;
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
        Ok(Arc::new(PostgresBlogPostRepository::new(db)))
    }

    #[cfg(not(feature = "postgres"))]
    {
        tracing::error!(url_len = config.url.len(), "Database configured without postgres support");
        Err(StateError::PostgresDisabled)
    }
}
