//! Application state - shared across all handlers.

use std::sync::Arc;

use commune_core::ports::CommunityRepository;
use commune_infra::{DatabaseConfig, InMemoryCommunityRepository};

#[cfg(feature = "postgres")]
use commune_infra::{PostgresCommunityRepository, database::connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub communities: Arc<dyn CommunityRepository>,
}

impl AppState {
    pub fn new(communities: Arc<dyn CommunityRepository>) -> Self {
        Self { communities }
    }

    /// State backed by the in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCommunityRepository::new()))
    }

    /// Build the application state from configuration.
    ///
    /// Without a database URL the server runs on the in-memory repository. A
    /// configured database that cannot be reached is a startup error.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> std::io::Result<Self> {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => {
                let conn = connect(config).await.map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    std::io::Error::other(e)
                })?;
                Self::new(Arc::new(PostgresCommunityRepository::new(conn)))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");

        Ok(state)
    }
}
