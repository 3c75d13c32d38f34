//! Application state - shared across all handlers.

use std::sync::Arc;

use enroll_core::RegistrationService;
use enroll_core::ports::{PasswordService, TokenIssuer, UserStore};
use enroll_infra::database::DatabaseConfig;
use enroll_infra::{Argon2PasswordService, InMemoryUserStore, JwtTokenIssuer};

#[cfg(feature = "postgres")]
use enroll_infra::{DatabaseConnections, PostgresUserStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<RegistrationService>,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn UserStore> = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => Arc::new(PostgresUserStore::new(connections.main)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryUserStore::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryUserStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn UserStore> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryUserStore::new())
        };

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::from_env());
        let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::from_env());

        tracing::info!("Application state initialized");

        Self {
            registration: Arc::new(RegistrationService::new(store, passwords)),
            tokens,
        }
    }
}
