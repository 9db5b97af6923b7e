use chrono_tz::Tz;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// Server state — shared by every request handler
///
/// Holds the connection pool and the (immutable) configuration. Handlers
/// keep no other in-process mutable state: the database is the system of
/// record, so cloning this is cheap and concurrency correctness rests on
/// the storage layer's transactions and constraints.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database (applying migrations) and build the state
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }

    /// Build state around an existing pool — used by tests
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Business timezone for day-window computation
    pub fn timezone(&self) -> Tz {
        self.config.timezone
    }
}
