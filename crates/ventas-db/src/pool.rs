//! # Connection Pool Management
//!
//! Configuration and lifecycle for the SQLite connection pool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ventas_db::{Database, DbConfig};
//!
//! # async fn example() -> Result<(), ventas_db::DbError> {
//! let config = DbConfig::new("./sales.db").max_connections(10);
//! let db = Database::new(config).await?;
//!
//! let sales = db.sales();
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations::run_migrations;
use crate::repository::sale::SaleRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration options.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file
    pub database_path: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections to keep
    pub min_connections: u32,
    /// Timeout for acquiring a connection
    pub connect_timeout: Duration,
    /// How long an idle connection is kept before being closed
    pub idle_timeout: Duration,
    /// Whether to run migrations on startup
    pub run_migrations: bool,
}

impl DbConfig {
    /// Create a configuration for a database file at the given path.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Create a configuration for an in-memory database (testing).
    ///
    /// In-memory SQLite databases are per-connection, so the pool is
    /// pinned to a single connection to keep all queries on one database.
    pub fn in_memory() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Set the maximum number of pool connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the minimum number of idle connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Set the connection acquire timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable automatic migrations on startup.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new("./sales.db")
    }
}

// =============================================================================
// Database Handle
// =============================================================================

/// Shared handle to the sales database.
///
/// Cheap to clone: clones share the same underlying pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database and prepare it for use.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path, "Opening database");

        let options = if config.database_path == ":memory:" {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", config.database_path))
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
                .create_if_missing(true)
        };

        // WAL allows concurrent readers while a write is in progress.
        let options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .connect_with(options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(
            max_connections = config.max_connections,
            "Connection pool ready"
        );

        let db = Self { pool };

        if config.run_migrations {
            run_migrations(&db.pool).await?;
        }

        Ok(db)
    }

    /// Run pending migrations manually.
    ///
    /// Only needed when the config disabled automatic migrations.
    pub async fn run_migrations(&self) -> DbResult<()> {
        run_migrations(&self.pool).await
    }

    /// Access the raw connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository for sale records.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.pool.clone())
    }

    /// Close all pool connections gracefully.
    pub async fn close(&self) {
        info!("Closing database connections");
        self.pool.close().await;
    }

    /// Check that the database responds to a trivial query.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.health_check().await.unwrap();
        db.close().await;
    }

    #[tokio::test]
    async fn test_migrations_applied() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let applied = crate::migrations::migration_status(db.pool()).await.unwrap();
        assert!(applied >= 1);
        db.close().await;
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.database_path, "/tmp/test.db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_in_memory_config_single_connection() {
        let config = DbConfig::in_memory();
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.max_connections, 1);
    }
}
