//! # Schema Migrations
//!
//! Embedded SQL migrations for the sales ledger.
//!
//! ## How It Works
//!
//! ```text
//! ┌──────────────────────┐     compile time      ┌──────────────────────┐
//! │ migrations/sqlite/   │ ────────────────────► │  MIGRATOR (static)   │
//! │   001_create_sales   │   sqlx::migrate!()    │  embedded in binary  │
//! └──────────────────────┘                       └──────────────────────┘
//!                                                           │
//!                                                           ▼ startup
//!                                                ┌──────────────────────┐
//!                                                │  _sqlx_migrations    │
//!                                                │  tracks applied set  │
//!                                                └──────────────────────┘
//! ```
//!
//! Migrations are embedded at compile time, so the binary carries its own
//! schema and never depends on SQL files being present on disk at runtime.
//! Each migration runs at most once; sqlx records applied versions in the
//! `_sqlx_migrations` table.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrator built from the workspace migrations directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Run all pending migrations against the given pool.
///
/// Safe to call on every startup: already-applied migrations are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Running database migrations");
    MIGRATOR.run(pool).await?;
    info!("Migrations complete");
    Ok(())
}

/// Number of migrations that have been applied to this database.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<i64> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;
    Ok(applied)
}
