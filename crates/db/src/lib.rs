//! Database access for the shop-floor monitor.
//!
//! The database owns all business rules; this crate only manages the
//! connection pool ([`ConnectionManager`]) and invokes named remote
//! procedures ([`ProcedureCaller`]).

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod config;
pub mod connection;
pub mod decode;
pub mod error;
pub mod procedure;
pub mod sql;

pub use config::DbConfig;
pub use connection::ConnectionManager;
pub use error::DbError;
pub use procedure::{PgProcedures, ProcedureCaller};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from connect options.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}

/// Run a trivial query to verify the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
