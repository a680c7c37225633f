//! Lazily created, re-creatable connection pool.
//!
//! [`ConnectionManager`] is owned by the composition root and shared by
//! reference. The pool is opened on first use and reopened if the held
//! one has been closed. Creation happens under an async mutex so
//! concurrent first requests open a single pool.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::config::DbConfig;
use crate::error::DbError;
use crate::{create_pool, health_check, DbPool};

pub struct ConnectionManager {
    config: DbConfig,
    pool: Mutex<Option<DbPool>>,
    shut_down: AtomicBool,
}

impl ConnectionManager {
    /// Create a manager for `config`. No connection is made until the
    /// first [`acquire`](Self::acquire).
    pub fn open(config: DbConfig) -> Self {
        Self {
            config,
            pool: Mutex::new(None),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Return the live pool, creating it if none is held or the held one
    /// was closed.
    pub async fn acquire(&self) -> Result<DbPool, DbError> {
        if self.shut_down.load(Ordering::Acquire) {
            return Err(DbError::ShutDown);
        }

        let mut held = self.pool.lock().await;

        // Shutdown may have completed while waiting for the lock.
        if self.shut_down.load(Ordering::Acquire) {
            return Err(DbError::ShutDown);
        }

        if let Some(pool) = held.as_ref() {
            if !pool.is_closed() {
                return Ok(pool.clone());
            }
            tracing::warn!("Database pool was closed, recreating");
        }

        let options = self.config.connect_options()?;
        let pool = create_pool(
            options,
            self.config.max_connections,
            self.config.acquire_timeout,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create database pool");
            DbError::Connection(e)
        })?;

        tracing::info!(
            max_connections = self.config.max_connections,
            "Database connection pool created"
        );
        *held = Some(pool.clone());
        Ok(pool)
    }

    /// Whether the database currently answers a trivial query.
    pub async fn is_healthy(&self) -> bool {
        match self.acquire().await {
            Ok(pool) => match health_check(&pool).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Database health check failed");
                    false
                }
            },
            Err(_) => false,
        }
    }

    /// Close the pool and refuse further acquisitions. Safe to call more
    /// than once.
    pub async fn shutdown(&self) {
        self.shut_down.store(true, Ordering::Release);

        let pool = self.pool.lock().await.take();
        if let Some(pool) = pool {
            pool.close().await;
            tracing::info!("Database connection pool closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;
    use crate::config::DbTarget;

    /// Points at a port nothing listens on.
    fn unreachable_config() -> DbConfig {
        DbConfig {
            target: DbTarget::Parts {
                server: "127.0.0.1".into(),
                port: 1,
                database: "mes".into(),
                user: "monitor".into(),
                password: String::new(),
                encrypt: false,
                trust_server_certificate: false,
            },
            max_connections: 1,
            acquire_timeout: Duration::from_millis(500),
        }
    }

    #[tokio::test]
    async fn unreachable_store_is_a_connection_error() {
        let manager = ConnectionManager::open(unreachable_config());

        assert_matches!(manager.acquire().await, Err(DbError::Connection(_)));
        assert!(!manager.is_healthy().await);
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let manager = ConnectionManager::open(unreachable_config());

        manager.shutdown().await;
        manager.shutdown().await;

        assert_matches!(manager.acquire().await, Err(DbError::ShutDown));
    }

    #[tokio::test]
    async fn invalid_url_is_a_config_error() {
        let manager = ConnectionManager::open(DbConfig {
            target: DbTarget::Url("not a url".into()),
            max_connections: 1,
            acquire_timeout: Duration::from_millis(500),
        });

        assert_matches!(manager.acquire().await, Err(DbError::Config(_)));
    }
}
