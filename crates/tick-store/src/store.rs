//! High-level storage gateway wrapping the connection pool.
//!
//! [`TaskStore`] is constructed once at process start, bootstraps the schema,
//! and is handed to the service layer. Request handling goes through
//! [`TaskStore::with_transaction`], which scopes one pooled connection to one
//! transaction: commit when the work closure returns `Ok`, rollback (via
//! transaction drop) when it returns `Err`. The connection returns to the
//! pool on every exit path.

use rusqlite::Transaction;
use tracing::info;

use crate::connection::{self, ConnectionConfig, ConnectionPool, PooledConnection};
use crate::errors::{Result, StoreError};
use crate::schema;

/// Storage gateway owning the `SQLite` connection pool.
pub struct TaskStore {
    pool: ConnectionPool,
}

impl TaskStore {
    /// Open a file-backed store at `path`.
    ///
    /// Does not touch the schema; call [`TaskStore::init_schema`] before
    /// serving traffic.
    pub fn open(path: &str, config: &ConnectionConfig) -> Result<Self> {
        let pool = connection::new_file(path, config)?;
        Ok(Self { pool })
    }

    /// Open an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let pool = connection::new_in_memory(&ConnectionConfig::default())?;
        Ok(Self { pool })
    }

    /// Idempotently ensure the tasks table exists.
    ///
    /// Safe to call on every process start. A failure here means the store
    /// is unreachable or rejected the DDL; the process must not serve
    /// traffic in that case.
    pub fn init_schema(&self) -> Result<()> {
        info!("initializing task schema");
        let conn = self.conn()?;
        schema::init(&conn)?;
        info!("task schema ready");
        Ok(())
    }

    /// Check a connection out of the pool.
    pub fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Run `work` inside a transaction on one pooled connection.
    ///
    /// Commits if `work` returns `Ok`; rolls back if it returns `Err` (the
    /// transaction rolls back on drop). The closure's error type absorbs
    /// gateway failures through `From<StoreError>`, so domain errors pass
    /// through unchanged.
    pub fn with_transaction<T, E, F>(&self, work: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> std::result::Result<T, E>,
        E: From<StoreError>,
    {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction().map_err(StoreError::from)?;
        let out = work(&tx)?;
        tx.commit().map_err(StoreError::from)?;
        Ok(out)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
