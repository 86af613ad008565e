//! Error types for the storage gateway.
//!
//! [`StoreError`] is returned by all gateway operations and covers pool,
//! statement, and schema bootstrap failures. The display text carries the
//! detail.

use thiserror::Error;

/// Errors that can occur in the storage gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error (exhausted or connect failure).
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema bootstrap failed.
    #[error("schema error: {message}")]
    Schema {
        /// Describes what part of the bootstrap failed and why.
        message: String,
    },
}

/// Convenience type alias for gateway results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
