//! Error types for the task domain.
//!
//! [`TaskError`] splits caller mistakes (`Validation`, `NotFound`) from
//! infrastructure failures so the HTTP layer can map each to a status code
//! with a simple match.

use thiserror::Error;
use tick_store::StoreError;

/// Errors that can occur during task operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Request payload broke a domain rule. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// No task exists with the requested id.
    #[error("task not found: {id}")]
    NotFound {
        /// The id that was requested.
        id: i64,
    },

    /// Storage gateway failure (pool, transaction scope, schema).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A SQL statement failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Convenience type alias for task operation results.
pub type Result<T> = std::result::Result<T, TaskError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
