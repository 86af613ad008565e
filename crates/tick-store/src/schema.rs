//! Idempotent schema bootstrap.
//!
//! One table, no version tracking: the only migration this service performs
//! is `CREATE TABLE IF NOT EXISTS`, safe to run on every process start.

use rusqlite::Connection;

use crate::errors::{Result, StoreError};

/// DDL for the tasks table.
///
/// Timestamps default to UTC `datetime('now')` so the store is the single
/// authoritative clock; `completed` is stored as 0/1.
pub const CREATE_TASKS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
";

/// Ensure the tasks table exists on the given connection.
pub fn init(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TASKS_TABLE)
        .map_err(|e| StoreError::Schema {
            message: format!("tasks table: {e}"),
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
