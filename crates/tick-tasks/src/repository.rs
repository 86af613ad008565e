//! SQL data access layer for tasks.
//!
//! All methods take a `&Connection` parameter and are stateless. Callers own
//! the transaction boundary. Every user-supplied value is bound as a
//! statement parameter, and the partial-update SET clause is assembled from
//! a fixed set of column fragments.

use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::TaskError;
use crate::types::{Task, TaskPatch};

/// Stateless CRUD statements over the tasks table.
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task and return the stored row.
    ///
    /// `completed` and both timestamps come from the store in one statement,
    /// so `created_at == updated_at` on the returned record.
    pub fn insert(
        conn: &Connection,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, TaskError> {
        let _ = conn.execute(
            "INSERT INTO tasks (title, description, completed, created_at, updated_at)
             VALUES (?1, ?2, 0, datetime('now'), datetime('now'))",
            params![title, description],
        )?;
        let id = conn.last_insert_rowid();
        Self::get(conn, id)?.ok_or(TaskError::NotFound { id })
    }

    /// Get a task by id.
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Task>, TaskError> {
        let task = conn
            .query_row(
                "SELECT id, title, description, completed, created_at, updated_at
                 FROM tasks WHERE id = ?1",
                params![id],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    /// List every task, newest id first.
    pub fn list(conn: &Connection) -> Result<Vec<Task>, TaskError> {
        let mut stmt = conn.prepare(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM tasks ORDER BY id DESC",
        )?;
        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<rusqlite::Result<Vec<Task>>>()?;
        Ok(tasks)
    }

    /// Apply a partial update. Returns `None` when no row matched.
    ///
    /// The SET clause grows one fixed fragment per present field and always
    /// ends with an `updated_at` refresh. The caller ensures at least one
    /// field is present; an empty patch would still touch `updated_at`.
    pub fn update(
        conn: &Connection,
        id: i64,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, TaskError> {
        let mut sets: Vec<&'static str> = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ref title) = patch.title {
            sets.push("title = ?");
            values.push(Box::new(title.clone()));
        }
        if let Some(ref description) = patch.description {
            sets.push("description = ?");
            values.push(Box::new(description.clone()));
        }
        if let Some(completed) = patch.completed {
            sets.push("completed = ?");
            values.push(Box::new(completed));
        }
        sets.push("updated_at = datetime('now')");
        values.push(Box::new(id));

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(AsRef::as_ref).collect();
        let changed = conn.execute(&sql, params_refs.as_slice())?;

        if changed == 0 {
            return Ok(None);
        }
        Self::get(conn, id)
    }

    /// Mark a task completed and refresh `updated_at`, regardless of prior
    /// state. Returns `None` when no row matched.
    pub fn complete(conn: &Connection, id: i64) -> Result<Option<Task>, TaskError> {
        let changed = conn.execute(
            "UPDATE tasks SET completed = 1, updated_at = datetime('now') WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Self::get(conn, id)
    }

    /// Delete a task by id. Returns true if a row was deleted.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool, TaskError> {
        let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

/// Map a `SELECT id, title, description, completed, created_at, updated_at`
/// row to a [`Task`].
fn task_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
