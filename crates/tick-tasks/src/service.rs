//! Business logic layer for task operations.
//!
//! [`TaskService`] owns the storage gateway and exposes one method per
//! operation. Key rules:
//!
//! - **Title validation**: 1..=255 characters, checked before any storage
//!   access on create and on update when a title is provided.
//! - **Update precedence**: a missing task fails `NotFound` before an empty
//!   patch fails `Validation`, matching the handler order callers rely on.
//! - **Timestamps**: `updated_at` refreshes exactly when a write succeeds;
//!   a rejected update leaves the row untouched.
//!
//! Each method runs inside a single gateway transaction, so an error from
//! any step rolls back the whole operation.

use std::sync::Arc;

use tick_store::TaskStore;

use crate::errors::{Result, TaskError};
use crate::repository::TaskRepository;
use crate::types::{NewTask, Task, TaskPatch, MAX_TITLE_LEN};

/// Task service with validation and per-operation transactions.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    /// Build a service on top of an initialized store.
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Create a task. Starts out not completed, with both timestamps equal.
    pub fn create(&self, new_task: &NewTask) -> Result<Task> {
        validate_title(&new_task.title)?;
        self.store.with_transaction(|tx| {
            TaskRepository::insert(tx, &new_task.title, new_task.description.as_deref())
        })
    }

    /// List all tasks, newest id first.
    pub fn list(&self) -> Result<Vec<Task>> {
        self.store.with_transaction(|tx| TaskRepository::list(tx))
    }

    /// Get a task by id.
    pub fn get(&self, id: i64) -> Result<Task> {
        self.store
            .with_transaction(|tx| TaskRepository::get(tx, id)?.ok_or(TaskError::NotFound { id }))
    }

    /// Apply a partial update and return the post-update record.
    pub fn update(&self, id: i64, patch: &TaskPatch) -> Result<Task> {
        self.store.with_transaction(|tx| {
            if TaskRepository::get(tx, id)?.is_none() {
                return Err(TaskError::NotFound { id });
            }
            if patch.is_empty() {
                return Err(TaskError::Validation(
                    "No fields provided to update".to_string(),
                ));
            }
            if let Some(ref title) = patch.title {
                validate_title(title)?;
            }
            TaskRepository::update(tx, id, patch)?.ok_or(TaskError::NotFound { id })
        })
    }

    /// Mark a task completed. Idempotent on the flag, but every successful
    /// call still refreshes `updated_at`.
    pub fn complete(&self, id: i64) -> Result<Task> {
        self.store.with_transaction(|tx| {
            TaskRepository::complete(tx, id)?.ok_or(TaskError::NotFound { id })
        })
    }

    /// Delete a task permanently.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.store.with_transaction(|tx| {
            if TaskRepository::delete(tx, id)? {
                Ok(())
            } else {
                Err(TaskError::NotFound { id })
            }
        })
    }
}

/// Validate a title against the length rules shared by create and update.
fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(TaskError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TaskError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
