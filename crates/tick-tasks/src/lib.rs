//! # tick-tasks
//!
//! Task domain layer for the Tick service:
//!
//! - **Types**: the task record and the wire shapes for create/update payloads
//! - **Repository**: stateless SQL data access over a borrowed connection
//! - **Service**: validation plus one transaction per operation, built on the
//!   `tick-store` gateway

#![deny(unsafe_code)]

pub mod errors;
pub mod repository;
pub mod service;
pub mod types;

pub use errors::{Result, TaskError};
pub use repository::TaskRepository;
pub use service::TaskService;
pub use types::{NewTask, Task, TaskPatch, MAX_TITLE_LEN};
