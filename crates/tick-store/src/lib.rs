//! # tick-store
//!
//! `SQLite` storage gateway for the Tick task service.
//!
//! Owns the connection pool, bootstraps the schema at process start, and
//! hands out request-scoped transactions:
//!
//! - **Connection pool**: `r2d2` + `rusqlite` with WAL mode and a busy
//!   timeout applied on each new connection
//! - **Schema bootstrap**: idempotent `CREATE TABLE IF NOT EXISTS`, safe to
//!   run on every startup
//! - **Transactional scope**: [`TaskStore::with_transaction`] commits when
//!   the work closure returns `Ok` and rolls back when it returns `Err`,
//!   releasing the connection on every exit path

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod schema;
pub mod store;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection};
pub use errors::{Result, StoreError};
pub use store::TaskStore;
