//! # tick-server
//!
//! Axum HTTP surface for the Tick task service.
//!
//! - HTTP endpoints: root health check plus the `/tasks` CRUD surface
//! - Error mapping: domain errors to `{"detail": ...}` bodies with
//!   400/404/500 status codes
//! - Permissive CORS on every route
//! - Graceful shutdown via `CancellationToken`

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod health;
pub mod server;
pub mod shutdown;

pub use config::ServerConfig;
pub use server::{AppState, TickServer};
pub use shutdown::ShutdownCoordinator;
