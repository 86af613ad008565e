//! # tick
//!
//! Tick task service binary. Bootstraps the store and serves the task API
//! over HTTP until interrupted.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tick_server::config::ServerConfig;
use tick_server::server::TickServer;
use tick_store::{ConnectionConfig, TaskStore};
use tick_tasks::TaskService;

/// Tick task service.
#[derive(Parser, Debug)]
#[command(name = "tick", about = "Tick task service")]
struct Cli {
    /// Host to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind (0 for auto-assign).
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Path to the `SQLite` database file.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Minimum log level when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn default_db_path() -> PathBuf {
        std::env::var("TICK_DB_PATH").map_or_else(|_| PathBuf::from("tick.db"), PathBuf::from)
    }
}

fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create parent directory for {}", path.display()))
}

/// Initialize the global tracing subscriber with stderr output.
///
/// `RUST_LOG` takes precedence over the `--log-level` flag.
fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set
    let _ = subscriber.try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_subscriber(&args.log_level);

    // The schema bootstrap must succeed before any request is served; an
    // unreachable or unwritable database is fatal here.
    let db_path = args.db_path.unwrap_or_else(Cli::default_db_path);
    ensure_parent_dir(&db_path)?;
    let db_str = db_path.to_string_lossy();
    let store =
        TaskStore::open(&db_str, &ConnectionConfig::default()).context("Failed to open database")?;
    store
        .init_schema()
        .context("Failed to initialize task schema")?;

    let tasks = TaskService::new(Arc::new(store));

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    let server = TickServer::new(config, tasks);

    let (addr, handle) = server.listen().await.context("Failed to bind server")?;

    tracing::info!(db = %db_path.display(), "Tick listening on http://{addr}");

    // Runs until interrupted
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    tracing::info!("Shutting down...");
    server.shutdown().shutdown();
    let _ = handle.await;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_default_host() {
        let cli = Cli::parse_from(["tick"]);
        assert_eq!(cli.host, "127.0.0.1");
    }

    #[test]
    fn cli_default_port() {
        let cli = Cli::parse_from(["tick"]);
        assert_eq!(cli.port, 8000);
    }

    #[test]
    fn cli_custom_host() {
        let cli = Cli::parse_from(["tick", "--host", "0.0.0.0"]);
        assert_eq!(cli.host, "0.0.0.0");
    }

    #[test]
    fn cli_custom_port() {
        let cli = Cli::parse_from(["tick", "--port", "8080"]);
        assert_eq!(cli.port, 8080);
    }

    #[test]
    fn cli_db_path() {
        let cli = Cli::parse_from(["tick", "--db-path", "/tmp/test.db"]);
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/test.db")));
    }

    #[test]
    fn cli_db_path_defaults_to_none() {
        let cli = Cli::parse_from(["tick"]);
        assert_eq!(cli.db_path, None);
    }

    #[test]
    fn cli_default_log_level() {
        let cli = Cli::parse_from(["tick"]);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("tick.db");
        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn ensure_parent_dir_accepts_bare_filename() {
        // A bare filename has an empty parent; create_dir_all treats that
        // as a no-op.
        ensure_parent_dir(std::path::Path::new("tick.db")).unwrap();
    }

    #[test]
    fn server_creates_db_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("new.db");
        assert!(!db_path.exists());

        let db_str = db_path.to_string_lossy();
        let store = TaskStore::open(&db_str, &ConnectionConfig::default()).unwrap();
        store.init_schema().unwrap();

        assert!(db_path.exists());
    }

    #[test]
    fn init_schema_creates_tasks_table() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("tick.db");
        let db_str = db_path.to_string_lossy();
        let store = TaskStore::open(&db_str, &ConnectionConfig::default()).unwrap();
        store.init_schema().unwrap();

        let conn = store.conn().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='tasks'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn server_boots_and_responds() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("tick.db");
        let db_str = db_path.to_string_lossy();
        let store = TaskStore::open(&db_str, &ConnectionConfig::default()).unwrap();
        store.init_schema().unwrap();
        let tasks = TaskService::new(Arc::new(store));

        let server = TickServer::new(ServerConfig::default(), tasks);
        let (addr, handle) = server.listen().await.unwrap();

        let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert!(resp.status().is_success());
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["message"], "Healthy");

        server.shutdown().shutdown();
        let _ = handle.await;
    }

    #[tokio::test]
    async fn server_graceful_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("tick.db");
        let db_str = db_path.to_string_lossy();
        let store = TaskStore::open(&db_str, &ConnectionConfig::default()).unwrap();
        store.init_schema().unwrap();
        let tasks = TaskService::new(Arc::new(store));

        let server = TickServer::new(ServerConfig::default(), tasks);
        let (_, handle) = server.listen().await.unwrap();

        server.shutdown().shutdown();
        let drained = tokio::time::timeout(std::time::Duration::from_secs(5), handle).await;
        assert!(drained.is_ok(), "serve task should exit promptly");
    }
}
