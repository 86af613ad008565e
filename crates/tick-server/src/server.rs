//! Axum HTTP server and route handlers for the task service.

use std::net::SocketAddr;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, patch};
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use tick_tasks::{NewTask, Task, TaskPatch, TaskService};

use crate::config::ServerConfig;
use crate::errors::ApiError;
use crate::health::{self, HealthResponse};
use crate::shutdown::ShutdownCoordinator;

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task service backing every `/tasks` route.
    pub tasks: TaskService,
}

/// The main Tick server.
pub struct TickServer {
    config: ServerConfig,
    tasks: TaskService,
    shutdown: ShutdownCoordinator,
}

impl TickServer {
    /// Create a new server around an already-initialized task service.
    pub fn new(config: ServerConfig, tasks: TaskService) -> Self {
        Self {
            config,
            tasks,
            shutdown: ShutdownCoordinator::new(),
        }
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            tasks: self.tasks.clone(),
        };

        Router::new()
            .route("/", get(health_handler))
            .route("/tasks", get(list_tasks).post(create_task))
            .route(
                "/tasks/{id}",
                get(get_task).put(update_task).delete(delete_task),
            )
            .route("/tasks/{id}/complete", patch(complete_task))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind the configured address and start serving in a background task.
    ///
    /// Returns the bound address (the real port when the config asked for
    /// `0`) and the serve task handle. The task drains in-flight requests
    /// and exits once the shutdown coordinator fires.
    pub async fn listen(&self) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr()).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "server listening");

        let router = self.router();
        let token = self.shutdown.token();
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router)
                .with_graceful_shutdown(token.cancelled_owned())
                .await
            {
                error!(error = %err, "server task exited with error");
            }
        });

        Ok((addr, handle))
    }

    /// Get the shutdown coordinator.
    pub fn shutdown(&self) -> &ShutdownCoordinator {
        &self.shutdown
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// GET /
async fn health_handler() -> Json<HealthResponse> {
    Json(health::health_check())
}

/// POST /tasks
async fn create_task(
    State(state): State<AppState>,
    Json(new_task): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.tasks.create(&new_task)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.tasks.list()?))
}

/// GET /tasks/{id}
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.tasks.get(id)?))
}

/// PUT /tasks/{id}
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.tasks.update(id, &patch)?))
}

/// PATCH /tasks/{id}/complete
async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.tasks.complete(id)?))
}

/// DELETE /tasks/{id}
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
