//! HTTP error mapping.
//!
//! Domain errors become `{"detail": "<message>"}` bodies: validation maps to
//! 400, a missing task to 404, and storage failures to 500 with the cause
//! logged server-side and a generic body on the wire.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tick_tasks::TaskError;
use tracing::error;

/// JSON error body shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

/// Newtype that turns a [`TaskError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            TaskError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            TaskError::NotFound { .. } => (StatusCode::NOT_FOUND, "Task not found".to_string()),
            err @ (TaskError::Store(_) | TaskError::Sqlite(_)) => {
                error!(error = %err, "task operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tick_store::StoreError;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_message() {
        let err = ApiError(TaskError::Validation("Title must not be empty".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["detail"], "Title must not be empty");
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_fixed_detail() {
        let err = ApiError(TaskError::NotFound { id: 9 });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["detail"], "Task not found");
    }

    #[tokio::test]
    async fn store_failure_maps_to_500_with_generic_detail() {
        let err = ApiError(TaskError::Store(StoreError::Schema {
            message: "tasks table rejected".into(),
        }));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["detail"], "Internal server error");
    }
}
