use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::storage::QueryError;

#[derive(Debug)]
pub enum AppError {
    Query(QueryError),
    InternalError(String),
}

impl AppError {
    /// Status code and the fixed message clients see. Details stay in the logs.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Query(QueryError::StorageUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Storage unavailable")
            }
            AppError::Query(QueryError::StorageError(_)) | AppError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::Query(e) => tracing::error!(status = %status, "{}", e),
            AppError::InternalError(msg) => {
                tracing::error!(status = %status, "Internal error: {}", msg)
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::Query(e)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Storage task failed: {}", e))
    }
}
