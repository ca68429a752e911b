use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum LookupError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            LookupError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            LookupError::Database(_) | LookupError::Config(_) | LookupError::Io(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                )
            }
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Flat error body: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: &'static str,
}
