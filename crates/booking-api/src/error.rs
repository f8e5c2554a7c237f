//! HTTP-facing error type.
//!
//! Callers must be able to tell "no times available" (an empty 200) from
//! "something went wrong": validation problems are 4xx, store failures are 5xx.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slot_engine::SlotError;
use thiserror::Error;
use tracing::error;

use crate::ports::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream store failure: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        match err {
            SlotError::UnknownBarber(_) | SlotError::UnknownService(_) => {
                AppError::NotFound(err.to_string())
            }
            SlotError::InvalidDataset(_) => AppError::Internal(err.to_string()),
            SlotError::InvalidTime(_)
            | SlotError::InvalidDate(_)
            | SlotError::InvalidDayOfWeek(_)
            | SlotError::InvalidDuration(_)
            | SlotError::InvalidStep(_)
            | SlotError::InvalidWindow(_) => AppError::Validation(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) => AppError::Upstream(err.to_string()),
            StoreError::Conflict(_) | StoreError::InvalidTransition { .. } => {
                AppError::Conflict(err.to_string())
            }
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(_) => "Validation error",
            AppError::NotFound(_) => "Resource not found",
            AppError::Conflict(_) => "Resource conflict",
            AppError::Upstream(_) => "Service unavailable",
            AppError::Internal(_) => "An internal server error occurred",
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "message": message,
                "details": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
