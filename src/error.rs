use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::schemas::ErrorResponse;

/// Error taxonomy for every handler. Database and internal failures are
/// logged in full but leave the process as a generic 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Validation {
        message: String,
        field_errors: HashMap<String, Vec<String>>,
    },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ApiError {
    /// Single-field validation failure, for checks the derive cannot express
    /// (e.g. values nested inside double-`Option` partial-update fields).
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), vec![message.to_string()]);
        ApiError::Validation {
            message: "Validation failed".to_string(),
            field_errors,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code().to_string();

        let (message, field_errors) = match self {
            ApiError::Database(db_error) => {
                error!("Database error: {}", db_error);
                ("Internal server error".to_string(), None)
            }
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                ("Internal server error".to_string(), None)
            }
            ApiError::Validation {
                message,
                field_errors,
            } => (message, Some(field_errors)),
            other => (other.to_string(), None),
        };

        let body = ErrorResponse {
            error: message,
            code,
            success: false,
            field_errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, violations) in errors.field_errors() {
            let messages = violations
                .iter()
                .map(|violation| {
                    violation
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| violation.code.to_string())
                })
                .collect();
            field_errors.insert(field.to_string(), messages);
        }
        ApiError::Validation {
            message: "Validation failed".to_string(),
            field_errors,
        }
    }
}
