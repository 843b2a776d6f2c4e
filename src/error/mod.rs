use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown template slug: {0}")]
    UnknownSlug(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

impl AppError {
    /// HTTP status and stable error code
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::UnknownSlug(_) => (StatusCode::NOT_FOUND, "UNKNOWN_SLUG"),
            AppError::Template(e) => (StatusCode::BAD_REQUEST, e.code()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let log_message = self.to_string();

        let client_message = match &self {
            AppError::Internal(_) if is_production() => "Internal server error".to_string(),
            _ => log_message.clone(),
        };

        // Client mistakes are routine; only server faults are errors
        if status.is_server_error() {
            tracing::error!(
                code = %code,
                status = %status.as_u16(),
                message = %log_message,
                "API error"
            );
        } else {
            tracing::warn!(
                code = %code,
                status = %status.as_u16(),
                message = %log_message,
                "API request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::InvalidBlock;

    #[test]
    fn test_template_error_maps_to_bad_request() {
        let err = AppError::from(TemplateError::MissingField("subject"));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::BAD_REQUEST, "MISSING_FIELD")
        );
        assert_eq!(err.to_string(), "Missing required field: subject");
    }

    #[test]
    fn test_invalid_block_code() {
        let err = AppError::from(TemplateError::from(InvalidBlock::UnknownKind {
            block_id: "b1".to_string(),
            kind: "carousel".to_string(),
        }));
        assert_eq!(err.status_and_code().1, "INVALID_BLOCK");
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let err = AppError::UnknownSlug("custom".to_string());
        assert_eq!(
            err.status_and_code(),
            (StatusCode::NOT_FOUND, "UNKNOWN_SLUG")
        );
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let err = AppError::Internal("encoder failed".to_string());
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
