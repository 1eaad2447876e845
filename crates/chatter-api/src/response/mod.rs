//! Error rendering and non-JSON responses
//!
//! Every failure leaves the API as `{"error": {"code", "message", "details"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chatter_common::AppError;
use chatter_service::ServiceError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Anything a handler or extractor can fail with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Field rules failed; details are keyed by field name
    #[error("Request validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, status = status.as_u16(), "Request failed");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// `202 Accepted` with an empty body
pub struct Accepted;

impl IntoResponse for Accepted {
    fn into_response(self) -> Response {
        StatusCode::ACCEPTED.into_response()
    }
}
