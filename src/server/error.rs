use std::fmt::Display;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::trivia::QuizError;

/// Everything a client can get back besides a success. Each kind has a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    Unprocessable,
    MethodNotAllowed,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::NotFound => "resource not found",
            ApiError::Unprocessable => "unprocessable",
            ApiError::MethodNotAllowed => "not allowed method",
        }
    }

    /// Logs a store or input failure and reports it as `NotFound`.
    pub fn not_found(err: impl Display) -> Self {
        tracing::warn!("Responding with not found: {err}");
        ApiError::NotFound
    }

    /// Logs a store or input failure and reports it as `Unprocessable`.
    pub fn unprocessable(err: impl Display) -> Self {
        tracing::warn!("Responding with unprocessable: {err}");
        ApiError::Unprocessable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::unprocessable(rejection.body_text())
    }
}

impl From<QuizError> for ApiError {
    // running out of questions is how every quiz round ends
    fn from(err: QuizError) -> Self {
        tracing::info!("Quiz round is over: {err}");
        ApiError::NotFound
    }
}
