mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::Category;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    UnprocessableEntity(String),
    Internal(anyhow::Error),
}

pub type ApiResponse<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(reason: impl ToString) -> Self {
        ApiError::BadRequest(reason.to_string())
    }

    pub fn not_found(reason: impl ToString) -> Self {
        ApiError::NotFound(reason.to_string())
    }

    pub fn unprocessable(reason: impl ToString) -> Self {
        ApiError::UnprocessableEntity(reason.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad request error",
            ApiError::NotFound(_) => "Resource not found",
            ApiError::UnprocessableEntity(_) => "Unprocessable entity",
            ApiError::Internal(_) => "Internal error, please try again.",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(error) => tracing::error!("{status}: {error:#}"),
            ApiError::BadRequest(reason)
            | ApiError::NotFound(reason)
            | ApiError::UnprocessableEntity(reason) => tracing::warn!("{status}: {reason}"),
        }
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Internal(error.into())
    }
}

#[derive(Serialize)]
pub(crate) struct Success {
    success: bool,
}

impl Success {
    pub(crate) fn new() -> Self {
        Success { success: true }
    }
}

/// `?page=N`, anything unparsable falls back to the first page.
#[derive(Deserialize)]
pub(crate) struct PageQuery {
    page: Option<i64>,
}

pub(crate) fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.ok().and_then(|Query(q)| q.page).unwrap_or(1)
}

/// Categories keyed by id, the shape the frontend expects.
pub(crate) fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
