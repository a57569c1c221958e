//! API error mapping.
//!
//! Two outcomes cross the HTTP boundary: a missing record (404 with its own
//! message) and everything else (500 with a generic message plus a
//! structured detail, never a raw error object).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use quotable_core::errors::DatabaseError;
use quotable_core::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

const GENERIC_FAILURE_MSG: &str = "Something went wrong";

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

#[derive(Serialize)]
struct ErrorDetail {
    kind: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetail>,
}

fn kind_of(err: &Error) -> &'static str {
    match err {
        Error::Database(_) => "database",
        Error::Validation(_) => "validation",
        Error::Source(_) => "source",
        Error::NotFound(_) => "not_found",
        Error::Unexpected(_) => "internal",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message,
                    error: None,
                }),
            )
                .into_response(),
            Error::Database(DatabaseError::NotFound(message)) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message,
                    error: None,
                }),
            )
                .into_response(),
            err => {
                tracing::error!("Request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        message: GENERIC_FAILURE_MSG.to_string(),
                        error: Some(ErrorDetail {
                            kind: kind_of(&err),
                            message: err.to_string(),
                        }),
                    }),
                )
                    .into_response()
            }
        }
    }
}
