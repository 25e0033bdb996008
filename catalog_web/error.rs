use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catalog_types::{ApplicationError, DbError};

/// Wrapper so `ApplicationError` can flow out of axum handlers with `?`.
pub struct WebError(pub ApplicationError);

impl From<ApplicationError> for WebError {
    fn from(err: ApplicationError) -> Self {
        WebError(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ApplicationError::Db(DbError::ProductNotFound(_))
            | ApplicationError::Db(DbError::UserNotFound(_)) => StatusCode::NOT_FOUND,
            ApplicationError::Json(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
