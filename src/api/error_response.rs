//! HTTP error response handling for the API
//!
//! Converts domain errors to HTTP responses with the status codes and flat
//! `{ "error": "<message>" }` bodies the portfolio frontend expects.

use crate::error::{Error, ErrorBody, ToHttpStatus};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Convert domain errors to HTTP responses automatically
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "Request failed");
        }

        (status_code, Json(ErrorBody::from(&self))).into_response()
    }
}
