use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors a handler surfaces to the client. Anything more specific stays in
/// the server logs.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (code, Json(json!({ "error": message }))).into_response()
    }
}

/// Maps data-layer failures to `AppError`, logging the underlying error.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }
}
