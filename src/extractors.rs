use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{names, rejections::AppError};

/// Extracts the form a request is scoped to from the `form-name` header.
/// Requests without it are rejected before they reach the store.
pub struct FormName(pub String);

impl<S: Send + Sync> FromRequestParts<S> for FormName {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_value(parts, names::FORM_NAME_HEADER)
            .map(FormName)
            .ok_or(AppError::Input("missing form-name header"))
    }
}

/// Extracts the submitting user from the `user-id` header.
pub struct UserId(pub String);

impl<S: Send + Sync> FromRequestParts<S> for UserId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_value(parts, names::USER_ID_HEADER)
            .map(UserId)
            .ok_or(AppError::Input("missing user-id header"))
    }
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
