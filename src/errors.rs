use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidationErrors;

/// Application-specific error types.
///
/// The premium pipeline itself cannot fail; these all come from the HTTP
/// boundary.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Body could not be read as JSON (malformed syntax, wrong content type).
    BadRequest(String),
    /// Body exceeded the request size limit.
    PayloadTooLarge(String),
    /// Body parsed but one or more fields are missing, mistyped or out of range.
    Validation(ValidationErrors),
}

impl AppError {
    /// Collects field-level messages, keyed by field name.
    pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
        errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::Validation(errors) => {
                let fields: Vec<String> = Self::field_messages(errors).into_keys().collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
        }
    }
}

impl IntoResponse for AppError {
    /// Maps each error variant to an HTTP status code and JSON body.
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected request body: {}", msg);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::warn!("Rejected oversized request body: {}", msg);
                (StatusCode::PAYLOAD_TOO_LARGE, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Validation(errors) => {
                let fields = Self::field_messages(&errors);
                tracing::warn!("Validation failed: {:?}", fields);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "Validation failed",
                        "fields": fields,
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    /// Keeps 413 for bodies cut off by the size limit; every other rejection is a 400.
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}
