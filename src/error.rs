use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::constants::{ERR_DATABASE, ERR_INVALID_ACTION, VALID_ACTIONS};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Render a JSON value as the wire envelope: pretty-printed body,
/// `application/json`, HTTP 200. The contract carries no status-code
/// semantics; clients branch on the `success` field.
pub fn envelope_response(value: &Value) -> Response {
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Convert AppError into the `{success:false, ...}` envelope
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let value = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                json!({ "success": false, "error": ERR_DATABASE })
            }
            AppError::InvalidInput(ref msg) => {
                json!({ "success": false, "error": msg })
            }
            AppError::UnknownAction(ref action) => {
                json!({
                    "success": false,
                    "error": ERR_INVALID_ACTION,
                    "received_action": action,
                    "available_actions": VALID_ACTIONS,
                })
            }
        };

        envelope_response(&value)
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
