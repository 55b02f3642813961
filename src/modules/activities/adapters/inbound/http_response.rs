// JSON bodies shared by the HTTP inbound adapters.
//
// Successes carry `{"message": ...}`, failures carry `{"detail": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn message_response(message: String) -> Response {
    (StatusCode::OK, Json(MessageResponse { message })).into_response()
}

pub fn error_response(error: &ApplicationError) -> Response {
    let status = match error {
        ApplicationError::Domain(DecideError::ActivityNotFound) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let detail = if status.is_server_error() {
        tracing::error!(error = %error, "request failed");
        "Internal server error".to_string()
    } else {
        error.to_string()
    };

    (status, Json(ErrorResponse { detail })).into_response()
}
