//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::messaging::MessagingError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// The messaging core only fails for unknown chats and unknown users; handlers
/// turn the core's `false` results into the not-found variants below.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error raised by the messaging service
    #[error(transparent)]
    Messaging(#[from] MessagingError),

    /// User with the given ID was not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// No chat exists for the given partner
    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    /// Message with the given ID was not found in the chat
    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Messaging(MessagingError::ChatNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Messaging(MessagingError::UnknownUser(_)) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ChatNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MessageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
