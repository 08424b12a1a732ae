//! Message API handlers
//!
//! Sending, editing, and deleting individual messages.

use crate::api::utils::StatusResponse;
use crate::api::ApiState;
use crate::error::AppError;
use crate::messaging::{Message, MessagingService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

/// Send message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// ID of the sending user
    pub sender_id: String,
    /// ID of the receiving user; the message lands in this user's chat
    pub recipient_id: String,
    /// Message body
    pub text: String,
}

/// Edit message request
#[derive(Debug, Deserialize)]
pub struct EditMessageRequest {
    /// Replacement text
    pub text: String,
}

/// POST /api/messages - Send a message
pub async fn send_message(
    State(state): State<ApiState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state.service.write().await.send_message(
        &request.sender_id,
        &request.recipient_id,
        request.text,
    )?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// PUT /api/chats/:partner_id/messages/:message_id - Replace a message's text
pub async fn edit_message(
    State(state): State<ApiState>,
    Path((partner_id, message_id)): Path<(String, String)>,
    Json(request): Json<EditMessageRequest>,
) -> Result<Json<Message>, AppError> {
    let mut service = state.service.write().await;
    if !service.edit_message(&partner_id, &message_id, request.text) {
        return Err(not_found(&service, partner_id, message_id));
    }

    let message = service
        .chat(&partner_id)
        .and_then(|chat| chat.message(&message_id))
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Message not found after edit")))?;

    Ok(Json(message))
}

/// DELETE /api/chats/:partner_id/messages/:message_id - Delete a message
///
/// Any message in any chat may be deleted; there is no ownership check.
pub async fn delete_message(
    State(state): State<ApiState>,
    Path((partner_id, message_id)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut service = state.service.write().await;
    if !service.delete_message(&partner_id, &message_id) {
        return Err(not_found(&service, partner_id, message_id));
    }

    Ok(Json(StatusResponse::ok("Message deleted successfully")))
}

/// Tell a missing chat apart from a missing message
fn not_found(
    service: &MessagingService,
    partner_id: String,
    message_id: String,
) -> AppError {
    if service.chat(&partner_id).is_none() {
        AppError::ChatNotFound(partner_id)
    } else {
        AppError::MessageNotFound(message_id)
    }
}
