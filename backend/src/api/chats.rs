//! Chat API endpoints
//!
//! Handles HTTP requests for chat listings, chat lifecycle, and reading a chat's history.

use crate::api::utils::StatusResponse;
use crate::api::ApiState;
use crate::error::AppError;
use crate::messaging::{Chat, Message};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Summary of a single chat
#[derive(Debug, Serialize)]
pub struct ChatSummary {
    /// ID of the partner the chat belongs to
    pub partner_id: String,
    /// Number of messages in the chat
    pub message_count: usize,
    /// Number of unread messages in the chat
    pub unread_count: usize,
    /// Preview of the most recent message
    pub last_message: String,
}

impl From<&Chat> for ChatSummary {
    fn from(chat: &Chat) -> Self {
        Self {
            partner_id: chat.partner_id().to_string(),
            message_count: chat.len(),
            unread_count: chat.unread_count(),
            last_message: chat.last_message_text().to_string(),
        }
    }
}

/// Chats list response
#[derive(Debug, Serialize)]
pub struct ChatsListResponse {
    /// All chats in creation order
    pub chats: Vec<ChatSummary>,
    /// Total number of chats
    pub count: usize,
    /// Number of chats holding unread messages
    pub unread_chats: usize,
}

/// Last-message previews response
#[derive(Debug, Serialize)]
pub struct LastMessagesResponse {
    /// One preview per chat, same order as the chat list
    pub last_messages: Vec<String>,
}

/// Query parameters for reading a chat
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// How many of the most recent messages to return
    pub count: Option<i64>,
}

/// Messages returned from a chat read
#[derive(Debug, Serialize)]
pub struct ChatMessagesResponse {
    /// ID of the partner the chat belongs to
    pub partner_id: String,
    /// Requested messages, oldest first
    pub messages: Vec<Message>,
}

/// GET /api/chats - List all chats
pub async fn list_chats(State(state): State<ApiState>) -> Json<ChatsListResponse> {
    let service = state.service.read().await;
    let chats: Vec<ChatSummary> = service
        .chats()
        .into_iter()
        .map(ChatSummary::from)
        .collect();

    Json(ChatsListResponse {
        count: chats.len(),
        unread_chats: service.unread_chats_count(),
        chats,
    })
}

/// GET /api/last-messages - Last-message preview for every chat
pub async fn last_messages(State(state): State<ApiState>) -> Json<LastMessagesResponse> {
    let service = state.service.read().await;
    Json(LastMessagesResponse {
        last_messages: service.last_messages(),
    })
}

/// PUT /api/chats/:partner_id - Create an empty chat unless one already exists
pub async fn create_chat(
    State(state): State<ApiState>,
    Path(partner_id): Path<String>,
) -> Result<Json<ChatSummary>, AppError> {
    let mut service = state.service.write().await;
    service.create_chat_if_not_exists(&partner_id);
    let chat = service.chat(&partner_id).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("Chat not found after creation"))
    })?;

    Ok(Json(ChatSummary::from(chat)))
}

/// DELETE /api/chats/:partner_id - Delete a chat and all of its messages
pub async fn delete_chat(
    State(state): State<ApiState>,
    Path(partner_id): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    if !state.service.write().await.delete_chat(&partner_id) {
        return Err(AppError::ChatNotFound(partner_id));
    }

    Ok(Json(StatusResponse::ok("Chat deleted successfully")))
}

/// GET /api/chats/:partner_id/messages?count=N - Read the last N messages
///
/// Reading marks the whole chat as read, so this takes the write lock.
pub async fn get_chat_messages(
    State(state): State<ApiState>,
    Path(partner_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ChatMessagesResponse>, AppError> {
    let count = query
        .count
        .unwrap_or(state.config.messaging.default_history_count);

    let messages = state
        .service
        .write()
        .await
        .messages_from_chat(&partner_id, count)?;

    Ok(Json(ChatMessagesResponse {
        partner_id,
        messages,
    }))
}
