//! Messaging data models
//!
//! Defines users, messages, and the per-partner chats that own them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Preview text returned for a chat that holds no messages
///
/// This string is part of the observable contract and must stay byte-for-byte identical.
pub const NO_MESSAGES_TEXT: &str = "нет сообщений";

/// Unique identifier for a user
pub type UserId = String;

/// Unique identifier for a message
pub type MessageId = String;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied identifier
    pub id: UserId,
    /// Display name
    pub name: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single message stored in a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the message
    pub id: MessageId,
    /// ID of the user that sent the message
    pub sender_id: UserId,
    /// Message body
    pub text: String,
    /// Whether the message has been read
    pub is_read: bool,
    /// When the message was created (Unix timestamp, milliseconds)
    pub timestamp: i64,
}

impl Message {
    /// Create a new unread message with a fresh ID
    pub fn new(sender_id: UserId, text: String, timestamp: i64) -> Self {
        Self {
            id: Self::generate_id(),
            sender_id,
            text,
            is_read: false,
            timestamp,
        }
    }

    /// Generate a new unique ID for a message
    /// Uses UUID v4 for uniqueness
    pub fn generate_id() -> MessageId {
        Uuid::new_v4().to_string()
    }
}

/// Messages addressed to one partner, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chat {
    partner_id: UserId,
    messages: Vec<Message>,
}

impl Chat {
    /// Create an empty chat for the given partner
    pub fn new(partner_id: impl Into<UserId>) -> Self {
        Self {
            partner_id: partner_id.into(),
            messages: Vec::new(),
        }
    }

    /// ID of the partner this chat belongs to
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// All messages in send order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Look up a single message by ID
    pub fn message(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// Append a message to the end of the chat
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove a message by ID
    /// Returns true if a message was removed
    pub fn remove_message(&mut self, message_id: &str) -> bool {
        match self.messages.iter().position(|m| m.id == message_id) {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the text of a message, leaving its read flag and timestamp alone
    /// Returns true if the message was found
    pub fn update_message(&mut self, message_id: &str, new_text: impl Into<String>) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.text = new_text.into();
                true
            }
            None => false,
        }
    }

    /// Number of messages not yet read
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.is_read).count()
    }

    /// Mark every message in the chat as read
    pub fn mark_all_as_read(&mut self) {
        for message in &mut self.messages {
            message.is_read = true;
        }
    }

    /// Text of the most recent message, or [`NO_MESSAGES_TEXT`] when empty
    pub fn last_message_text(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.text.as_str())
            .unwrap_or(NO_MESSAGES_TEXT)
    }

    /// Number of messages in the chat
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the chat holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
