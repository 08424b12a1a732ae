//! Messaging service
//!
//! Owns the user registry and the chat registry and exposes every messaging
//! operation. The service itself holds no locks; callers sharing it across
//! tasks wrap it in a single lock (see `api::ApiState`).

use crate::messaging::error::MessagingError;
use crate::messaging::ext::ChatListExt;
use crate::messaging::models::{Chat, Message, User, UserId};
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};

/// In-memory registry of users, chats, and messages
#[derive(Debug, Clone, Default)]
pub struct MessagingService {
    /// Registered users (id -> User)
    users: HashMap<UserId, User>,
    /// Chats keyed by the partner that receives their messages
    chats: HashMap<UserId, Chat>,
    /// Partner IDs in chat creation order
    chat_order: Vec<UserId>,
    /// Last timestamp handed out, keeps message timestamps non-decreasing
    last_timestamp: i64,
}

impl MessagingService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, replacing any existing user with the same ID
    pub fn add_user(&mut self, user: User) {
        info!(user_id = %user.id, name = %user.name, "User registered");
        self.users.insert(user.id.clone(), user);
    }

    /// Get a user by ID
    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of chats that contain at least one unread message
    pub fn unread_chats_count(&self) -> usize {
        self.chats().filter_unread().len()
    }

    /// All chats in creation order
    pub fn chats(&self) -> Vec<&Chat> {
        self.chat_order
            .iter()
            .filter_map(|id| self.chats.get(id))
            .collect()
    }

    /// Get the chat for a partner, if one exists
    pub fn chat(&self, partner_id: &str) -> Option<&Chat> {
        self.chats.get(partner_id)
    }

    /// Number of registered chats
    pub fn chat_count(&self) -> usize {
        self.chats.len()
    }

    /// Last-message preview for every chat, in the same order as [`chats`](Self::chats)
    pub fn last_messages(&self) -> Vec<String> {
        self.chats().last_texts()
    }

    /// Get the last `count` messages of a chat, oldest first
    ///
    /// Marks every message in the chat as read, not only the returned ones.
    /// A `count` of zero or less returns nothing but still marks the chat read.
    ///
    /// # Errors
    /// * `MessagingError::ChatNotFound` if no chat exists for `partner_id`
    pub fn messages_from_chat(
        &mut self,
        partner_id: &str,
        count: i64,
    ) -> Result<Vec<Message>, MessagingError> {
        let chat = self
            .chats
            .get_mut(partner_id)
            .ok_or_else(|| MessagingError::ChatNotFound(partner_id.to_string()))?;

        chat.mark_all_as_read();

        let total = chat.len();
        let take = if count <= 0 {
            0
        } else {
            usize::try_from(count).unwrap_or(usize::MAX).min(total)
        };
        let messages = chat.messages()[total - take..].to_vec();

        debug!(
            partner_id = %partner_id,
            requested = count,
            returned = messages.len(),
            "Read messages from chat"
        );
        Ok(messages)
    }

    /// Send a message, creating the recipient's chat on first use
    ///
    /// # Errors
    /// * `MessagingError::UnknownUser` if the sender or recipient is not registered
    pub fn send_message(
        &mut self,
        sender_id: &str,
        recipient_id: &str,
        text: impl Into<String>,
    ) -> Result<Message, MessagingError> {
        for user_id in [sender_id, recipient_id] {
            if !self.users.contains_key(user_id) {
                return Err(MessagingError::UnknownUser(user_id.to_string()));
            }
        }

        let timestamp = self.next_timestamp();
        let message = Message::new(sender_id.to_string(), text.into(), timestamp);

        self.ensure_chat(recipient_id).add_message(message.clone());

        info!(
            message_id = %message.id,
            sender_id = %sender_id,
            recipient_id = %recipient_id,
            "Message sent"
        );
        Ok(message)
    }

    /// Delete any message from a partner's chat
    /// Returns true if the chat exists and the message was removed
    pub fn delete_message(&mut self, partner_id: &str, message_id: &str) -> bool {
        let removed = self
            .chats
            .get_mut(partner_id)
            .is_some_and(|chat| chat.remove_message(message_id));

        if removed {
            info!(partner_id = %partner_id, message_id = %message_id, "Message deleted");
        }
        removed
    }

    /// Create an empty chat for the partner unless one already exists
    pub fn create_chat_if_not_exists(&mut self, partner_id: &str) {
        self.ensure_chat(partner_id);
    }

    /// Delete a chat together with all of its messages
    /// Returns true if the chat existed
    pub fn delete_chat(&mut self, partner_id: &str) -> bool {
        match self.chats.remove(partner_id) {
            Some(chat) => {
                self.chat_order.retain(|id| id != partner_id);
                info!(
                    partner_id = %partner_id,
                    messages = chat.len(),
                    "Chat deleted"
                );
                true
            }
            None => false,
        }
    }

    /// Replace the text of a message in a partner's chat
    /// Returns true if both the chat and the message exist
    pub fn edit_message(
        &mut self,
        partner_id: &str,
        message_id: &str,
        new_text: impl Into<String>,
    ) -> bool {
        let updated = self
            .chats
            .get_mut(partner_id)
            .is_some_and(|chat| chat.update_message(message_id, new_text));

        if updated {
            info!(partner_id = %partner_id, message_id = %message_id, "Message edited");
        }
        updated
    }

    /// Get the partner's chat, inserting an empty one if absent
    fn ensure_chat(&mut self, partner_id: &str) -> &mut Chat {
        let order = &mut self.chat_order;
        self.chats
            .entry(partner_id.to_string())
            .or_insert_with(|| {
                debug!(partner_id = %partner_id, "Chat created");
                order.push(partner_id.to_string());
                Chat::new(partner_id)
            })
    }

    fn next_timestamp(&mut self) -> i64 {
        self.last_timestamp = self.last_timestamp.max(Utc::now().timestamp_millis());
        self.last_timestamp
    }
}
