//! Helpers over chat and message lists

use crate::messaging::models::{Chat, Message};

/// Bulk queries over a list of chats, such as the one returned by
/// [`MessagingService::chats`](super::MessagingService::chats)
pub trait ChatListExt<'a> {
    /// Chats that contain at least one unread message
    fn filter_unread(&self) -> Vec<&'a Chat>;

    /// Last-message preview of each chat, in list order
    fn last_texts(&self) -> Vec<String>;
}

impl<'a> ChatListExt<'a> for [&'a Chat] {
    fn filter_unread(&self) -> Vec<&'a Chat> {
        self.iter()
            .copied()
            .filter(|chat| chat.unread_count() > 0)
            .collect()
    }

    fn last_texts(&self) -> Vec<String> {
        self.iter()
            .map(|chat| chat.last_message_text().to_string())
            .collect()
    }
}

/// Mark every message in the slice as read and hand the slice back
pub fn mark_all_as_read(messages: &mut [Message]) -> &mut [Message] {
    for message in messages.iter_mut() {
        message.is_read = true;
    }
    messages
}
