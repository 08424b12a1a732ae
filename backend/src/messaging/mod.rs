//! Messaging module
//!
//! Users, per-partner chats, and the in-memory service that owns them.

pub mod error;
pub mod ext;
pub mod models;
pub mod service;

pub use error::MessagingError;
pub use ext::ChatListExt;
pub use models::{Chat, Message, MessageId, User, UserId, NO_MESSAGES_TEXT};
pub use service::MessagingService;
