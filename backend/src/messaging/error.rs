//! Messaging-specific error types
//!
//! Only two operations fail outright; every other miss is reported as `false`.

use thiserror::Error;

/// Errors raised by [`MessagingService`](super::MessagingService)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessagingError {
    /// No chat is registered for the given partner
    #[error("Chat with {0} not found")]
    ChatNotFound(String),

    /// Sender or recipient is not a registered user
    #[error("User not found: {0}")]
    UnknownUser(String),
}
