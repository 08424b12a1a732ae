//! Messaging Directory Library
//!
//! In-memory registry of users, per-partner chats, and their messages, plus
//! the HTTP handlers that expose it. The server binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
/// Users, chats, messages, and the service that owns them
pub mod messaging;
