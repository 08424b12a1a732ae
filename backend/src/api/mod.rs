//! API module
//!
//! Contains HTTP request handlers for the messaging endpoints

pub mod chats;
pub mod messages;
pub mod router;
pub mod users;
pub mod utils;

pub use router::router;

use crate::config::Config;
use crate::messaging::MessagingService;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Messaging service shared between request handlers
///
/// The lock is the only synchronization boundary: every handler that mutates
/// the service (including reads that mark messages as read) takes it for writing.
pub type SharedService = Arc<RwLock<MessagingService>>;

/// State handed to every handler
#[derive(Clone)]
pub struct ApiState {
    /// The messaging service
    pub service: SharedService,
    /// Application configuration
    pub config: Arc<Config>,
}

impl ApiState {
    /// Wrap a service and configuration for use as router state
    pub fn new(service: MessagingService, config: Config) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
            config: Arc::new(config),
        }
    }
}
