//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Default number of messages returned when a read request omits `count`
pub const DEFAULT_HISTORY_COUNT: i64 = 50;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Messaging configuration
    pub messaging: MessagingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Messaging configuration
#[derive(Debug, Clone)]
pub struct MessagingConfig {
    /// Messages returned by a chat read when the caller does not ask for a count
    pub default_history_count: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                host: "0.0.0.0".to_string(),
            },
            messaging: MessagingConfig {
                default_history_count: DEFAULT_HISTORY_COUNT,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: lookup("HOST").unwrap_or(defaults.server.host),
            },
            messaging: MessagingConfig {
                default_history_count: lookup("DEFAULT_HISTORY_COUNT")
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(defaults.messaging.default_history_count),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
