//! Database configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Document store configuration for the MongoDB connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub url: String,

    /// Database name holding the `users` and `properties` collections
    pub name: String,

    /// Maximum number of pooled connections
    pub max_pool_size: u32,

    /// Connection and server selection timeout in seconds
    pub connect_timeout: u64,

    /// Upper bound for every single store operation in seconds
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout: u64,

    /// Application name reported to the server
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mongodb://localhost:27017/"),
            name: String::from("dwello"),
            max_pool_size: 10,
            connect_timeout: 10,
            operation_timeout: default_operation_timeout(),
            app_name: default_app_name(),
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with URL and database name
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the maximum pool size
    pub fn with_max_pool_size(mut self, max: u32) -> Self {
        self.max_pool_size = max;
        self
    }

    /// Set the per-operation timeout in seconds
    pub fn with_operation_timeout(mut self, seconds: u64) -> Self {
        self.operation_timeout = seconds;
        self
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Check if this points at a non-local database
    pub fn is_production(&self) -> bool {
        !self.url.contains("localhost") && !self.url.contains("127.0.0.1")
    }
}

fn default_operation_timeout() -> u64 {
    10
}

fn default_app_name() -> String {
    String::from("dwello-api")
}
