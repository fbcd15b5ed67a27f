//! Shared utilities and common types for the Dwello server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Response envelopes
//! - The limit/skip pagination window
//! - Input validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};
pub use types::{error_codes, ErrorResponse, HealthResponse, MessageResponse, PageWindow};
pub use utils::validation;
