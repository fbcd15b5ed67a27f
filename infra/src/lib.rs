//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Dwello backend.
//! It provides the MongoDB-backed implementations of the repository traits
//! defined in `dw_core`.
//!
//! ## Architecture
//!
//! - **Connection**: [`MongoStore`] owns the client and the `dwello` database
//!   handle; it is created once at startup and shared
//! - **Documents**: BSON mappings for the `users` and `properties` collections
//! - **Queries**: translation of [`dw_core::PropertyFilter`] and update
//!   operations into filter and update documents
//! - **Repositories**: `MongoUserRepository`, `MongoPropertyRepository`
//!
//! Every store call is bounded by the configured operation timeout.

pub mod database;

pub use database::{MongoPropertyRepository, MongoStore, MongoUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The database did not answer in time
    #[error("Database did not respond within {0}s")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
