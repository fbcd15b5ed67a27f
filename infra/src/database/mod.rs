//! Database module - MongoDB implementations
//!
//! This module provides the document store access layer:
//! - Client and database handle management
//! - Document mappings and query translation
//! - Repository pattern implementations

pub mod connection;
pub mod documents;
pub mod errors;
pub mod mongo;
pub mod queries;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::MongoStore;
pub use documents::{PropertyDocument, UserDocument};
pub use mongo::{MongoPropertyRepository, MongoUserRepository};

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";
/// Collection holding property documents
pub const PROPERTIES_COLLECTION: &str = "properties";
