//! Validation and store error types

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid identifier: {value}")]
    InvalidIdentifier { value: String },

    #[error("Invalid action '{action}', expected 'accept' or 'reject'")]
    InvalidAction { action: String },

    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation { rule: String },
}

/// Failures of the document store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store operation '{operation}' timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    #[error("Store connection failed: {message}")]
    Connection { message: String },

    #[error("Failed to decode stored document: {message}")]
    Decode { message: String },

    #[error("Conflicting write: {message}")]
    Conflict { message: String },

    #[error("Store error: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }
}
