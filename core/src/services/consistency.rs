//! Ordered multi-document writes.
//!
//! The store offers no transactions, so a change spanning a property and a
//! user document runs as a fixed sequence of single-document writes. When a
//! step fails after earlier steps were applied the caller gets a
//! [`DomainError::PartialWrite`] naming what was applied and what was not, so
//! the two collections can be reconciled.

use std::future::Future;

use crate::errors::{DomainError, DomainResult};

/// Tracks the steps of one multi-document write
#[derive(Debug)]
pub struct WriteSequence {
    operation: String,
    completed: Vec<String>,
}

impl WriteSequence {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            completed: Vec::new(),
        }
    }

    /// Run the next step
    ///
    /// A failing first step returns its own error unchanged since nothing was
    /// written yet. Later failures become `PartialWrite`.
    pub async fn step<T, F>(&mut self, name: &str, write: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match write.await {
            Ok(value) => {
                self.completed.push(name.to_string());
                Ok(value)
            }
            Err(err) if self.completed.is_empty() => Err(err),
            Err(err) => {
                tracing::warn!(
                    operation = %self.operation,
                    completed = ?self.completed,
                    failed = name,
                    error = %err,
                    "Multi-document write stopped partway"
                );
                Err(DomainError::PartialWrite {
                    operation: self.operation.clone(),
                    completed: self.completed.clone(),
                    failed: name.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    pub fn completed(&self) -> &[String] {
        &self.completed
    }
}

/// Turn an unmatched write into `NotFound`
pub fn require_match(matched: bool, resource: &str) -> DomainResult<()> {
    if matched {
        Ok(())
    } else {
        Err(DomainError::not_found(resource))
    }
}
