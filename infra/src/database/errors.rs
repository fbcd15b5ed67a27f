//! Driver error classification and the per-operation timeout.

use std::future::Future;
use std::time::Duration;

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

use dw_core::{DomainError, StoreError};

/// Server code for duplicate key violations
const DUPLICATE_KEY: i32 = 11000;

/// Classify a driver error kind
pub fn classify(kind: &ErrorKind, message: String) -> StoreError {
    match kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Connection { message },
        ErrorKind::BsonDeserialization(_) => StoreError::Decode { message },
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY => {
            StoreError::Conflict { message }
        }
        _ => StoreError::Backend { message },
    }
}

/// Map a driver error to a store error tagged with the operation name
pub fn map_mongo_error(operation: &str, err: MongoError) -> StoreError {
    classify(err.kind.as_ref(), format!("{}: {}", operation, err))
}

/// Run one store operation under `limit`
///
/// Expiry yields [`StoreError::Timeout`]; driver failures are classified by
/// [`map_mongo_error`].
pub async fn bounded<T, F>(operation: &str, limit: Duration, op: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, MongoError>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            let mapped = map_mongo_error(operation, err);
            tracing::error!(operation, error = %mapped, "Store operation failed");
            Err(mapped.into())
        }
        Err(_) => {
            tracing::warn!(operation, seconds = limit.as_secs(), "Store operation timed out");
            Err(StoreError::Timeout {
                operation: operation.to_string(),
                seconds: limit.as_secs(),
            }
            .into())
        }
    }
}
