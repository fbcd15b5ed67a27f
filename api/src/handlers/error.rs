//! Mapping of domain failures to HTTP responses
//!
//! Every failure is rendered with the shared [`ErrorResponse`] envelope:
//!
//! | error | status | code |
//! |---|---|---|
//! | `Validation`, `ValidationErr` | 400 | `validation_error` |
//! | `Forbidden` | 403 | `forbidden` |
//! | `NotFound` | 404 | `not_found` |
//! | `Store(Timeout)` | 500 | `store_timeout` |
//! | `Store(..)` | 500 | `store_error` |
//! | `PartialWrite` | 500 | `partial_write` |

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use validator::ValidationErrors;

use dw_core::{DomainError, DomainResult, StoreError, ValidationError};
use dw_shared::{error_codes, ErrorResponse};

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    if error.is_client_error() {
        log::warn!("Request rejected: {}", error);
    } else {
        log::error!("Request failed: {}", error);
    }

    match error {
        DomainError::Validation { message } => {
            error_response(StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message)
        }
        DomainError::ValidationErr(validation_error) => {
            let field = invalid_field(&validation_error);
            let mut response =
                ErrorResponse::new(error_codes::VALIDATION_ERROR, validation_error.to_string());
            if let Some(field) = field {
                response = response.add_detail("field", field);
            }
            HttpResponse::BadRequest().json(response)
        }
        DomainError::NotFound { resource } => error_response(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        ),
        DomainError::Forbidden { message } => {
            error_response(StatusCode::FORBIDDEN, error_codes::FORBIDDEN, message)
        }
        DomainError::Store(StoreError::Timeout { operation, seconds }) => {
            HttpResponse::InternalServerError().json(
                ErrorResponse::new(error_codes::STORE_TIMEOUT, "The data store did not respond in time")
                    .add_detail("operation", operation)
                    .add_detail("seconds", seconds),
            )
        }
        DomainError::Store(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::STORE_ERROR,
            "The data store operation failed",
        ),
        DomainError::PartialWrite {
            operation,
            completed,
            failed,
            reason,
        } => HttpResponse::InternalServerError().json(
            ErrorResponse::new(
                error_codes::PARTIAL_WRITE,
                format!("{} was only partially applied", operation),
            )
            .add_detail("completed", completed)
            .add_detail("failed", failed)
            .add_detail("reason", reason),
        ),
    }
}

/// 200 with the value as JSON, or the mapped error
pub fn respond_json<T: Serialize>(result: DomainResult<T>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(error) => handle_domain_error(error),
    }
}

/// 400 response listing the fields that failed DTO validation
pub fn validation_failure(errors: &ValidationErrors) -> HttpResponse {
    let fields: std::collections::HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    log::warn!("Request validation failed: {:?}", fields);
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}

/// Response with the standard envelope and no details
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

fn invalid_field(error: &ValidationError) -> Option<&str> {
    match error {
        ValidationError::RequiredField { field } | ValidationError::InvalidFormat { field } => {
            Some(field.as_str())
        }
        ValidationError::InvalidEmail => Some("email"),
        _ => None,
    }
}
