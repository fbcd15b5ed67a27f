//! Extractor configuration and small input helpers shared by the routes

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    web, Error, HttpRequest,
};

use dw_core::{DomainError, RecordId, ValidationError};
use dw_shared::error_codes;

use super::error::error_response;

/// JSON bodies: size limit plus the error envelope for malformed payloads
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Invalid JSON body on {}: {}", req.path(), err);
    let (status, message) = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
        }
        JsonPayloadError::ContentType => (
            StatusCode::BAD_REQUEST,
            "Content type must be application/json".to_string(),
        ),
        other => (StatusCode::BAD_REQUEST, format!("Invalid body: {}", other)),
    };
    let response = error_response(status, error_codes::BAD_REQUEST, message);
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log::warn!("Invalid query string on {}: {}", req.path(), err);
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::BAD_REQUEST,
        format!("Invalid query string: {}", err),
    );
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log::warn!("Invalid path parameters on {}: {}", req.path(), err);
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::BAD_REQUEST,
        format!("Invalid path: {}", err),
    );
    InternalError::from_response(err, response).into()
}

/// Parse a path or query identifier
pub fn parse_id(raw: &str) -> Result<RecordId, DomainError> {
    Ok(RecordId::parse(raw.trim())?)
}

/// A required, non-blank input
pub fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            ValidationError::RequiredField {
                field: field.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(required(Some(" a@b.co ".to_string()), "email").unwrap(), "a@b.co");
        assert!(matches!(
            required(Some("  ".to_string()), "email"),
            Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
        ));
        assert!(required(None, "renter_id").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("65f1c0ffee0000000000beef").is_ok());
        assert!(matches!(
            parse_id("not-an-id"),
            Err(DomainError::ValidationErr(ValidationError::InvalidIdentifier { .. }))
        ));
    }
}
