//! Shared request validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use actix_web::error::JsonPayloadError;
use serde_json::json;

use crate::domain::{Error, FieldError};

/// Validation error codes for malformed HTTP requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Path segment naming the resource identifier.
pub(crate) const ID_FIELD: FieldName = FieldName::new("id");

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Parse a path identifier into one of the entity id newtypes.
pub(crate) fn parse_id<T: FromStr>(value: &str, field: FieldName) -> Result<T, Error> {
    value.parse().map_err(|_| invalid_uuid_error(field, value))
}

/// Turn a validator's output into a 400 when it reported anything.
pub(crate) fn ensure_valid(errors: Vec<FieldError>) -> Result<(), Error> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(errors))
    }
}

/// Error reported when a JSON body cannot be read or deserialised.
pub(crate) fn invalid_json_error(error: &JsonPayloadError) -> Error {
    Error::invalid_request("request body is not valid JSON for this resource").with_details(
        json!({
            "code": ErrorCode::InvalidJson.as_str(),
            "message": error.to_string(),
        }),
    )
}
