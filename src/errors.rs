//! Error types for the inventory service

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::error;

use crate::models::EntityKind;

pub type Result<T> = std::result::Result<T, InventoryError>;

/// A single rejected field in a request payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum InventoryError {
    /// No entity of this kind with the given id
    NotFound(EntityKind, u32),

    /// Payload failed field validation
    Validation(EntityKind, Vec<FieldError>),

    /// Request body could not be decoded
    BadRequest(String),

    /// Delete rejected because child rows still reference the entity
    HasDependents(EntityKind),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON serialization/deserialization failed
    Json(serde_json::Error),

    /// Every id of this kind has been handed out
    IdsExhausted(EntityKind),

    /// Request path carried an id that could not be parsed
    InvalidId(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::NotFound(kind, _) => write!(f, "{} not found", kind.title()),
            InventoryError::Validation(kind, _) => write!(f, "Invalid {} data", kind),
            InventoryError::BadRequest(msg) => write!(f, "Invalid request body: {}", msg),
            InventoryError::HasDependents(kind) => write!(
                f,
                "Cannot delete {} with dependent {}",
                kind,
                kind.child().map(EntityKind::plural).unwrap_or("entities")
            ),
            InventoryError::IdsExhausted(kind) => write!(f, "No {} ids left", kind),
            InventoryError::InvalidId(msg) => write!(f, "Resource not found: {}", msg),
            InventoryError::Io(err) => write!(f, "IO error: {}", err),
            InventoryError::Json(err) => write!(f, "JSON error: {}", err),
            InventoryError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io(err) => Some(err),
            InventoryError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(err)
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Json(err)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl ResponseError for InventoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::NotFound(..) | InventoryError::InvalidId(_) => StatusCode::NOT_FOUND,
            InventoryError::Validation(..)
            | InventoryError::BadRequest(_)
            | InventoryError::HasDependents(_) => StatusCode::BAD_REQUEST,
            InventoryError::IdsExhausted(_)
            | InventoryError::Io(_)
            | InventoryError::Json(_)
            | InventoryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            InventoryError::Validation(_, errors) => ErrorBody {
                message: self.to_string(),
                errors: Some(errors.as_slice()),
            },
            // storage details stay in the logs
            InventoryError::IdsExhausted(_)
            | InventoryError::Io(_)
            | InventoryError::Json(_)
            | InventoryError::Config(_) => {
                error!("Request failed: {}", self);
                ErrorBody {
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            _ => ErrorBody {
                message: self.to_string(),
                errors: None,
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependent_messages_name_the_child_kind() {
        assert_eq!(
            InventoryError::HasDependents(EntityKind::Host).to_string(),
            "Cannot delete host with dependent servers"
        );
        assert_eq!(
            InventoryError::HasDependents(EntityKind::Server).to_string(),
            "Cannot delete server with dependent websites"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            InventoryError::NotFound(EntityKind::Website, 9).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            InventoryError::Validation(EntityKind::Host, vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            InventoryError::InvalidId("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            InventoryError::IdsExhausted(EntityKind::Host).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            InventoryError::Config("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = InventoryError::NotFound(EntityKind::Server, 4);
        assert_eq!(err.to_string(), "Server not found");
    }
}
