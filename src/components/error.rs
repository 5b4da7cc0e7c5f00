use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a staged or stored value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Missing,
    InvalidNumber,
    InvalidStatus,
    InvalidType,
    UnknownField,
}

impl ValidationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::Missing => "missing",
            ValidationReason::InvalidNumber => "invalid_number",
            ValidationReason::InvalidStatus => "invalid_status",
            ValidationReason::InvalidType => "invalid_type",
            ValidationReason::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("field '{field}' is {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: &str, reason: ValidationReason) -> Self {
        ValidationError {
            field: field.to_string(),
            reason,
        }
    }
}

/// Errors returned by the record collections, form sessions and the shell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeskError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record {id} not found in {kind}")]
    NotFound { kind: String, id: String },

    #[error("Record {id} already exists in {kind}")]
    DuplicateId { kind: String, id: String },

    #[error("No ids left in {kind} after {id}")]
    IdsExhausted { kind: String, id: String },

    #[error("Form session is {actual}, expected {expected}")]
    InvalidState { expected: String, actual: String },

    #[error("Form session for {expected} cannot commit into {actual}")]
    KindMismatch { expected: String, actual: String },

    #[error("Unknown collection: {0}")]
    UnknownKind(String),

    #[error("{0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to render output: {0}")]
    Render(String),
}

impl DeskError {
    pub fn not_found(kind: &str, id: &str) -> Self {
        DeskError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DeskError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
