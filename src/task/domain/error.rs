//! Error types for parsing task domain enumerations.

use thiserror::Error;

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task kind: {0}")]
pub struct ParseTaskKindError(pub String);

/// Error returned while parsing reference types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reference type: {0}")]
pub struct ParseReferenceTypeError(pub String);
