//! Error types for message domain parsing.

use thiserror::Error;

/// Error returned when a string does not name a known severity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);
