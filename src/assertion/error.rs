//! Error type describing a failed fluent assertion.
//!
//! Uses `thiserror` so the rendered text doubles as the panic message of
//! the fluent chains.

use thiserror::Error;

/// A fluent expectation that was not met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}Expecting actual:\n  {actual}\n{expectation}")]
pub struct AssertionError {
    /// Caller-supplied label prefix, empty when none was given.
    pub context: String,
    /// Rendering of the value under test.
    pub actual: String,
    /// What was expected and why it failed.
    pub expectation: String,
}
