//! The `Message` value object: a severity paired with free-form text.
//!
//! Messages are immutable after creation. Two messages are equal when both
//! their severity and their text are equal.

use super::Severity;
use std::fmt;

/// A severity-tagged message.
///
/// No validation is applied to the text; empty and arbitrarily long strings
/// are accepted as-is.
///
/// # Examples
///
/// ```
/// use message_matchers::message::domain::{Message, Severity};
///
/// let message = Message::new(Severity::Error, "A problem");
///
/// assert_eq!(message.severity(), Severity::Error);
/// assert_eq!(message.text(), "A problem");
/// assert_eq!(message.to_string(), "Message{severity=ERROR, text='A problem'}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    severity: Severity,
    text: String,
}

impl Message {
    /// Creates a message from a severity and text.
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Creates an [`Severity::Info`] message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Creates a [`Severity::Warn`] message.
    #[must_use]
    pub fn warn(text: impl Into<String>) -> Self {
        Self::new(Severity::Warn, text)
    }

    /// Creates a [`Severity::Error`] message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message{{severity={}, text='{}'}}",
            self.severity, self.text
        )
    }
}
