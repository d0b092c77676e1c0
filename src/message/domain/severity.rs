//! Severity classification attached to every message.

use super::ParseSeverityError;
use std::fmt;

/// Importance of a [`Message`](super::Message).
///
/// The set is closed and ordered by declaration: `Info < Warn < Error`.
///
/// # Examples
///
/// ```
/// use message_matchers::message::domain::Severity;
///
/// assert!(Severity::Info < Severity::Error);
/// assert_eq!(Severity::Warn.as_str(), "WARN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational message; nothing is wrong.
    Info,
    /// Something looks suspicious but processing continues.
    Warn,
    /// A problem was detected.
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 3] = [Self::Info, Self::Warn, Self::Error];

    /// Returns the diagnostic name used in descriptions and display output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: &str) -> Result<Self, ParseSeverityError> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            _ => Err(ParseSeverityError(value.to_owned())),
        }
    }
}
