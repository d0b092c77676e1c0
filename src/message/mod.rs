//! Severity-tagged messages and matchers over their fields.
//!
//! - **Domain**: immutable value types ([`domain::Message`], [`domain::Severity`])
//! - **Matcher**: [`matcher::FieldMatcher`], a composite predicate with one
//!   optional `googletest` sub-matcher per field, plus presets such as
//!   [`matcher::is_info`]
//!
//! # Example
//!
//! ```
//! use googletest::prelude::*;
//! use message_matchers::message::{
//!     domain::{Message, Severity},
//!     matcher::{has_severity, is_info},
//! };
//!
//! let messages = vec![
//!     Message::new(Severity::Info, "All ok"),
//!     Message::new(Severity::Error, "A problem"),
//! ];
//!
//! assert_that!(messages, contains(is_info()));
//! assert_that!(messages, not(contains(has_severity(Severity::Warn))));
//! ```

pub mod domain;
pub mod matcher;

#[cfg(test)]
mod tests;
