//! Fluent assertion entry points for test code.
//!
//! [`assert_list`] and [`assert_str`] start a chain of checks, with
//! `extracting` and `filtered_on` to reshape lists mid-chain. Checks that
//! take a matcher accept any `googletest` [`Matcher`](googletest::matcher::Matcher),
//! including [`FieldMatcher`](crate::message::matcher::FieldMatcher).
//!
//! Failures are logged at `debug` level through `tracing` before the chain
//! panics.

mod config;
mod error;
pub mod fluent;

pub use config::ReportConfig;
pub use error::AssertionError;
pub use fluent::{ListAssert, StrAssert, assert_list, assert_str};

#[cfg(test)]
mod tests;
