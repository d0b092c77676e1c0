//! Message matchers: severity-tagged messages and composable matchers.
//!
//! This crate provides a small immutable [`message::domain::Message`] type,
//! a field-wise matcher built on `googletest`'s [`Matcher`](googletest::matcher::Matcher)
//! trait, and fluent assertion chains for test code that inspects
//! collections of messages.
//!
//! # Modules
//!
//! - [`message`]: message domain types and the field-wise [`message::matcher::FieldMatcher`]
//! - [`assertion`]: fluent (`assert_list`, `assert_str`) assertions with
//!   rendered failure reports; matcher-style checks use `googletest`'s
//!   `assert_that!` and `verify_that!` directly

pub mod assertion;
pub mod message;
