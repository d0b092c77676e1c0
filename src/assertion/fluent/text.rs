//! Fluent assertions over string slices.

use super::{context_prefix, fail};
use crate::assertion::AssertionError;
use googletest::matcher::{Matcher, MatcherResult};

/// Starts a fluent assertion chain over `actual`.
///
/// # Examples
///
/// ```
/// use message_matchers::assertion::assert_str;
///
/// assert_str("Hello World").starts_with("Hello").has_length(11);
/// ```
#[must_use]
pub const fn assert_str(actual: &str) -> StrAssert<'_> {
    StrAssert {
        actual,
        label: None,
    }
}

/// Assertion chain over a borrowed string.
#[derive(Debug, Clone)]
pub struct StrAssert<'a> {
    actual: &'a str,
    label: Option<String>,
}

impl StrAssert<'_> {
    /// Labels the chain; the label prefixes every failure report.
    #[must_use]
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Asserts the string starts with `prefix`.
    ///
    /// # Panics
    ///
    /// Panics if the string does not start with `prefix`.
    #[track_caller]
    pub fn starts_with(self, prefix: &str) -> Self {
        if !self.actual.starts_with(prefix) {
            self.fail(format!("to start with:\n  {prefix:?}"));
        }
        self
    }

    /// Asserts the string ends with `suffix`.
    ///
    /// # Panics
    ///
    /// Panics if the string does not end with `suffix`.
    #[track_caller]
    pub fn ends_with(self, suffix: &str) -> Self {
        if !self.actual.ends_with(suffix) {
            self.fail(format!("to end with:\n  {suffix:?}"));
        }
        self
    }

    /// Asserts the string contains `substring`.
    ///
    /// # Panics
    ///
    /// Panics if `substring` does not occur in the string.
    #[track_caller]
    pub fn contains(self, substring: &str) -> Self {
        if !self.actual.contains(substring) {
            self.fail(format!("to contain:\n  {substring:?}"));
        }
        self
    }

    /// Asserts the string is exactly `expected` characters long.
    ///
    /// # Panics
    ///
    /// Panics if the character count differs.
    #[track_caller]
    pub fn has_length(self, expected: usize) -> Self {
        let actual = self.actual.chars().count();
        if actual != expected {
            self.fail(format!("to have length {expected} but had length {actual}"));
        }
        self
    }

    /// Asserts the string satisfies `matcher`.
    ///
    /// # Panics
    ///
    /// Panics if `matcher` rejects the string.
    #[track_caller]
    pub fn satisfies<M>(self, matcher: &M) -> Self
    where
        M: Matcher<ActualT = str> + ?Sized,
    {
        if !matcher.matches(self.actual).is_match() {
            self.fail(format!(
                "to satisfy:\n  {}\n{}",
                matcher.describe(MatcherResult::Match),
                matcher.explain_match(self.actual)
            ));
        }
        self
    }

    /// Builds the failure report for this chain without panicking.
    #[must_use]
    pub fn report(&self, expectation: String) -> AssertionError {
        AssertionError {
            context: context_prefix(self.label.as_deref()),
            actual: format!("{:?}", self.actual),
            expectation,
        }
    }

    #[track_caller]
    fn fail(&self, expectation: String) -> ! {
        fail(self.report(expectation))
    }
}
