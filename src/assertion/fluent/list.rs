//! Fluent assertions over lists.

use super::{context_prefix, fail};
use crate::assertion::{AssertionError, ReportConfig};
use googletest::matcher::{Matcher, MatcherResult};
use std::fmt;

/// Starts a fluent assertion chain over a copy of `items`.
///
/// # Examples
///
/// ```
/// use message_matchers::assertion::assert_list;
/// use message_matchers::message::domain::{Message, Severity};
///
/// let messages = vec![
///     Message::new(Severity::Info, "All ok"),
///     Message::new(Severity::Error, "A problem"),
/// ];
///
/// assert_list(&messages)
///     .extracting(Message::severity)
///     .contains(&Severity::Info)
///     .contains(&Severity::Error)
///     .does_not_contain(&Severity::Warn);
/// assert_list(&messages)
///     .filtered_on(|m| m.text().contains("problem"))
///     .is_not_empty();
/// ```
#[must_use]
pub fn assert_list<T: Clone + fmt::Debug>(items: &[T]) -> ListAssert<T> {
    ListAssert::new(items.to_vec())
}

/// Assertion chain over an owned list of items.
///
/// Every check returns the chain on success and panics with an
/// [`AssertionError`] report on failure.
#[derive(Debug, Clone)]
pub struct ListAssert<T> {
    items: Vec<T>,
    label: Option<String>,
    config: ReportConfig,
}

impl<T: fmt::Debug> ListAssert<T> {
    /// Starts a chain over `items`.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items,
            label: None,
            config: ReportConfig::new(),
        }
    }

    /// Labels the chain; the label prefixes every failure report.
    #[must_use]
    pub fn described_as(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets how the list is rendered in failure reports.
    #[must_use]
    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the items under test.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Maps each item through `extract` and continues the chain on the results.
    #[must_use]
    pub fn extracting<U, F>(self, extract: F) -> ListAssert<U>
    where
        U: fmt::Debug,
        F: Fn(&T) -> U,
    {
        ListAssert {
            items: self.items.iter().map(extract).collect(),
            label: self.label,
            config: self.config,
        }
    }

    /// Keeps only the items accepted by `keep`.
    #[must_use]
    pub fn filtered_on<F>(self, keep: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        Self {
            items: self.items.into_iter().filter(|item| keep(item)).collect(),
            label: self.label,
            config: self.config,
        }
    }

    /// Asserts the list has no items.
    ///
    /// # Panics
    ///
    /// Panics if the list is not empty.
    #[track_caller]
    #[expect(
        clippy::wrong_self_convention,
        reason = "chain checks consume and return the assertion"
    )]
    pub fn is_empty(self) -> Self {
        if !self.items.is_empty() {
            self.fail("to be empty".to_owned());
        }
        self
    }

    /// Asserts the list has at least one item.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    #[expect(
        clippy::wrong_self_convention,
        reason = "chain checks consume and return the assertion"
    )]
    pub fn is_not_empty(self) -> Self {
        if self.items.is_empty() {
            self.fail("not to be empty".to_owned());
        }
        self
    }

    /// Asserts the list has exactly `expected` items.
    ///
    /// # Panics
    ///
    /// Panics if the length differs.
    #[track_caller]
    pub fn has_size(self, expected: usize) -> Self {
        let actual = self.items.len();
        if actual != expected {
            self.fail(format!("to have size {expected} but had size {actual}"));
        }
        self
    }

    /// Asserts some item is equal to `expected`.
    ///
    /// # Panics
    ///
    /// Panics if no item equals `expected`.
    #[track_caller]
    pub fn contains(self, expected: &T) -> Self
    where
        T: PartialEq,
    {
        if !self.items.contains(expected) {
            self.fail(format!(
                "to contain:\n  {expected:?}\nbut could not find it"
            ));
        }
        self
    }

    /// Asserts no item is equal to `unexpected`.
    ///
    /// # Panics
    ///
    /// Panics if any item equals `unexpected`.
    #[track_caller]
    pub fn does_not_contain(self, unexpected: &T) -> Self
    where
        T: PartialEq,
    {
        if self.items.contains(unexpected) {
            self.fail(format!("not to contain:\n  {unexpected:?}\nbut found it"));
        }
        self
    }

    /// Asserts at least one item satisfies `matcher`.
    ///
    /// # Panics
    ///
    /// Panics if no item satisfies `matcher`.
    #[track_caller]
    pub fn contains_match<M>(self, matcher: &M) -> Self
    where
        M: Matcher<ActualT = T> + ?Sized,
    {
        if !self.items.iter().any(|item| matcher.matches(item).is_match()) {
            self.fail(format!(
                "to contain an element which {}",
                matcher.describe(MatcherResult::Match)
            ));
        }
        self
    }

    /// Asserts no item satisfies `matcher`.
    ///
    /// # Panics
    ///
    /// Panics on the first item that satisfies `matcher`.
    #[track_caller]
    pub fn none_match<M>(self, matcher: &M) -> Self
    where
        M: Matcher<ActualT = T> + ?Sized,
    {
        if let Some(found) = self
            .items
            .iter()
            .find(|item| matcher.matches(item).is_match())
        {
            self.fail(format!(
                "not to contain an element which {}\nbut found:\n  {found:?}",
                matcher.describe(MatcherResult::Match)
            ));
        }
        self
    }

    /// Builds the failure report for this chain without panicking.
    #[must_use]
    pub fn report(&self, expectation: String) -> AssertionError {
        AssertionError {
            context: context_prefix(self.label.as_deref()),
            actual: self.config.render_items(&self.items),
            expectation,
        }
    }

    #[track_caller]
    fn fail(&self, expectation: String) -> ! {
        fail(self.report(expectation))
    }
}
