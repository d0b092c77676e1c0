//! Field-wise matching of [`Message`] values.
//!
//! A [`FieldMatcher`] holds an optional `googletest` matcher per message
//! field. A field with no matcher is a wildcard: it accepts any value. The
//! absence is kept as `None` rather than an always-true matcher, so a
//! wildcard is visible in the type and in the rendered description (`any`).

use super::domain::{Message, Severity};
use googletest::description::Description;
use googletest::matcher::{Matcher, MatcherResult};
use std::fmt;

/// Type-erased matcher for the severity field.
pub type SeverityMatcher = Box<dyn Matcher<ActualT = Severity> + Send + Sync>;

/// Type-erased matcher for the text field.
pub type TextMatcher = Box<dyn Matcher<ActualT = str> + Send + Sync>;

const WILDCARD: &str = "any";

/// Boxes `matcher` for use as the severity field of a [`FieldMatcher`].
#[must_use]
pub fn severity_matcher(
    matcher: impl Matcher<ActualT = Severity> + Send + Sync + 'static,
) -> SeverityMatcher {
    Box::new(matcher)
}

/// Boxes `matcher` for use as the text field of a [`FieldMatcher`].
#[must_use]
pub fn text_matcher(matcher: impl Matcher<ActualT = str> + Send + Sync + 'static) -> TextMatcher {
    Box::new(matcher)
}

/// Composite matcher over the fields of a [`Message`].
///
/// Implements [`googletest::matcher::Matcher`], so it plugs into
/// `assert_that!`, `verify_that!` and container matchers such as
/// `contains` and `each`.
///
/// # Examples
///
/// ```
/// use googletest::prelude::*;
/// use message_matchers::message::{
///     domain::{Message, Severity},
///     matcher::FieldMatcher,
/// };
///
/// let matcher = FieldMatcher::with_text(contains_substring("problem"));
///
/// assert!(matcher.matches(&Message::new(Severity::Error, "A problem")));
/// assert!(!matcher.matches(&Message::new(Severity::Info, "All ok")));
/// assert_that!(
///     matcher.describe(),
///     all!(starts_with("message with severity any and text "), contains_substring("problem"))
/// );
/// ```
#[derive(Default)]
pub struct FieldMatcher {
    severity: Option<SeverityMatcher>,
    text: Option<TextMatcher>,
}

impl FieldMatcher {
    /// Creates a matcher that accepts every message.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            severity: None,
            text: None,
        }
    }

    /// Creates a matcher that checks the severity only.
    #[must_use]
    pub fn with_severity(
        severity: impl Matcher<ActualT = Severity> + Send + Sync + 'static,
    ) -> Self {
        Self::any().and_severity(severity)
    }

    /// Creates a matcher that checks the text only.
    #[must_use]
    pub fn with_text(text: impl Matcher<ActualT = str> + Send + Sync + 'static) -> Self {
        Self::any().and_text(text)
    }

    /// Creates a matcher from optional per-field matchers.
    ///
    /// `None` leaves the corresponding field as a wildcard.
    ///
    /// # Examples
    ///
    /// ```
    /// use googletest::prelude::*;
    /// use message_matchers::message::{
    ///     domain::{Message, Severity},
    ///     matcher::{FieldMatcher, severity_matcher, text_matcher},
    /// };
    ///
    /// let matcher = FieldMatcher::with_severity_and_text(
    ///     Some(severity_matcher(eq(Severity::Warn))),
    ///     Some(text_matcher(starts_with("disk"))),
    /// );
    ///
    /// assert!(matcher.matches(&Message::warn("disk almost full")));
    /// assert!(!matcher.matches(&Message::error("disk almost full")));
    /// ```
    #[must_use]
    pub const fn with_severity_and_text(
        severity: Option<SeverityMatcher>,
        text: Option<TextMatcher>,
    ) -> Self {
        Self { severity, text }
    }

    /// Replaces the severity matcher.
    #[must_use]
    pub fn and_severity(
        mut self,
        severity: impl Matcher<ActualT = Severity> + Send + Sync + 'static,
    ) -> Self {
        self.severity = Some(severity_matcher(severity));
        self
    }

    /// Replaces the text matcher.
    #[must_use]
    pub fn and_text(mut self, text: impl Matcher<ActualT = str> + Send + Sync + 'static) -> Self {
        self.text = Some(text_matcher(text));
        self
    }

    /// Returns `true` if every present field matcher accepts its field.
    #[must_use]
    pub fn matches(&self, message: &Message) -> bool {
        let severity_ok = self
            .severity
            .as_ref()
            .is_none_or(|matcher| matcher.matches(&message.severity()).is_match());
        let text_ok = self
            .text
            .as_ref()
            .is_none_or(|matcher| matcher.matches(message.text()).is_match());
        let matched = severity_ok && text_ok;
        tracing::trace!(%message, matched, "evaluated field matcher");
        matched
    }

    /// Renders `message with severity <..> and text <..>`, using `any` for
    /// wildcard fields.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "message with severity {} and text {}",
            describe_field(self.severity.as_deref()),
            describe_field(self.text.as_deref()),
        )
    }

    /// Returns `true` if neither field has a matcher.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.severity.is_none() && self.text.is_none()
    }
}

fn describe_field<T: fmt::Debug + ?Sized>(
    field: Option<&(dyn Matcher<ActualT = T> + Send + Sync)>,
) -> String {
    field.map_or_else(
        || WILDCARD.to_owned(),
        |matcher| matcher.describe(MatcherResult::Match).to_string(),
    )
}

impl Matcher for FieldMatcher {
    type ActualT = Message;

    fn matches(&self, actual: &Message) -> MatcherResult {
        Self::matches(self, actual).into()
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => format!("is a {}", Self::describe(self)).into(),
            MatcherResult::NoMatch => format!("isn't a {}", Self::describe(self)).into(),
        }
    }
}

impl fmt::Debug for FieldMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldMatcher")
            .field(&self.describe())
            .finish()
    }
}

/// Equality on [`Severity`] rendered with the diagnostic name (`is <INFO>`).
#[derive(Debug, Clone, Copy)]
struct SeverityIs {
    expected: Severity,
}

impl Matcher for SeverityIs {
    type ActualT = Severity;

    fn matches(&self, actual: &Severity) -> MatcherResult {
        (*actual == self.expected).into()
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => format!("is <{}>", self.expected).into(),
            MatcherResult::NoMatch => format!("is not <{}>", self.expected).into(),
        }
    }
}

/// Matches [`Severity::Info`] messages regardless of text.
#[must_use]
pub fn is_info() -> FieldMatcher {
    has_severity(Severity::Info)
}

/// Matches messages with exactly `severity`, regardless of text.
///
/// # Examples
///
/// ```
/// use message_matchers::message::{
///     domain::{Message, Severity},
///     matcher::has_severity,
/// };
///
/// let matcher = has_severity(Severity::Error);
///
/// assert!(matcher.matches(&Message::error("boom")));
/// assert!(!has_severity(Severity::Warn).matches(&Message::error("boom")));
/// assert_eq!(matcher.describe(), "message with severity is <ERROR> and text any");
/// ```
#[must_use]
pub fn has_severity(severity: Severity) -> FieldMatcher {
    FieldMatcher::with_severity(SeverityIs { expected: severity })
}

/// Matches messages whose text satisfies `text`, regardless of severity.
#[must_use]
pub fn has_text(text: impl Matcher<ActualT = str> + Send + Sync + 'static) -> FieldMatcher {
    FieldMatcher::with_text(text)
}
