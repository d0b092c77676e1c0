//! Shared world state for message matching BDD scenarios.

use message_matchers::message::{
    domain::{Message, Severity},
    matcher::FieldMatcher,
};
use rstest::fixture;

/// Scenario world for message matching behaviour tests.
#[derive(Debug, Default)]
pub struct MessageWorld {
    /// Messages under test, in insertion order.
    pub messages: Vec<Message>,
    /// Matcher built by the last `When` step.
    pub matcher: Option<FieldMatcher>,
    /// Messages accepted by the matcher.
    pub matched: Vec<Message>,
}

impl MessageWorld {
    /// Stores `matcher` and records which messages it accepts.
    pub fn apply(&mut self, matcher: FieldMatcher) {
        self.matched = self
            .messages
            .iter()
            .filter(|message| matcher.matches(message))
            .cloned()
            .collect();
        self.matcher = Some(matcher);
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}

/// Parses a severity name from a feature file.
pub fn parse_severity(name: &str) -> Result<Severity, eyre::Report> {
    Severity::try_from(name).map_err(|err| eyre::eyre!("invalid severity in scenario: {err}"))
}
