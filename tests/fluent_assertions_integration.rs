//! Integration tests for fluent assertions over messages.

use googletest::prelude::contains_substring;
use message_matchers::assertion::{ReportConfig, assert_list, assert_str};
use message_matchers::message::{
    domain::{Message, Severity},
    matcher::{has_text, is_info},
};

fn messages() -> Vec<Message> {
    vec![
        Message::new(Severity::Info, "All ok"),
        Message::new(Severity::Error, "A problem"),
    ]
}

// ============================================================================
// Scenario: Extracted severities
// ============================================================================

/// Extracting the severities yields INFO and ERROR but never WARN.
#[test]
fn extracted_severities_contain_info_and_error_only() {
    assert_list(&messages())
        .extracting(Message::severity)
        .contains(&Severity::Info)
        .contains(&Severity::Error)
        .does_not_contain(&Severity::Warn);
}

// ============================================================================
// Scenario: Filtered messages
// ============================================================================

/// Filtering on the text keeps only the problem message.
#[test]
fn filtering_on_text_keeps_problem_message() {
    assert_list(&messages())
        .filtered_on(|message| message.text().contains("problem"))
        .is_not_empty()
        .has_size(1)
        .contains(&Message::error("A problem"));
}

/// Field matchers plug into fluent chains.
#[test]
fn fluent_chain_accepts_field_matchers() {
    assert_list(&messages())
        .described_as("messages")
        .with_report_config(ReportConfig::verbose())
        .contains_match(&is_info())
        .contains_match(&has_text(contains_substring("problem")));
}

// ============================================================================
// Scenario: Simple string assertion
// ============================================================================

#[test]
fn greeting_starts_with_hello() {
    assert_str("Hello World").starts_with("Hello");
}

/// A failed chain panics with a report naming the expectation.
#[test]
#[should_panic(expected = "[messages] Expecting actual:")]
fn failed_chain_panics_with_labelled_report() {
    assert_list(&messages())
        .described_as("messages")
        .extracting(Message::severity)
        .contains(&Severity::Warn);
}
