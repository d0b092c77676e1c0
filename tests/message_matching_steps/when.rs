//! When steps for message matching BDD scenarios.

use super::world::{MessageWorld, parse_severity};
use googletest::prelude::contains_substring;
use message_matchers::message::matcher::{FieldMatcher, has_severity, has_text};
use rstest_bdd_macros::when;

#[when(r#"messages are matched with severity "{severity}""#)]
fn match_by_severity(world: &mut MessageWorld, severity: String) -> Result<(), eyre::Report> {
    let parsed = parse_severity(&severity)?;
    world.apply(has_severity(parsed));
    Ok(())
}

#[when(r#"messages are matched with text containing "{fragment}""#)]
fn match_by_text(world: &mut MessageWorld, fragment: String) {
    world.apply(has_text(contains_substring(fragment)));
}

#[when("messages are matched with any severity and any text")]
fn match_anything(world: &mut MessageWorld) {
    world.apply(FieldMatcher::any());
}
