//! Given steps for message matching BDD scenarios.

use super::world::{MessageWorld, parse_severity};
use message_matchers::message::domain::Message;
use rstest_bdd_macros::given;

#[given(r#"a message with severity "{severity}" and text "{text}""#)]
fn a_message_with(
    world: &mut MessageWorld,
    severity: String,
    text: String,
) -> Result<(), eyre::Report> {
    let parsed = parse_severity(&severity)?;
    world.messages.push(Message::new(parsed, text));
    Ok(())
}
