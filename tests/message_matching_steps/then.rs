//! Then steps for message matching BDD scenarios.

use super::world::MessageWorld;
use rstest_bdd_macros::then;

#[then("the number of matching messages is {count:usize}")]
fn matching_count(world: &MessageWorld, count: usize) -> Result<(), eyre::Report> {
    if world.matched.len() != count {
        return Err(eyre::eyre!(
            "expected {count} matching messages, found {:?}",
            world.matched
        ));
    }
    Ok(())
}

#[then(r#"the matching message has text "{text}""#)]
fn matching_text(world: &MessageWorld, text: String) -> Result<(), eyre::Report> {
    let matched = world
        .matched
        .first()
        .ok_or_else(|| eyre::eyre!("no message matched in scenario world"))?;
    if matched.text() != text {
        return Err(eyre::eyre!(
            "expected matching text '{text}', found '{}'",
            matched.text()
        ));
    }
    Ok(())
}

#[then(r#"the matcher is described as "{description}""#)]
fn matcher_description(world: &MessageWorld, description: String) -> Result<(), eyre::Report> {
    let matcher = world
        .matcher
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no matcher built in scenario world"))?;
    let actual = matcher.describe();
    if actual != description {
        return Err(eyre::eyre!(
            "expected description '{description}', found '{actual}'"
        ));
    }
    Ok(())
}
