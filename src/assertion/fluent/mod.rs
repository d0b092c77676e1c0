//! Fluent assertion chains.
//!
//! Each chain owns (or borrows) the value under test and exposes checks that
//! return the chain, so expectations read left to right. A failed check
//! panics with an [`AssertionError`] report.

mod list;
mod text;

pub use list::{ListAssert, assert_list};
pub use text::{StrAssert, assert_str};

use super::AssertionError;

fn context_prefix(label: Option<&str>) -> String {
    label.map_or_else(String::new, |label| format!("[{label}] "))
}

#[track_caller]
fn fail(error: AssertionError) -> ! {
    tracing::debug!(%error, "fluent assertion failed");
    panic!("{error}");
}
