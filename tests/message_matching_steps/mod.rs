//! Step definitions for the message matching scenarios.

mod given;
mod then;
mod when;
pub mod world;
